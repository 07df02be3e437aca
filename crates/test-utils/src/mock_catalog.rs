// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Mock catalog implementation for testing
//!
//! Provides an in-memory catalog with builder pattern for easy test setup,
//! plus per-endpoint call counters, artificial latency and failure
//! injection for exercising the schema cache.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use sql_complete_catalog::{
    Catalog, CatalogError, CatalogResult, ColumnInfo, IndexInfo, TableInfo,
};

/// Metadata endpoints of the [`Catalog`] trait
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ListDatabases,
    ListTables,
    GetColumnSchema,
    GetPrimaryKey,
    ListIndexes,
}

impl Endpoint {
    const ALL: [Endpoint; 5] = [
        Endpoint::ListDatabases,
        Endpoint::ListTables,
        Endpoint::GetColumnSchema,
        Endpoint::GetPrimaryKey,
        Endpoint::ListIndexes,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// In-memory mock catalog for testing
#[derive(Debug, Default)]
pub struct MockCatalog {
    databases: Vec<String>,
    tables: Vec<TableInfo>,
    latency: Option<Duration>,
    failures: HashMap<Endpoint, CatalogError>,
    calls: [AtomicUsize; 5],
}

impl MockCatalog {
    /// Create a new empty mock catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table to the catalog. Its database is registered as well.
    pub fn add_table(mut self, table: TableInfo) -> Self {
        if !self.databases.contains(&table.database) {
            self.databases.push(table.database.clone());
        }
        self.tables.push(table);
        self
    }

    /// Number of calls made to `endpoint` so far
    pub fn calls(&self, endpoint: Endpoint) -> usize {
        self.calls[endpoint.index()].load(Ordering::SeqCst)
    }

    /// Total number of calls across every endpoint
    pub fn total_calls(&self) -> usize {
        Endpoint::ALL.iter().map(|e| self.calls(*e)).sum()
    }

    fn find_table(&self, database: &str, table: &str) -> CatalogResult<&TableInfo> {
        self.tables
            .iter()
            .find(|t| t.database == database && t.name == table)
            .ok_or_else(|| CatalogError::TableNotFound(table.to_string(), database.to_string()))
    }

    /// Count the call, wait out the latency, then apply any injected failure
    async fn enter(&self, endpoint: Endpoint) -> CatalogResult<()> {
        self.calls[endpoint.index()].fetch_add(1, Ordering::SeqCst);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        match self.failures.get(&endpoint) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl Catalog for MockCatalog {
    async fn list_databases(&self) -> CatalogResult<Vec<String>> {
        self.enter(Endpoint::ListDatabases).await?;
        Ok(self.databases.clone())
    }

    async fn list_tables(&self, database: &str) -> CatalogResult<Vec<String>> {
        self.enter(Endpoint::ListTables).await?;
        if !self.databases.iter().any(|db| db == database) {
            return Err(CatalogError::DatabaseNotFound(database.to_string()));
        }
        Ok(self
            .tables
            .iter()
            .filter(|t| t.database == database)
            .map(|t| t.name.clone())
            .collect())
    }

    async fn get_column_schema(
        &self,
        database: &str,
        table: &str,
    ) -> CatalogResult<Vec<ColumnInfo>> {
        self.enter(Endpoint::GetColumnSchema).await?;
        Ok(self.find_table(database, table)?.columns.clone())
    }

    async fn get_primary_key(
        &self,
        database: &str,
        table: &str,
    ) -> CatalogResult<Option<Vec<String>>> {
        self.enter(Endpoint::GetPrimaryKey).await?;
        Ok(self.find_table(database, table)?.primary_key.clone())
    }

    async fn list_indexes(
        &self,
        database: &str,
        table: &str,
    ) -> CatalogResult<Option<Vec<IndexInfo>>> {
        self.enter(Endpoint::ListIndexes).await?;
        Ok(self.find_table(database, table)?.indexes.clone())
    }
}

/// Builder for creating mock catalogs with a fluent API
pub struct MockCatalogBuilder {
    catalog: MockCatalog,
}

impl Default for MockCatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalogBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            catalog: MockCatalog::new(),
        }
    }

    /// Add the standard test schema: `app` (users, orders, products) and
    /// `analytics` (events)
    pub fn with_standard_schema(mut self) -> Self {
        self.catalog = self
            .catalog
            .add_table(
                TableInfo::new("app", "users")
                    .with_columns(vec![
                        ColumnInfo::new("id", "bigint"),
                        ColumnInfo::new("email", "varchar(255)"),
                        ColumnInfo::new("name", "varchar(100)").with_nullable(true),
                        ColumnInfo::new("created_at", "timestamp")
                            .with_nullable(true)
                            .with_default("CURRENT_TIMESTAMP"),
                    ])
                    .with_primary_key(["id"])
                    .with_indexes(vec![IndexInfo {
                        name: "uk_users_email".to_string(),
                        columns: vec!["email".to_string()],
                        unique: true,
                    }]),
            )
            .add_table(
                TableInfo::new("app", "orders")
                    .with_columns(vec![
                        ColumnInfo::new("id", "bigint"),
                        ColumnInfo::new("user_id", "bigint").with_comment("Owner of the order"),
                        ColumnInfo::new("total", "decimal(10,2)").with_nullable(true),
                        ColumnInfo::new("status", "varchar(50)"),
                        ColumnInfo::new("created_at", "timestamp").with_nullable(true),
                    ])
                    .with_primary_key(["id"]),
            )
            .add_table(
                TableInfo::new("app", "products")
                    .with_columns(vec![
                        ColumnInfo::new("id", "bigint"),
                        ColumnInfo::new("name", "varchar(255)"),
                        ColumnInfo::new("price", "decimal(10,2)"),
                        ColumnInfo::new("stock", "int").with_nullable(true),
                    ])
                    .with_primary_key(["id"]),
            )
            .add_table(TableInfo::new("analytics", "events").with_columns(vec![
                ColumnInfo::new("id", "bigint"),
                ColumnInfo::new("user_id", "bigint"),
                ColumnInfo::new("kind", "varchar(32)"),
            ]));

        self
    }

    /// Add a PostgreSQL-shaped schema: database `shop` whose tables are
    /// reported as `schema.table`
    pub fn with_postgres_schema(mut self) -> Self {
        self.catalog = self
            .catalog
            .add_table(
                TableInfo::new("shop", "public.users")
                    .with_columns(vec![
                        ColumnInfo::new("id", "integer"),
                        ColumnInfo::new("email", "text"),
                        ColumnInfo::new("createdAt", "timestamptz").with_nullable(true),
                    ])
                    .with_primary_key(["id"]),
            )
            .add_table(
                TableInfo::new("shop", "public.orders").with_columns(vec![
                    ColumnInfo::new("id", "integer"),
                    ColumnInfo::new("user_id", "integer"),
                    ColumnInfo::new("total", "numeric"),
                ]),
            )
            .add_table(TableInfo::new("shop", "sales.invoices").with_columns(vec![
                ColumnInfo::new("id", "integer"),
                ColumnInfo::new("order_id", "integer"),
            ]));

        self
    }

    /// Add a SQLite-shaped schema: database `main`
    pub fn with_sqlite_schema(mut self) -> Self {
        self.catalog = self
            .catalog
            .add_table(TableInfo::new("main", "users").with_columns(vec![
                ColumnInfo::new("id", "INTEGER"),
                ColumnInfo::new("email", "TEXT"),
            ]))
            .add_table(TableInfo::new("main", "orders").with_columns(vec![
                ColumnInfo::new("id", "INTEGER"),
                ColumnInfo::new("user_id", "INTEGER"),
                ColumnInfo::new("total", "REAL").with_nullable(true),
            ]));

        self
    }

    /// Add a custom table
    pub fn with_table(mut self, table: TableInfo) -> Self {
        self.catalog = self.catalog.add_table(table);
        self
    }

    /// Delay every call by `latency` (uses `tokio::time`, so paused-clock
    /// tests control it)
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.catalog.latency = Some(latency);
        self
    }

    /// Make every call to `endpoint` fail with `error`
    pub fn failing(mut self, endpoint: Endpoint, error: CatalogError) -> Self {
        self.catalog.failures.insert(endpoint, error);
        self
    }

    /// Build the mock catalog
    pub fn build(self) -> MockCatalog {
        self.catalog
    }
}
