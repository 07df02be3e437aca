// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Static Catalog
//!
//! A catalog backed by a schema document instead of a live connection.
//!
//! ## Document format
//!
//! ```yaml
//! databases:
//!   - name: app
//!     tables:
//!       - name: users
//!         primary_key: [id]
//!         columns:
//!           - { name: id, type: bigint, nullable: false }
//!           - { name: email, type: varchar(255), nullable: true }
//! ```
//!
//! JSON documents use the same shape. The format is chosen by file
//! extension (`.json`, `.yaml`, `.yml`).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::metadata::{ColumnInfo, IndexInfo};
use crate::{Catalog, CatalogError, CatalogResult};

/// Top-level schema document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaDocument {
    #[serde(default)]
    pub databases: Vec<DatabaseDocument>,
}

/// One database in a schema document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseDocument {
    pub name: String,
    #[serde(default)]
    pub tables: Vec<TableDocument>,
}

/// One table in a schema document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDocument {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<ColumnInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexes: Option<Vec<IndexInfo>>,
}

/// Static catalog with predefined schema data
///
/// Used by the command-line tool and anywhere completion should work
/// without a database connection.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    document: SchemaDocument,
}

impl StaticCatalog {
    pub fn new(document: SchemaDocument) -> Self {
        Self { document }
    }

    /// Parse a JSON schema document
    pub fn from_json_str(text: &str) -> CatalogResult<Self> {
        Ok(Self::new(serde_json::from_str(text)?))
    }

    /// Parse a YAML schema document
    pub fn from_yaml_str(text: &str) -> CatalogResult<Self> {
        Ok(Self::new(serde_yaml::from_str(text)?))
    }

    /// Load a schema document, picking the format from the file extension
    pub fn from_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&text),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&text),
            other => Err(CatalogError::ConfigurationError(format!(
                "unrecognized schema file extension: {}",
                other.unwrap_or("<none>")
            ))),
        }
    }

    pub fn document(&self) -> &SchemaDocument {
        &self.document
    }

    fn database(&self, database: &str) -> CatalogResult<&DatabaseDocument> {
        self.document
            .databases
            .iter()
            .find(|db| db.name == database)
            .ok_or_else(|| CatalogError::DatabaseNotFound(database.to_string()))
    }

    fn table(&self, database: &str, table: &str) -> CatalogResult<&TableDocument> {
        self.database(database)?
            .tables
            .iter()
            .find(|t| t.name == table)
            .ok_or_else(|| CatalogError::TableNotFound(table.to_string(), database.to_string()))
    }
}

#[async_trait]
impl Catalog for StaticCatalog {
    async fn list_databases(&self) -> CatalogResult<Vec<String>> {
        Ok(self
            .document
            .databases
            .iter()
            .map(|db| db.name.clone())
            .collect())
    }

    async fn list_tables(&self, database: &str) -> CatalogResult<Vec<String>> {
        Ok(self
            .database(database)?
            .tables
            .iter()
            .map(|t| t.name.clone())
            .collect())
    }

    async fn get_column_schema(
        &self,
        database: &str,
        table: &str,
    ) -> CatalogResult<Vec<ColumnInfo>> {
        Ok(self.table(database, table)?.columns.clone())
    }

    async fn get_primary_key(
        &self,
        database: &str,
        table: &str,
    ) -> CatalogResult<Option<Vec<String>>> {
        Ok(self.table(database, table)?.primary_key.clone())
    }

    async fn list_indexes(
        &self,
        database: &str,
        table: &str,
    ) -> CatalogResult<Option<Vec<IndexInfo>>> {
        Ok(self.table(database, table)?.indexes.clone())
    }
}
