// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Catalog trait for database schema abstraction
//!
//! This module defines the async Catalog trait the schema cache fetches
//! metadata through. Implementations wrap a live connection, a static
//! schema document, or a test double.

use crate::error::CatalogResult;
use crate::metadata::{ColumnInfo, IndexInfo};

/// Catalog trait for database schema abstraction
///
/// Every method may fail; callers in the completion pipeline degrade
/// failures instead of propagating them.
///
/// # Examples
///
/// ```rust,ignore
/// use sql_complete_catalog::{Catalog, CatalogError};
///
/// async fn count_tables(catalog: &impl Catalog) -> Result<usize, CatalogError> {
///     let mut total = 0;
///     for db in catalog.list_databases().await? {
///         total += catalog.list_tables(&db).await?.len();
///     }
///     Ok(total)
/// }
/// ```
#[async_trait::async_trait]
pub trait Catalog: Send + Sync {
    /// List all databases visible to the connection
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ConnectionFailed` if database connection fails.
    /// Returns `CatalogError::QueryTimeout` if the query exceeds timeout.
    async fn list_databases(&self) -> CatalogResult<Vec<String>>;

    /// List table names in `database`
    ///
    /// PostgreSQL sources report names as `schema.table`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DatabaseNotFound` if the database doesn't exist.
    async fn list_tables(&self, database: &str) -> CatalogResult<Vec<String>>;

    /// Get column definitions for a table, in ordinal order
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::TableNotFound` if the table doesn't exist.
    /// Returns `CatalogError::PermissionDenied` if access is denied.
    async fn get_column_schema(&self, database: &str, table: &str)
    -> CatalogResult<Vec<ColumnInfo>>;

    /// Primary-key columns of a table, when the source can report them
    async fn get_primary_key(
        &self,
        _database: &str,
        _table: &str,
    ) -> CatalogResult<Option<Vec<String>>> {
        Ok(None)
    }

    /// Indexes of a table, when the source can report them
    async fn list_indexes(
        &self,
        _database: &str,
        _table: &str,
    ) -> CatalogResult<Option<Vec<IndexInfo>>> {
        Ok(None)
    }
}
