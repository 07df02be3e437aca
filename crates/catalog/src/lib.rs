// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # SQL Complete - Catalog Layer
//!
//! This crate provides the schema metadata side of the completion engine:
//!
//! - **[`Catalog`]**: the async interface to whatever knows the schema of a
//!   connection (a live driver, a schema document, a test double)
//! - **[`StaticCatalog`]**: schema definitions from files (YAML/JSON)
//! - **[`SchemaCache`]**: per-connection memoization with a timeout and
//!   single-flight refresh
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use sql_complete_catalog::{SchemaCache, StaticCatalog};
//!
//! # async fn run() -> Result<(), sql_complete_catalog::CatalogError> {
//! let catalog = StaticCatalog::from_file("schema.yaml")?;
//! let cache = SchemaCache::new("local", Arc::new(catalog));
//! let schema = cache.get_schema().await;
//! for key in schema.tables.keys() {
//!     println!("{key}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod error;
pub mod metadata;
pub mod r#static;
pub mod r#trait;

// Re-exports
pub use cache::{DEFAULT_CACHE_TIMEOUT, SchemaCache};
pub use error::{CatalogError, CatalogResult};
pub use metadata::{ColumnInfo, DatabaseSchema, IndexInfo, TableInfo};
pub use r#static::{DatabaseDocument, SchemaDocument, StaticCatalog, TableDocument};
pub use r#trait::Catalog;
