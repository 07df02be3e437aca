// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # SQL Complete - Completion Provider
//!
//! This crate ties the context parser and the schema cache together into a
//! completion provider for database-client editors.
//!
//! ## Overview
//!
//! - Multi-dialect support (MySQL, MariaDB, PostgreSQL, SQLite)
//! - Alias-aware column suggestions
//! - Tiered ranking with prefix filtering
//! - Per-connection schema caches
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Editor integration / LSP client    │
//! └──────────────┬──────────────────────────┘
//!                │ provide_completion_items(model, position)
//!                ↓
//! ┌─────────────────────────────────────────┐
//! │           CompletionProvider            │
//! ├─────────────────────────────────────────┤
//! │  • parse_context   • DialectAdapter     │
//! │  • ranking         • SchemaCache        │
//! └──────────────┬──────────────────────────┘
//!                │
//!         ┌──────┴──────┬────────────────┐
//!         ↓             ↓                ↓
//! ┌────────────┐ ┌──────────────┐ ┌──────────────┐
//! │   Config   │ │   Catalog    │ │   Function   │
//! │  Factory   │ │   Manager    │ │   Registry   │
//! └────────────┘ └──────────────┘ └──────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use sql_complete_catalog::{SchemaCache, StaticCatalog};
//! use sql_complete_ir::Position;
//! use sql_complete_provider::create_provider;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let catalog = StaticCatalog::from_file("schema.yaml")?;
//! let cache = Arc::new(SchemaCache::new("local", Arc::new(catalog)));
//! let provider = create_provider("mysql", cache)?;
//!
//! let list = provider
//!     .provide_completion_items("SELECT * FROM ", Position::new(1, 15))
//!     .await;
//! for item in list.suggestions {
//!     println!("{} -> {}", item.label, item.insert_text);
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog_manager;
pub mod completion;
pub mod config;
pub mod factory;
pub mod lsp;

pub use catalog_manager::CatalogManager;
pub use completion::dialect::{
    DialectAdapter, MySqlAdapter, PostgresAdapter, SqliteAdapter, adapter_for,
};
pub use completion::ranking::sort_and_filter_suggestions;
pub use completion::{BufferModel, CompletionProvider, Registration};
pub use config::{ConfigError, EngineConfig};
pub use factory::{create_provider, parse_database_type, provider_from_config};
