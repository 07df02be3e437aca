// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Provider factory
//!
//! Picks the dialect adapter for a connection's database type. An unknown
//! type is a configuration bug and fails at construction time.

use std::sync::Arc;

use sql_complete_catalog::SchemaCache;
use sql_complete_ir::Dialect;
use tracing::warn;

use crate::completion::CompletionProvider;
use crate::completion::dialect::adapter_for;
use crate::config::{ConfigError, EngineConfig};

/// Parse a database-type string (`mysql`, `mariadb`, `postgresql`,
/// `postgres`, `pg`, `sqlite`, `sqlite3`; case-insensitive)
pub fn parse_database_type(database_type: &str) -> Result<Dialect, ConfigError> {
    database_type.parse::<Dialect>().map_err(|_| {
        warn!(database_type, "unsupported database type");
        ConfigError::UnsupportedDialect(database_type.to_string())
    })
}

/// Create a provider for `database_type` over `cache`
///
/// # Errors
///
/// Returns `ConfigError::UnsupportedDialect` if no adapter serves the type.
pub fn create_provider(
    database_type: &str,
    cache: Arc<SchemaCache>,
) -> Result<CompletionProvider, ConfigError> {
    let dialect = parse_database_type(database_type)?;
    Ok(CompletionProvider::new(adapter_for(dialect), cache))
}

/// Create a provider from a validated configuration
pub fn provider_from_config(
    config: &EngineConfig,
    cache: Arc<SchemaCache>,
) -> Result<CompletionProvider, ConfigError> {
    config.validate()?;
    Ok(CompletionProvider::new(adapter_for(config.dialect), cache)
        .with_current_database(config.current_database.clone())
        .with_max_items(config.max_items))
}
