// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Engine Configuration
//!
//! Settings of one completion session: which dialect to speak, which
//! connection's schema to use, and how long a fetched schema stays fresh.
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use sql_complete_provider::EngineConfig;
//! use sql_complete_ir::Dialect;
//!
//! let settings = json!({
//!     "sqlComplete": {
//!         "databaseType": "postgres",
//!         "connectionId": "conn-1",
//!         "currentDatabase": "shop"
//!     }
//! });
//! let config = EngineConfig::from_settings(&settings).unwrap();
//! assert_eq!(config.dialect, Dialect::PostgreSQL);
//! assert_eq!(config.cache_timeout_secs, 300);
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use sql_complete_catalog::DEFAULT_CACHE_TIMEOUT;
use sql_complete_ir::Dialect;

/// Settings key holding the engine section
pub const SETTINGS_SECTION: &str = "sqlComplete";

/// Characters that trigger a completion request
pub const DEFAULT_TRIGGER_CHARACTERS: [char; 3] = ['.', ' ', '('];

/// Main engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// SQL dialect
    pub dialect: Dialect,

    /// Connection whose schema cache serves this session
    pub connection_id: String,

    /// Database the session is using; tables elsewhere get qualified entries
    pub current_database: Option<String>,

    /// Lifetime of a fetched schema (seconds)
    pub cache_timeout_secs: u64,

    pub trigger_characters: Vec<char>,

    /// Truncate the ranked list to this many items
    pub max_items: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::MySQL,
            connection_id: "default".to_string(),
            current_database: None,
            cache_timeout_secs: DEFAULT_CACHE_TIMEOUT.as_secs(),
            trigger_characters: DEFAULT_TRIGGER_CHARACTERS.to_vec(),
            max_items: None,
        }
    }
}

/// On-the-wire shape shared by client settings and config files
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    database_type: String,
    #[serde(default)]
    connection_id: Option<String>,
    #[serde(default)]
    current_database: Option<String>,
    #[serde(default)]
    cache_timeout_secs: Option<u64>,
    #[serde(default)]
    trigger_characters: Option<Vec<char>>,
    #[serde(default)]
    max_items: Option<usize>,
}

impl TryFrom<RawConfig> for EngineConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let dialect = raw
            .database_type
            .parse::<Dialect>()
            .map_err(|_| ConfigError::UnsupportedDialect(raw.database_type.clone()))?;
        let defaults = EngineConfig::default();

        let config = EngineConfig {
            dialect,
            connection_id: raw.connection_id.unwrap_or(defaults.connection_id),
            current_database: raw.current_database,
            cache_timeout_secs: raw.cache_timeout_secs.unwrap_or(defaults.cache_timeout_secs),
            trigger_characters: raw
                .trigger_characters
                .unwrap_or(defaults.trigger_characters),
            max_items: raw.max_items,
        };
        config.validate()?;
        Ok(config)
    }
}

impl EngineConfig {
    /// Create a configuration with defaults for everything but the dialect
    /// and connection
    pub fn new(dialect: Dialect, connection_id: impl Into<String>) -> Self {
        Self {
            dialect,
            connection_id: connection_id.into(),
            ..Default::default()
        }
    }

    /// Builder method: set the current database
    pub fn with_current_database(mut self, database: impl Into<String>) -> Self {
        self.current_database = Some(database.into());
        self
    }

    /// Builder method: set the item limit
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }

    pub fn cache_timeout(&self) -> Duration {
        Duration::from_secs(self.cache_timeout_secs)
    }

    /// Validate the configuration
    ///
    /// Checks that:
    /// - The cache timeout is not zero
    /// - The connection id is not empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_timeout_secs == 0 {
            return Err(ConfigError::InvalidCacheTimeout);
        }

        if self.connection_id.trim().is_empty() {
            return Err(ConfigError::MissingConnectionId);
        }

        Ok(())
    }

    /// Parse engine config from a client settings payload.
    ///
    /// Expected shape:
    /// {
    ///   "sqlComplete": {
    ///     "databaseType": "mysql" | "mariadb" | "postgresql" | "sqlite",
    ///     "connectionId": "...",
    ///     "currentDatabase": "...",
    ///     "cacheTimeoutSecs": 300,
    ///     "maxItems": 100
    ///   }
    /// }
    pub fn from_settings(settings: &Value) -> Result<Self, ConfigError> {
        let section = settings
            .get(SETTINGS_SECTION)
            .ok_or_else(|| ConfigError::Parse(format!("missing `{SETTINGS_SECTION}` section")))?;
        let raw = RawConfig::deserialize(section).map_err(|e| ConfigError::Parse(e.to_string()))?;
        raw.try_into()
    }

    /// Load engine config from a YAML file with the same keys as the
    /// settings section
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig =
            serde_yaml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        raw.try_into()
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No adapter is registered for the database type
    #[error("unsupported database type: {0}")]
    UnsupportedDialect(String),

    #[error("cache timeout must be greater than zero")]
    InvalidCacheTimeout,

    #[error("connection id is required")]
    MissingConnectionId,

    /// Malformed settings or config file
    #[error("invalid configuration: {0}")]
    Parse(String),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}
