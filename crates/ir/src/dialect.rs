// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Dialect Support
//!
//! This module defines the SQL dialects the completion engine knows about.
//!
//! ## Dialect Families
//!
//! - **MySQL Family**: MySQL and MariaDB
//!   - Backtick identifiers, two-level `database.table` namespace
//! - **PostgreSQL Family**: PostgreSQL
//!   - Double-quoted identifiers, three-level `database.schema.table` namespace
//! - **SQLite Family**: SQLite
//!   - Double-quoted identifiers, attached databases (`main.table`)
//!
//! A dialect is selected by the database-type string of a connection.
//! Parsing is case-insensitive and accepts the common aliases
//! (`postgres`, `pg`, `sqlite3`). Anything else is rejected with
//! [`DialectParseError`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supported SQL dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// MySQL (5.7, 8.0)
    MySQL,
    /// MariaDB (10.x, 11.x)
    MariaDB,
    /// PostgreSQL (12+)
    PostgreSQL,
    /// SQLite 3
    SQLite,
}

impl Dialect {
    /// All supported dialects, in registration order
    pub const ALL: [Dialect; 4] = [
        Dialect::MySQL,
        Dialect::MariaDB,
        Dialect::PostgreSQL,
        Dialect::SQLite,
    ];

    /// Returns the family this dialect belongs to
    pub fn family(&self) -> DialectFamily {
        match self {
            Dialect::MySQL | Dialect::MariaDB => DialectFamily::MySQL,
            Dialect::PostgreSQL => DialectFamily::PostgreSQL,
            Dialect::SQLite => DialectFamily::SQLite,
        }
    }

    /// Canonical database-type string for this dialect
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::MySQL => "mysql",
            Dialect::MariaDB => "mariadb",
            Dialect::PostgreSQL => "postgresql",
            Dialect::SQLite => "sqlite",
        }
    }

    /// Number of segments in a fully qualified table key
    /// (`database.table` vs. `database.schema.table`)
    pub fn namespace_depth(&self) -> usize {
        match self.family() {
            DialectFamily::PostgreSQL => 3,
            DialectFamily::MySQL | DialectFamily::SQLite => 2,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a database-type string names no known dialect
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported database type: {0}")]
pub struct DialectParseError(pub String);

impl FromStr for Dialect {
    type Err = DialectParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" => Ok(Dialect::MySQL),
            "mariadb" => Ok(Dialect::MariaDB),
            "postgresql" | "postgres" | "pg" => Ok(Dialect::PostgreSQL),
            "sqlite" | "sqlite3" => Ok(Dialect::SQLite),
            _ => Err(DialectParseError(s.to_string())),
        }
    }
}

/// Dialect family groupings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DialectFamily {
    MySQL,
    PostgreSQL,
    SQLite,
}
