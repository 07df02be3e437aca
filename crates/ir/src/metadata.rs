// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Metadata types for database schema information
//!
//! This module defines the schema snapshot the completion engine works
//! against: databases, tables keyed by a dialect-specific qualified name,
//! and the columns of every table.
//!
//! A [`DatabaseSchema`] is assembled once by the schema cache and then
//! shared read-only behind an `Arc`. Refreshing produces a new instance.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Metadata for a database column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    /// Column name
    pub name: String,
    /// Raw dialect type string (e.g. `varchar(255)`, `int unsigned`)
    #[serde(rename = "type")]
    pub data_type: String,
    /// Whether the column is nullable
    #[serde(default)]
    pub nullable: bool,
    /// Default value (as SQL expression string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Column comment/description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ColumnInfo {
    /// Create a new column with builder pattern
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            nullable: false,
            default: None,
            comment: None,
        }
    }

    /// Builder method: set nullable
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Builder method: set default value
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Builder method: set comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Index definition attached to a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexInfo {
    pub name: String,
    pub columns: Vec<String>,
    #[serde(default)]
    pub unique: bool,
}

/// Metadata for a database table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableInfo {
    /// Database the table lives in
    pub database: String,
    /// Table name as the source reports it. PostgreSQL sources report
    /// `schema.table`, which yields a three-segment key.
    pub name: String,
    /// Column definitions, in ordinal order
    #[serde(default)]
    pub columns: Vec<ColumnInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexes: Option<Vec<IndexInfo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<Vec<String>>,
}

impl TableInfo {
    /// Create new table metadata with builder pattern
    pub fn new(database: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            name: name.into(),
            columns: Vec::new(),
            indexes: None,
            primary_key: None,
        }
    }

    /// Builder method: set columns
    pub fn with_columns(mut self, columns: Vec<ColumnInfo>) -> Self {
        self.columns = columns;
        self
    }

    /// Builder method: set primary key columns
    pub fn with_primary_key<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_key = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Builder method: set indexes
    pub fn with_indexes(mut self, indexes: Vec<IndexInfo>) -> Self {
        self.indexes = Some(indexes);
        self
    }

    /// Qualified key of this table: `database.name`
    pub fn key(&self) -> String {
        format!("{}.{}", self.database, self.name)
    }

    /// Last segment of the table name (`users` for `public.users`)
    pub fn bare_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// Schema segment of the table name, if the source reported one
    pub fn schema(&self) -> Option<&str> {
        self.name.rsplit_once('.').map(|(schema, _)| schema)
    }

    /// Get column by name
    pub fn get_column(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Whether `column` is part of the primary key
    pub fn is_primary_key(&self, column: &str) -> bool {
        self.primary_key
            .as_ref()
            .is_some_and(|pk| pk.iter().any(|c| c == column))
    }
}

/// Snapshot of all metadata known for one connection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSchema {
    /// Database names
    pub databases: BTreeSet<String>,
    /// Tables keyed by qualified name (`db.table` or `db.schema.table`)
    pub tables: BTreeMap<String, TableInfo>,
    /// Reserved for source-provided function names
    #[serde(default)]
    pub functions: Vec<String>,
    /// Reserved for source-provided keywords
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl DatabaseSchema {
    /// The schema substituted when metadata cannot be fetched
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a schema from a database list and a set of tables
    pub fn from_parts<D, T>(databases: D, tables: T) -> Self
    where
        D: IntoIterator<Item = String>,
        T: IntoIterator<Item = TableInfo>,
    {
        Self {
            databases: databases.into_iter().collect(),
            tables: tables.into_iter().map(|t| (t.key(), t)).collect(),
            functions: Vec::new(),
            keywords: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.databases.is_empty() && self.tables.is_empty()
    }

    /// Resolve a table name as written in SQL against the schema keys.
    ///
    /// Quotes are stripped first. Lookup order: exact key, then the key
    /// under `current_database`, then the first key ending in `.name`
    /// (case-insensitive), preferring tables of `current_database`.
    pub fn resolve_table(&self, name: &str, current_database: Option<&str>) -> Option<&TableInfo> {
        let name = strip_identifier_quotes(name);
        if name.is_empty() {
            return None;
        }

        if let Some(table) = self.tables.get(&name) {
            return Some(table);
        }

        if let Some(db) = current_database {
            if let Some(table) = self.tables.get(&format!("{db}.{name}")) {
                return Some(table);
            }
        }

        let suffix = format!(".{}", name.to_ascii_lowercase());
        let mut candidates = self
            .tables
            .iter()
            .filter(|(key, _)| key.to_ascii_lowercase().ends_with(&suffix))
            .map(|(_, table)| table)
            .peekable();

        let first = candidates.peek().copied();
        match current_database {
            Some(db) => candidates.find(|t| t.database == db).or(first),
            None => first,
        }
    }
}

/// Remove identifier quoting (backticks, double quotes, brackets) from
/// every segment of a dotted name.
pub fn strip_identifier_quotes(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !matches!(c, '`' | '"' | '[' | ']'))
        .collect()
}

/// Function classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionType {
    Scalar,
    Aggregate,
    Window,
}

/// Metadata for a builtin function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionMetadata {
    /// Function name (upper case)
    pub name: String,
    /// Function type (scalar, aggregate, window)
    pub function_type: FunctionType,
    /// Call signature for display, e.g. `COUNT(expr)`
    pub signature: Option<String>,
    /// Function description/documentation
    pub description: Option<String>,
}

impl FunctionMetadata {
    /// Create new function metadata with builder pattern
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            function_type: FunctionType::Scalar,
            signature: None,
            description: None,
        }
    }

    /// Builder method: set function type
    pub fn with_type(mut self, function_type: FunctionType) -> Self {
        self.function_type = function_type;
        self
    }

    /// Builder method: set signature
    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    /// Builder method: set description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn is_aggregate(&self) -> bool {
        self.function_type == FunctionType::Aggregate
    }
}
