// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! SQLite adapter: double-quote quoting, `database.table` namespace
//! (`main.users`, attached databases alongside).

use sql_complete_context::{KeywordSet, SqlKeyword};
use sql_complete_ir::Dialect;

use super::{DialectAdapter, quote_with};

#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteAdapter;

impl SqliteAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl DialectAdapter for SqliteAdapter {
    fn dialect(&self) -> Dialect {
        Dialect::SQLite
    }

    fn keywords(&self) -> KeywordSet {
        KeywordSet::new(vec![
            SqlKeyword::new("LIMIT", Some("Limit the number of rows")),
            SqlKeyword::new("PRAGMA", Some("Query or change library settings")),
            SqlKeyword::new("GLOB", Some("Case-sensitive Unix glob match")),
            SqlKeyword::new("WITHOUT ROWID", Some("Table without implicit rowid")),
            SqlKeyword::new("ATTACH DATABASE", Some("Attach another database file")),
            SqlKeyword::new("VACUUM", Some("Rebuild the database file")),
            SqlKeyword::new("INSERT OR REPLACE", Some("Insert, replacing conflicting rows")),
            SqlKeyword::new("AUTOINCREMENT", Some("Monotonic rowid allocation")),
        ])
    }

    fn clause_keywords(&self) -> KeywordSet {
        KeywordSet::new(vec![SqlKeyword::new("LIMIT", Some("Limit the number of rows"))])
    }

    fn format_identifier(&self, name: &str) -> String {
        quote_with(name, '"')
    }
}
