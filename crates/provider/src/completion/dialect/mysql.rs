// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! MySQL / MariaDB adapter: backtick quoting, `database.table` namespace.

use sql_complete_context::{KeywordSet, SqlKeyword};
use sql_complete_ir::Dialect;

use super::{DialectAdapter, quote_with};

#[derive(Debug, Clone, Copy)]
pub struct MySqlAdapter {
    dialect: Dialect,
}

impl MySqlAdapter {
    /// `dialect` is MySQL or MariaDB
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }
}

impl Default for MySqlAdapter {
    fn default() -> Self {
        Self::new(Dialect::MySQL)
    }
}

impl DialectAdapter for MySqlAdapter {
    fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn keywords(&self) -> KeywordSet {
        let mut keywords = vec![
            SqlKeyword::new("LIMIT", Some("Limit the number of rows")),
            SqlKeyword::new("STRAIGHT_JOIN", Some("Join in the listed table order")),
            SqlKeyword::new(
                "ON DUPLICATE KEY UPDATE",
                Some("Update the existing row on a unique key conflict"),
            ),
            SqlKeyword::new("REPLACE", Some("Insert or replace rows")),
            SqlKeyword::new("INSERT IGNORE", Some("Insert, skipping conflicting rows")),
            SqlKeyword::new("REGEXP", Some("Regular expression match")),
            SqlKeyword::new("SHOW", Some("Show server metadata")),
            SqlKeyword::new("DESCRIBE", Some("Describe a table")),
            SqlKeyword::new("USE", Some("Switch the current database")),
            SqlKeyword::new("AUTO_INCREMENT", Some("Auto-increment column attribute")),
        ];
        if self.dialect == Dialect::MariaDB {
            keywords.push(SqlKeyword::new(
                "RETURNING",
                Some("Return rows affected by INSERT/DELETE"),
            ));
        }
        KeywordSet::new(keywords)
    }

    fn clause_keywords(&self) -> KeywordSet {
        KeywordSet::new(vec![SqlKeyword::new("LIMIT", Some("Limit the number of rows"))])
    }

    fn format_identifier(&self, name: &str) -> String {
        quote_with(name, '`')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backtick_quoting() {
        let adapter = MySqlAdapter::default();
        assert_eq!(adapter.format_identifier("users"), "`users`");
        assert_eq!(adapter.format_identifier("odd`name"), "`odd``name`");
        assert_eq!(adapter.format_path(&["app", "users"]), "`app`.`users`");
    }

    #[test]
    fn test_mariadb_adds_returning() {
        let mysql = MySqlAdapter::new(Dialect::MySQL).keywords().labels();
        let mariadb = MySqlAdapter::new(Dialect::MariaDB).keywords().labels();
        assert!(!mysql.contains("RETURNING"));
        assert!(mariadb.contains("RETURNING"));
        assert!(mariadb.contains("STRAIGHT_JOIN"));
    }

    #[test]
    fn test_mysql_functions() {
        let adapter = MySqlAdapter::default();
        assert!(adapter.functions().iter().any(|f| f.name == "GROUP_CONCAT"));
        assert!(!adapter.functions().iter().any(|f| f.name == "STRING_AGG"));
    }
}
