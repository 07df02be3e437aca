// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! PostgreSQL adapter.
//!
//! Tables live three levels deep (`database.schema.table`). Since a query
//! can only address the current database, qualified names are shown and
//! inserted as `schema.table`, while lookups still go through the full key.
//! Identifiers are left bare when PostgreSQL would not fold or reject them.

use sql_complete_context::{KeywordSet, SqlKeyword};
use sql_complete_ir::{ColumnInfo, CompletionItem, CompletionItemKind, Dialect, SortTier, TableInfo};

use super::{DialectAdapter, quote_with};
use crate::completion::render::CompletionRenderer;

/// Reserved words that must be quoted when used as identifiers
const RESERVED: &[&str] = &[
    "all", "analyse", "analyze", "and", "any", "array", "as", "asc", "asymmetric", "both",
    "case", "cast", "check", "collate", "column", "constraint", "create", "current_catalog",
    "current_date", "current_role", "current_time", "current_timestamp", "current_user",
    "default", "deferrable", "desc", "distinct", "do", "else", "end", "except", "false",
    "fetch", "for", "foreign", "from", "grant", "group", "having", "in", "initially",
    "intersect", "into", "lateral", "leading", "limit", "localtime", "localtimestamp", "not",
    "null", "offset", "on", "only", "or", "order", "placing", "primary", "references",
    "returning", "select", "session_user", "some", "symmetric", "table", "then", "to",
    "trailing", "true", "union", "unique", "user", "using", "variadic", "when", "where",
    "window", "with",
];

const DEFAULT_SCHEMA: &str = "public";

#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresAdapter;

impl PostgresAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Lower-case, starts with a letter or underscore, and not reserved
    fn is_bare_identifier(name: &str) -> bool {
        let mut chars = name.chars();
        let starts_ok = chars
            .next()
            .is_some_and(|c| c.is_ascii_lowercase() || c == '_');
        starts_ok
            && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '$')
            && !RESERVED.contains(&name)
    }
}

impl DialectAdapter for PostgresAdapter {
    fn dialect(&self) -> Dialect {
        Dialect::PostgreSQL
    }

    fn keywords(&self) -> KeywordSet {
        KeywordSet::new(vec![
            SqlKeyword::new("LIMIT", Some("Limit the number of rows")),
            SqlKeyword::new("OFFSET", Some("Skip rows")),
            SqlKeyword::new("RETURNING", Some("Return rows affected by DML")),
            SqlKeyword::new("ILIKE", Some("Case-insensitive pattern match")),
            SqlKeyword::new("DISTINCT ON", Some("Keep the first row of each group")),
            SqlKeyword::new("ON CONFLICT", Some("Handle unique constraint conflicts")),
            SqlKeyword::new("LATERAL", Some("Subquery referencing preceding FROM items")),
            SqlKeyword::new("SIMILAR TO", Some("SQL regular expression match")),
            SqlKeyword::new("FILTER", Some("Aggregate filter clause")),
            SqlKeyword::new("FETCH FIRST", Some("Standard row limiting")),
        ])
    }

    fn clause_keywords(&self) -> KeywordSet {
        KeywordSet::new(vec![
            SqlKeyword::new("LIMIT", Some("Limit the number of rows")),
            SqlKeyword::new("OFFSET", Some("Skip rows")),
            SqlKeyword::new("FETCH FIRST", Some("Standard row limiting")),
        ])
    }

    fn format_identifier(&self, name: &str) -> String {
        if Self::is_bare_identifier(name) {
            name.to_string()
        } else {
            quote_with(name, '"')
        }
    }

    /// Qualify tables of another database, and tables outside `public`
    fn needs_qualified_table(&self, table: &TableInfo, current_database: Option<&str>) -> bool {
        current_database.is_none_or(|db| db != table.database)
            || table.schema().is_some_and(|schema| schema != DEFAULT_SCHEMA)
    }

    /// Shown and inserted as `schema.table`
    fn qualified_table_item(&self, table: &TableInfo) -> CompletionItem {
        let segments: Vec<&str> = table.name.split('.').collect();
        CompletionItem::new(&table.name, CompletionItemKind::Class, SortTier::QualifiedTable)
            .with_insert_text(self.format_path(&segments))
            .with_detail(CompletionRenderer::table_detail(table))
            .with_documentation(CompletionRenderer::table_documentation(table))
    }

    /// The `schema.table.column` entry, plus `qualifier.column` when the
    /// table was written in the query under a shorter name (`users.`)
    fn qualified_column_items(
        &self,
        qualifier: &str,
        is_alias: bool,
        table: &TableInfo,
        column: &ColumnInfo,
    ) -> Vec<CompletionItem> {
        let mut items = vec![self.qualified_column_item(qualifier, is_alias, table, column)];
        if !is_alias && qualifier != table.name {
            let mut segments: Vec<&str> = qualifier.split('.').collect();
            segments.push(&column.name);
            items.push(
                CompletionItem::new(
                    format!("{}.{}", qualifier, column.name),
                    CompletionItemKind::Field,
                    SortTier::QualifiedColumn,
                )
                .with_insert_text(self.format_path(&segments))
                .with_detail(CompletionRenderer::column_detail(table, column))
                .with_documentation(CompletionRenderer::column_documentation(table, column)),
            );
        }
        items
    }

    /// Table-qualified columns display as `schema.table.column`
    fn qualified_column_item(
        &self,
        qualifier: &str,
        is_alias: bool,
        table: &TableInfo,
        column: &ColumnInfo,
    ) -> CompletionItem {
        let (label, mut segments, tier) = if is_alias {
            (
                format!("{}.{}", qualifier, column.name),
                vec![qualifier],
                SortTier::AliasedColumn,
            )
        } else {
            (
                format!("{}.{}", table.name, column.name),
                table.name.split('.').collect::<Vec<_>>(),
                SortTier::QualifiedColumn,
            )
        };
        segments.push(&column.name);

        CompletionItem::new(label, CompletionItemKind::Field, tier)
            .with_insert_text(self.format_path(&segments))
            .with_detail(CompletionRenderer::column_detail(table, column))
            .with_documentation(CompletionRenderer::column_documentation(table, column))
    }
}
