// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Dialect adapters
//!
//! A [`DialectAdapter`] supplies what differs between databases: extra
//! keywords, extended functions, identifier quoting and the namespace depth
//! of table names. The suggestion pipeline itself lives in the provided
//! methods of the trait, so most adapters only implement the required
//! ones.

pub mod mysql;
pub mod postgresql;
pub mod sqlite;

use std::collections::HashSet;
use std::sync::LazyLock;

use sql_complete_context::{KeywordSet, SqlContext};
use sql_complete_function_registry::FunctionRegistry;
use sql_complete_ir::{
    ColumnInfo, CompletionItem, CompletionItemKind, DatabaseSchema, Dialect, FunctionMetadata,
    SortTier, TableInfo,
};

use crate::completion::render::CompletionRenderer;

pub use mysql::MySqlAdapter;
pub use postgresql::PostgresAdapter;
pub use sqlite::SqliteAdapter;

static FUNCTIONS: LazyLock<FunctionRegistry> = LazyLock::new(FunctionRegistry::new);

/// Per-database vocabulary and identifier rules
pub trait DialectAdapter: Send + Sync {
    /// Dialect served by this adapter
    fn dialect(&self) -> Dialect;

    /// Keywords specific to this database
    fn keywords(&self) -> KeywordSet;

    /// Quote `name` as a single identifier
    fn format_identifier(&self, name: &str) -> String;

    /// Clause keywords specific to this database, offered after a complete
    /// projection list
    fn clause_keywords(&self) -> KeywordSet {
        KeywordSet::default()
    }

    /// Extended functions of this database
    fn functions(&self) -> &'static [FunctionMetadata] {
        FUNCTIONS.get_functions(self.dialect())
    }

    /// Quote every segment of a dotted path
    fn format_path(&self, segments: &[&str]) -> String {
        segments
            .iter()
            .map(|segment| self.format_identifier(segment))
            .collect::<Vec<_>>()
            .join(".")
    }

    fn keyword_suggestions(&self, base: KeywordSet) -> Vec<CompletionItem> {
        base.merge(self.keywords())
            .keywords
            .iter()
            .map(CompletionRenderer::keyword_item)
            .collect()
    }

    /// Core functions plus this database's extended ones. Extended
    /// aggregates rank in their own tier.
    fn function_suggestions(&self) -> Vec<CompletionItem> {
        let core = FUNCTIONS
            .core_functions()
            .iter()
            .map(|f| CompletionRenderer::function_item(f, SortTier::Function));
        let extended = self.functions().iter().map(|f| {
            let tier = if f.is_aggregate() {
                SortTier::DialectAggregate
            } else {
                SortTier::Function
            };
            CompletionRenderer::function_item(f, tier)
        });
        core.chain(extended).collect()
    }

    /// One entry per table under its bare name, plus a qualified entry when
    /// the table lives outside the current database
    fn table_suggestions(
        &self,
        schema: &DatabaseSchema,
        current_database: Option<&str>,
    ) -> Vec<CompletionItem> {
        let mut items = Vec::new();
        for table in schema.tables.values() {
            items.push(self.table_item(table));
            if self.needs_qualified_table(table, current_database) {
                items.push(self.qualified_table_item(table));
            }
        }
        items
    }

    fn needs_qualified_table(&self, table: &TableInfo, current_database: Option<&str>) -> bool {
        current_database.is_none_or(|db| db != table.database)
    }

    fn table_item(&self, table: &TableInfo) -> CompletionItem {
        let name = table.bare_name();
        CompletionItem::new(name, CompletionItemKind::Class, SortTier::Table)
            .with_insert_text(self.format_identifier(name))
            .with_detail(CompletionRenderer::table_detail(table))
            .with_documentation(CompletionRenderer::table_documentation(table))
    }

    fn qualified_table_item(&self, table: &TableInfo) -> CompletionItem {
        let key = table.key();
        let segments: Vec<&str> = key.split('.').collect();
        CompletionItem::new(&key, CompletionItemKind::Class, SortTier::QualifiedTable)
            .with_insert_text(self.format_path(&segments))
            .with_detail(CompletionRenderer::table_detail(table))
            .with_documentation(CompletionRenderer::table_documentation(table))
    }

    /// Columns of every table in scope: each distinct bare name once, plus
    /// a qualified entry per column for every qualifier (table or alias)
    fn column_suggestions(
        &self,
        context: &SqlContext,
        schema: &DatabaseSchema,
        current_database: Option<&str>,
    ) -> Vec<CompletionItem> {
        let mut items = Vec::new();
        let mut seen = HashSet::new();

        for (qualifier, table_name) in context.scoped_tables() {
            let Some(table) = schema.resolve_table(table_name, current_database) else {
                continue;
            };
            let is_alias = qualifier != table_name;
            for column in &table.columns {
                if seen.insert(column.name.clone()) {
                    items.push(self.column_item(table, column));
                }
                items.extend(self.qualified_column_items(qualifier, is_alias, table, column));
            }
        }

        items
    }

    fn column_item(&self, table: &TableInfo, column: &ColumnInfo) -> CompletionItem {
        CompletionItem::new(&column.name, CompletionItemKind::Field, SortTier::Column)
            .with_insert_text(self.format_identifier(&column.name))
            .with_detail(CompletionRenderer::column_detail(table, column))
            .with_documentation(CompletionRenderer::column_documentation(table, column))
    }

    /// Every qualified entry offered for one column in scope
    fn qualified_column_items(
        &self,
        qualifier: &str,
        is_alias: bool,
        table: &TableInfo,
        column: &ColumnInfo,
    ) -> Vec<CompletionItem> {
        vec![self.qualified_column_item(qualifier, is_alias, table, column)]
    }

    /// `qualifier.column`, where the qualifier is an alias or the table
    /// name as written in the query
    fn qualified_column_item(
        &self,
        qualifier: &str,
        is_alias: bool,
        table: &TableInfo,
        column: &ColumnInfo,
    ) -> CompletionItem {
        let tier = if is_alias {
            SortTier::AliasedColumn
        } else {
            SortTier::QualifiedColumn
        };
        let mut segments: Vec<&str> = qualifier.split('.').collect();
        segments.push(&column.name);

        CompletionItem::new(
            format!("{}.{}", qualifier, column.name),
            CompletionItemKind::Field,
            tier,
        )
        .with_insert_text(self.format_path(&segments))
        .with_detail(CompletionRenderer::column_detail(table, column))
        .with_documentation(CompletionRenderer::column_documentation(table, column))
    }
}

/// The adapter serving `dialect`
pub fn adapter_for(dialect: Dialect) -> Box<dyn DialectAdapter> {
    match dialect {
        Dialect::MySQL | Dialect::MariaDB => Box::new(MySqlAdapter::new(dialect)),
        Dialect::PostgreSQL => Box::new(PostgresAdapter::new()),
        Dialect::SQLite => Box::new(SqliteAdapter::new()),
    }
}

/// Double every occurrence of `quote` in `name` and wrap it in `quote`
pub(crate) fn quote_with(name: &str, quote: char) -> String {
    format!("{quote}{}{quote}", name.replace(quote, &format!("{quote}{quote}")))
}
