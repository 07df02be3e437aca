// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Completion rendering
//!
//! Builds the detail and documentation text of completion items from
//! schema metadata, keywords and function signatures.

use sql_complete_context::SqlKeyword;
use sql_complete_ir::{
    ColumnInfo, CompletionItem, CompletionItemKind, FunctionMetadata, SortTier, TableInfo,
};

/// Completion renderer
///
/// Stateless helpers shared by every dialect adapter.
pub struct CompletionRenderer;

impl CompletionRenderer {
    /// Render a keyword item
    pub fn keyword_item(keyword: &SqlKeyword) -> CompletionItem {
        let item = CompletionItem::new(&keyword.label, CompletionItemKind::Keyword, SortTier::Keyword)
            .with_detail("keyword");
        match &keyword.description {
            Some(description) => item.with_documentation(description),
            None => item,
        }
    }

    /// Render a function item in the given tier
    pub fn function_item(function: &FunctionMetadata, tier: SortTier) -> CompletionItem {
        let detail = function
            .signature
            .clone()
            .unwrap_or_else(|| format!("{}(...)", function.name));
        let item = CompletionItem::new(&function.name, CompletionItemKind::Function, tier)
            .with_detail(detail);
        match &function.description {
            Some(description) => item.with_documentation(description),
            None => item,
        }
    }

    /// Create a wildcard (*) completion item
    pub fn wildcard_item() -> CompletionItem {
        CompletionItem::new("*", CompletionItemKind::Operator, SortTier::Column)
            .with_detail("All columns")
            .with_documentation("Selects all columns from all tables in the FROM clause")
    }

    /// Format the detail string for a column
    ///
    /// Shows the data type, nullability and primary-key membership
    pub fn column_detail(table: &TableInfo, column: &ColumnInfo) -> String {
        let mut parts = vec![column.data_type.clone()];
        if !column.nullable {
            parts.push("NOT NULL".to_string());
        }
        if table.is_primary_key(&column.name) {
            parts.push("PRIMARY KEY".to_string());
        }
        parts.join(" ")
    }

    /// Format the documentation string for a column
    pub fn column_documentation(table: &TableInfo, column: &ColumnInfo) -> String {
        let mut parts = vec![format!("Column of {}", table.key())];
        if let Some(default) = &column.default {
            parts.push(format!("Default: {}", default));
        }
        if let Some(comment) = &column.comment {
            parts.push(comment.clone());
        }
        parts.join("\n\n")
    }

    /// Format the detail string for a table
    pub fn table_detail(table: &TableInfo) -> String {
        format!("{} [TABLE]", table.key())
    }

    /// Format the documentation string for a table
    ///
    /// Shows column count, and the column names if there are few
    pub fn table_documentation(table: &TableInfo) -> String {
        let mut parts = Vec::new();

        let column_count = table.columns.len();
        if column_count > 0 {
            parts.push(format!("{} columns", column_count));

            if column_count <= 5 {
                let column_names: Vec<&str> =
                    table.columns.iter().map(|c| c.name.as_str()).collect();
                parts.push(format!("Columns: {}", column_names.join(", ")));
            }
        }

        if let Some(pk) = &table.primary_key {
            parts.push(format!("Primary key: {}", pk.join(", ")));
        }

        if let Some(indexes) = &table.indexes {
            if !indexes.is_empty() {
                parts.push(format!("{} indexes", indexes.len()));
            }
        }

        if parts.is_empty() {
            "Database table".to_string()
        } else {
            parts.join("\n\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sql_complete_ir::{FunctionType, IndexInfo};

    fn users() -> TableInfo {
        TableInfo::new("app", "users")
            .with_columns(vec![
                ColumnInfo::new("id", "bigint"),
                ColumnInfo::new("email", "varchar(255)")
                    .with_nullable(true)
                    .with_comment("Login address"),
            ])
            .with_primary_key(["id"])
    }

    #[test]
    fn test_column_detail() {
        let table = users();
        assert_eq!(
            CompletionRenderer::column_detail(&table, &table.columns[0]),
            "bigint NOT NULL PRIMARY KEY"
        );
        assert_eq!(
            CompletionRenderer::column_detail(&table, &table.columns[1]),
            "varchar(255)"
        );
    }

    #[test]
    fn test_column_documentation() {
        let table = users();
        let doc = CompletionRenderer::column_documentation(&table, &table.columns[1]);
        assert_eq!(doc, "Column of app.users\n\nLogin address");
    }

    #[test]
    fn test_table_documentation_lists_few_columns() {
        let doc = CompletionRenderer::table_documentation(&users());
        assert!(doc.contains("2 columns"));
        assert!(doc.contains("Columns: id, email"));
        assert!(doc.contains("Primary key: id"));
    }

    #[test]
    fn test_table_documentation_many_columns() {
        let columns = (0..8)
            .map(|i| ColumnInfo::new(format!("c{i}"), "int"))
            .collect();
        let table = TableInfo::new("app", "wide")
            .with_columns(columns)
            .with_indexes(vec![IndexInfo {
                name: "idx".to_string(),
                columns: vec!["c0".to_string()],
                unique: false,
            }]);
        let doc = CompletionRenderer::table_documentation(&table);
        assert!(doc.contains("8 columns"));
        assert!(!doc.contains("Columns:"));
        assert!(doc.contains("1 indexes"));
    }

    #[test]
    fn test_table_documentation_empty() {
        let doc = CompletionRenderer::table_documentation(&TableInfo::new("app", "t"));
        assert_eq!(doc, "Database table");
    }

    #[test]
    fn test_function_item() {
        let function = FunctionMetadata::new("GROUP_CONCAT")
            .with_type(FunctionType::Aggregate)
            .with_description("Concatenate values");
        let item = CompletionRenderer::function_item(&function, SortTier::DialectAggregate);
        assert_eq!(item.sort_text, "7GROUP_CONCAT");
        assert_eq!(item.detail.as_deref(), Some("GROUP_CONCAT(...)"));
        assert_eq!(item.kind, CompletionItemKind::Function);
    }

    #[test]
    fn test_keyword_item() {
        let item = CompletionRenderer::keyword_item(&SqlKeyword::new("from", Some("Tables")));
        assert_eq!(item.label, "FROM");
        assert_eq!(item.sort_text, "0FROM");
        assert_eq!(item.documentation.as_deref(), Some("Tables"));
    }
}
