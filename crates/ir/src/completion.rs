// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Completion items
//!
//! The output of the suggestion engine. Ordering is carried entirely by
//! [`CompletionItem::sort_text`], which is a one-digit [`SortTier`] prefix
//! followed by the label, so a plain lexicographic sort yields tier-major,
//! alphabetical-minor order.

use serde::{Deserialize, Serialize};

use crate::position::Range;

/// Kind of a completion item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionItemKind {
    Keyword,
    Class,
    Field,
    Function,
    Operator,
}

/// Priority bucket of a completion item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum SortTier {
    Keyword = 0,
    Table = 1,
    QualifiedTable = 2,
    Function = 3,
    Column = 4,
    QualifiedColumn = 5,
    AliasedColumn = 6,
    DialectAggregate = 7,
}

impl SortTier {
    /// Sort key for `label` in this tier
    pub fn sort_text(self, label: &str) -> String {
        format!("{}{}", self as u8, label)
    }
}

/// A single completion suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItem {
    /// Display text
    pub label: String,
    pub kind: CompletionItemKind,
    /// Text actually inserted, possibly dialect-quoted
    pub insert_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    pub sort_text: String,
    /// Span replaced on insertion (the in-progress word)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
}

impl CompletionItem {
    /// Create an item whose insert text equals its label
    pub fn new(label: impl Into<String>, kind: CompletionItemKind, tier: SortTier) -> Self {
        let label = label.into();
        Self {
            sort_text: tier.sort_text(&label),
            insert_text: label.clone(),
            label,
            kind,
            detail: None,
            documentation: None,
            range: None,
        }
    }

    /// Builder method: set insert text
    pub fn with_insert_text(mut self, insert_text: impl Into<String>) -> Self {
        self.insert_text = insert_text.into();
        self
    }

    /// Builder method: set detail
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Builder method: set documentation
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    /// Builder method: set replacement range
    pub fn with_range(mut self, range: Range) -> Self {
        self.range = Some(range);
        self
    }
}

/// Response returned to the editor integration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionList {
    pub suggestions: Vec<CompletionItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_text_orders_tier_then_label() {
        let keyword = SortTier::Keyword.sort_text("WHERE");
        let table = SortTier::Table.sort_text("accounts");
        let column = SortTier::Column.sort_text("id");
        assert_eq!(keyword, "0WHERE");
        assert!(keyword < table);
        assert!(table < column);
        assert!(SortTier::Column.sort_text("email") < SortTier::Column.sort_text("id"));
    }

    #[test]
    fn test_item_defaults_insert_text_to_label() {
        let item = CompletionItem::new("users", CompletionItemKind::Class, SortTier::Table);
        assert_eq!(item.insert_text, "users");
        assert_eq!(item.sort_text, "1users");
        assert!(item.range.is_none());
    }

    #[test]
    fn test_item_serializes_camel_case() {
        let item = CompletionItem::new("id", CompletionItemKind::Field, SortTier::Column)
            .with_insert_text("`id`");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["insertText"], "`id`");
        assert_eq!(json["sortText"], "4id");
        assert_eq!(json["kind"], "field");
    }
}
