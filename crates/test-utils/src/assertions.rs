// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Completion-specific test helpers and custom assertions

use std::collections::HashSet;

use sql_complete_ir::{CompletionItem, CompletionItemKind};

/// Custom assertion helpers for completion lists
pub struct CompletionAssertions;

impl CompletionAssertions {
    /// Find an item by label, panicking with the available labels if missing
    pub fn item<'a>(items: &'a [CompletionItem], label: &str) -> &'a CompletionItem {
        items.iter().find(|i| i.label == label).unwrap_or_else(|| {
            panic!(
                "Expected item '{}', found {:?}",
                label,
                Self::labels(items)
            )
        })
    }

    /// Labels in list order
    pub fn labels(items: &[CompletionItem]) -> Vec<&str> {
        items.iter().map(|i| i.label.as_str()).collect()
    }

    /// Assert that every label in `labels` is offered
    pub fn assert_contains(items: &[CompletionItem], labels: &[&str]) {
        for label in labels {
            Self::item(items, label);
        }
    }

    /// Assert that none of `labels` is offered
    pub fn assert_excludes(items: &[CompletionItem], labels: &[&str]) {
        for label in labels {
            assert!(
                items.iter().all(|i| i.label != *label),
                "Unexpected item '{}' in {:?}",
                label,
                Self::labels(items)
            );
        }
    }

    /// Assert that no two items share a label
    pub fn assert_unique_labels(items: &[CompletionItem]) {
        let mut seen = HashSet::new();
        for item in items {
            assert!(seen.insert(&item.label), "Duplicate label '{}'", item.label);
        }
    }

    /// Assert that items are ordered by sort text
    pub fn assert_sorted(items: &[CompletionItem]) {
        for pair in items.windows(2) {
            assert!(
                pair[0].sort_text <= pair[1].sort_text,
                "'{}' sorts after '{}'",
                pair[0].sort_text,
                pair[1].sort_text
            );
        }
    }

    /// Assert that every label starts with `prefix`, ignoring case
    pub fn assert_prefix(items: &[CompletionItem], prefix: &str) {
        let prefix = prefix.to_lowercase();
        for item in items {
            assert!(
                item.label.to_lowercase().starts_with(&prefix),
                "Label '{}' does not start with '{}'",
                item.label,
                prefix
            );
        }
    }

    /// Assert that every item has the given kind
    pub fn assert_all_kind(items: &[CompletionItem], kind: CompletionItemKind) {
        for item in items {
            assert_eq!(item.kind, kind, "Unexpected kind for '{}'", item.label);
        }
    }
}
