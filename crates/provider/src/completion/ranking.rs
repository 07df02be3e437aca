// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Ranking
//!
//! Orders suggestions by their tiered sort text, drops duplicate labels
//! and applies the prefix filter of the word being typed.

use std::collections::HashSet;

use sql_complete_ir::{CompletionItem, Range};

/// Sort by tier then label, keep the first item of each label, and keep
/// only labels starting with `current_word` (ASCII case-insensitive).
///
/// An empty `current_word` keeps everything. When `range` is given every
/// surviving item replaces that span on insertion.
pub fn sort_and_filter_suggestions(
    mut items: Vec<CompletionItem>,
    current_word: &str,
    range: Option<Range>,
    max_items: Option<usize>,
) -> Vec<CompletionItem> {
    items.sort_by(|a, b| a.sort_text.cmp(&b.sort_text));

    let prefix = current_word.to_lowercase();
    let mut seen = HashSet::new();
    let mut ranked: Vec<CompletionItem> = items
        .into_iter()
        .filter(|item| seen.insert(item.label.clone()))
        .filter(|item| prefix.is_empty() || item.label.to_lowercase().starts_with(&prefix))
        .collect();

    if let Some(max) = max_items {
        ranked.truncate(max);
    }

    if let Some(range) = range {
        for item in &mut ranked {
            item.range = Some(range);
        }
    }

    ranked
}
