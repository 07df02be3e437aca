// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Context parser
//!
//! Classifies the cursor position by scanning the text before it. This is
//! a best-effort heuristic, not a SQL parser:
//!
//! - the *last* clause keyword before the cursor decides the context;
//! - every `FROM`/`JOIN` table reference before the cursor is registered
//!   in one flat alias map, regardless of parenthesis or subquery depth;
//! - a `SELECT` projection followed by whitespace counts as complete only
//!   while no `FROM` appears anywhere before the cursor.

use std::collections::BTreeMap;

use sql_complete_ir::{Position, strip_identifier_quotes};
use tracing::trace;

use crate::context::{ContextType, SqlContext};
use crate::cursor::{current_word_at, inside_open_call, offset_at};
use crate::patterns::{CLAUSE_KEYWORD, FROM_KEYWORD, NON_ALIAS_WORDS, ON_KEYWORD, TABLE_REFERENCE};

/// Clause keyword recognized before the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Clause {
    Select,
    From,
    Where,
    Having,
    On,
    Join,
    GroupBy,
    OrderBy,
}

impl Clause {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "SELECT" => Some(Clause::Select),
            "FROM" => Some(Clause::From),
            "WHERE" => Some(Clause::Where),
            "HAVING" => Some(Clause::Having),
            "ON" => Some(Clause::On),
            "GROUP BY" => Some(Clause::GroupBy),
            "ORDER BY" => Some(Clause::OrderBy),
            other if other.ends_with("JOIN") => Some(Clause::Join),
            _ => None,
        }
    }
}

/// Parse the completion context at `position` in `text`.
///
/// Never fails: unrecognized states classify as [`ContextType::Unknown`],
/// and a buffer with no clause keyword before the cursor classifies as
/// [`ContextType::Keyword`].
pub fn parse_context(text: &str, position: Position) -> SqlContext {
    let offset = offset_at(text, position);
    let preceding_text = &text[..offset];
    let word = current_word_at(text, offset, position);

    let (table_aliases, available_tables) = scan_table_references(preceding_text);

    let last_clause = CLAUSE_KEYWORD.find_iter(preceding_text).last();
    let (mut context_type, current_clause) = match last_clause {
        None => (ContextType::Keyword, None),
        Some(m) => {
            let label = normalize_keyword(m.as_str());
            let following = &preceding_text[m.end()..];
            let context_type = match Clause::from_label(&label) {
                Some(clause) => classify(clause, following, preceding_text),
                None => ContextType::Unknown,
            };
            (context_type, Some(label))
        }
    };

    if inside_open_call(preceding_text) {
        context_type = ContextType::Function;
    }

    trace!(?context_type, ?current_clause, word = %word.text, "parsed completion context");

    SqlContext {
        context_type,
        current_clause,
        table_aliases,
        available_tables,
        cursor_position: position,
        preceding_text: preceding_text.to_string(),
        current_word: word.text,
        word_range: word.range,
    }
}

fn classify(clause: Clause, following: &str, preceding_text: &str) -> ContextType {
    let has_content = !following.trim().is_empty();

    match clause {
        Clause::Select => {
            let trailing_space = preceding_text.ends_with(char::is_whitespace);
            if has_content && trailing_space && !FROM_KEYWORD.is_match(preceding_text) {
                ContextType::SelectComplete
            } else if has_content {
                ContextType::Column
            } else {
                ContextType::Select
            }
        }
        Clause::From => ContextType::From,
        Clause::Where | Clause::Having | Clause::On => ContextType::Where,
        Clause::Join => {
            if ON_KEYWORD.is_match(following) {
                ContextType::Where
            } else {
                ContextType::From
            }
        }
        Clause::GroupBy | Clause::OrderBy => ContextType::Column,
    }
}

/// Upper-case a keyword match and collapse inner whitespace
fn normalize_keyword(keyword: &str) -> String {
    keyword
        .split_whitespace()
        .map(str::to_ascii_uppercase)
        .collect::<Vec<_>>()
        .join(" ")
}

fn scan_table_references(text: &str) -> (BTreeMap<String, String>, Vec<String>) {
    let mut aliases = BTreeMap::new();
    let mut tables: Vec<String> = Vec::new();

    let mut start = 0;
    while let Some(caps) = TABLE_REFERENCE.captures_at(text, start) {
        let Some(table_match) = caps.get(1) else {
            break;
        };
        // Resume right after the table so a rejected alias such as `JOIN`
        // can start the next reference.
        start = table_match.end();

        let table = strip_identifier_quotes(table_match.as_str());
        if table.is_empty() {
            continue;
        }

        let alias = caps
            .get(2)
            .map(|m| strip_identifier_quotes(m.as_str()))
            .filter(|alias| {
                !alias.is_empty()
                    && !NON_ALIAS_WORDS
                        .iter()
                        .any(|word| word.eq_ignore_ascii_case(alias))
            })
            .unwrap_or_else(|| table.clone());

        if !tables.contains(&table) {
            tables.push(table.clone());
        }
        aliases.insert(alias, table);
    }

    (aliases, tables)
}
