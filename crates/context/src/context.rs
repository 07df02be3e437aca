// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Completion context
//!
//! The structured classification of the cursor position.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sql_complete_ir::{Position, Range};

/// What kind of token is expected at the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextType {
    /// Right after `SELECT`, projection still empty
    Select,
    /// Projection written and followed by whitespace; clause keywords next
    SelectComplete,
    /// Table expected (`FROM`, or a `JOIN` target)
    From,
    /// Condition expected (`WHERE`, `HAVING`, `ON`)
    Where,
    /// Reserved for join-specific completions; the parser routes join
    /// targets to `From` and join conditions to `Where`
    Join,
    /// Column expected (projection in progress, `GROUP BY`, `ORDER BY`)
    Column,
    /// Inside an open function call
    Function,
    /// No clause keyword yet: start of a statement
    Keyword,
    /// Unclassified; offer everything
    Unknown,
}

/// Cursor context produced by [`crate::parse_context`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqlContext {
    #[serde(rename = "type")]
    pub context_type: ContextType,
    /// Display label of the active clause (`SELECT`, `LEFT JOIN`, ...)
    pub current_clause: Option<String>,
    /// Alias -> table name; unaliased tables map to themselves
    pub table_aliases: BTreeMap<String, String>,
    /// Tables referenced before the cursor, in order of appearance
    pub available_tables: Vec<String>,
    pub cursor_position: Position,
    /// Buffer text from the start up to the cursor
    pub preceding_text: String,
    /// Identifier/dot fragment touching the cursor
    pub current_word: String,
    /// Span of `current_word` on the cursor line
    pub word_range: Range,
}

impl SqlContext {
    /// Tables in scope paired with the name they are referred to by.
    ///
    /// Yields `(table, table)` for every available table, in order of
    /// appearance, then `(alias, table)` for every alias that differs from
    /// its table, sorted by alias.
    pub fn scoped_tables(&self) -> impl Iterator<Item = (&str, &str)> {
        let aliased = self
            .table_aliases
            .iter()
            .filter(|(alias, table)| alias != table)
            .map(|(alias, table)| (alias.as_str(), table.as_str()));
        let direct = self
            .available_tables
            .iter()
            .map(|table| (table.as_str(), table.as_str()));
        direct.chain(aliased)
    }
}
