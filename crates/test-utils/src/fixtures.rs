// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Test fixtures: sample buffers with a `|` cursor marker

use sql_complete_ir::Position;

/// Marker for the cursor inside fixture text
pub const CURSOR_MARKER: char = '|';

/// Remove the cursor marker and return the clean text plus the 1-based
/// position of the marker. Without a marker the cursor is placed at the end.
pub fn split_cursor(input: &str) -> (String, Position) {
    let offset = input.find(CURSOR_MARKER).unwrap_or(input.len());
    let before = &input[..offset];
    let line = before.matches('\n').count() as u32 + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() as u32 + 1;

    let text = input.replacen(CURSOR_MARKER, "", 1);
    (text, Position::new(line, column))
}

/// Sample SQL buffers for completion tests
pub struct SqlFixtures;

impl SqlFixtures {
    /// Empty statement
    pub const fn statement_start() -> &'static str {
        "|"
    }

    /// Table name expected
    pub const fn after_from() -> &'static str {
        "SELECT id FROM |"
    }

    /// Alias-qualified column expected
    pub const fn alias_member() -> &'static str {
        "SELECT * FROM users u WHERE u.|"
    }

    /// Projection list in progress
    pub const fn projection() -> &'static str {
        "SELECT |"
    }

    /// Clause keyword expected after a complete projection
    pub const fn after_projection() -> &'static str {
        "SELECT id, name |"
    }

    /// Inside a function call
    pub const fn function_call() -> &'static str {
        "SELECT COUNT(|"
    }

    /// Join target expected
    pub const fn join_target() -> &'static str {
        "SELECT *\nFROM users u\nLEFT JOIN |"
    }

    /// Join condition expected
    pub const fn join_condition() -> &'static str {
        "SELECT *\nFROM users u\nJOIN orders o ON |"
    }

    /// Partially typed table name
    pub const fn partial_table() -> &'static str {
        "SELECT * FROM us|"
    }

    /// Multi-line query with GROUP BY
    pub const fn group_by() -> &'static str {
        "SELECT status, COUNT(*)\nFROM orders\nGROUP BY |"
    }
}
