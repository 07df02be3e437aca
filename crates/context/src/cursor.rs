// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Cursor utilities
//!
//! Conversion between 1-based editor positions and byte offsets, and
//! extraction of the word fragment touching the cursor.

use sql_complete_ir::{Position, Range};

/// Convert a 1-based position into a byte offset into `text`.
///
/// Columns count characters. Positions past the end of a line clamp to
/// the end of that line; lines past the end of the text clamp to the end
/// of the text. Line and column 0 are treated as 1.
///
/// # Examples
///
/// ```
/// use sql_complete_context::offset_at;
/// use sql_complete_ir::Position;
///
/// let source = "SELECT id\nFROM users";
/// assert_eq!(offset_at(source, Position::new(2, 1)), 10);
/// assert_eq!(offset_at(source, Position::new(1, 99)), 9);
/// ```
pub fn offset_at(text: &str, position: Position) -> usize {
    let target_line = position.line.max(1) as usize - 1;
    let target_column = position.column.max(1) as usize - 1;

    let mut line_start = 0;
    for (index, line) in text.split('\n').enumerate() {
        if index == target_line {
            let within = line
                .char_indices()
                .nth(target_column)
                .map(|(i, _)| i)
                .unwrap_or(line.len());
            return line_start + within;
        }
        line_start += line.len() + 1;
    }

    text.len()
}

/// Word fragment touching the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentWord {
    pub text: String,
    /// Span of the fragment on the cursor line
    pub range: Range,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.'
}

/// Scan left and right of `offset` across identifier characters and dots.
///
/// `position` must be the editor position `offset` was derived from; it
/// anchors the returned range.
pub fn current_word_at(text: &str, offset: usize, position: Position) -> CurrentWord {
    let offset = floor_char_boundary(text, offset);
    let (before, after) = text.split_at(offset);

    let left: String = before
        .chars()
        .rev()
        .take_while(|c| is_word_char(*c))
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    let right: String = after.chars().take_while(|c| is_word_char(*c)).collect();

    let column = position.column.max(1);
    let left_len = left.chars().count() as u32;
    let right_len = right.chars().count() as u32;
    let line = position.line.max(1);

    CurrentWord {
        text: format!("{left}{right}"),
        range: Range::new(
            Position::new(line, column.saturating_sub(left_len).max(1)),
            Position::new(line, column.saturating_add(right_len)),
        ),
    }
}

/// Whether the cursor sits inside an open function call: the token
/// touching the cursor (extended left to whitespace) has more `(` than `)`.
pub fn inside_open_call(preceding_text: &str) -> bool {
    let token: String = preceding_text
        .chars()
        .rev()
        .take_while(|c| !c.is_whitespace())
        .collect();
    let opens = token.chars().filter(|c| *c == '(').count();
    let closes = token.chars().filter(|c| *c == ')').count();
    opens > closes
}

fn floor_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_range_saturates_at_column_limit() {
        let word = current_word_at("users", 0, Position::new(1, u32::MAX));
        assert_eq!(word.text, "users");
        assert_eq!(word.range.end, Position::new(1, u32::MAX));
    }

    #[test]
    fn test_offset_single_line() {
        assert_eq!(offset_at("SELECT", Position::new(1, 1)), 0);
        assert_eq!(offset_at("SELECT", Position::new(1, 7)), 6);
        assert_eq!(offset_at("SELECT", Position::new(1, 100)), 6);
    }

    #[test]
    fn test_offset_multi_line_and_clamp() {
        let text = "SELECT *\nFROM t\nWHERE";
        assert_eq!(offset_at(text, Position::new(2, 1)), 9);
        assert_eq!(offset_at(text, Position::new(3, 6)), text.len());
        assert_eq!(offset_at(text, Position::new(9, 1)), text.len());
        assert_eq!(offset_at(text, Position::new(0, 0)), 0);
    }

    #[test]
    fn test_offset_counts_characters() {
        let text = "SELECT 'é', x";
        // column 10 is the character after 'é'
        assert_eq!(offset_at(text, Position::new(1, 10)), "SELECT 'é".len());
    }

    #[test]
    fn test_current_word_both_sides() {
        let text = "SELECT us.name FROM users us";
        // cursor between "us." and "name"
        let offset = "SELECT us.".len();
        let word = current_word_at(text, offset, Position::new(1, offset as u32 + 1));
        assert_eq!(word.text, "us.name");
        assert_eq!(word.range.start, Position::new(1, 8));
        assert_eq!(word.range.end, Position::new(1, 15));
    }

    #[test]
    fn test_current_word_empty_after_space() {
        let text = "SELECT id FROM ";
        let word = current_word_at(text, text.len(), Position::new(1, 16));
        assert_eq!(word.text, "");
        assert!(word.range.is_empty());
    }

    #[test]
    fn test_inside_open_call() {
        assert!(inside_open_call("SELECT COUNT("));
        assert!(inside_open_call("SELECT COUNT(us"));
        assert!(!inside_open_call("SELECT COUNT(id)"));
        assert!(!inside_open_call("SELECT COUNT(id) "));
        assert!(!inside_open_call("SELECT "));
    }
}
