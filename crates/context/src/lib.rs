// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # sql-complete - Context Detection Layer
//!
//! This crate classifies the cursor position in raw, often incomplete SQL
//! text without a grammar.
//!
//! ## Overview
//!
//! [`parse_context`] scans the text before the cursor for the last clause
//! keyword and for `FROM`/`JOIN` table references, and returns an
//! immutable [`SqlContext`] describing what kind of token is expected.
//! It is a pure function: no I/O, never panics on malformed input, and
//! identical inputs always yield equal contexts.
//!
//! ## Examples
//!
//! ```rust
//! use sql_complete_context::{ContextType, parse_context};
//! use sql_complete_ir::Position;
//!
//! let sql = "SELECT * FROM users u WHERE u.";
//! let ctx = parse_context(sql, Position::new(1, sql.len() as u32 + 1));
//!
//! assert_eq!(ctx.context_type, ContextType::Where);
//! assert_eq!(ctx.table_aliases.get("u").map(String::as_str), Some("users"));
//! assert_eq!(ctx.current_word, "u.");
//! ```

pub mod context;
pub mod cursor;
pub mod keywords;
pub mod parser;
mod patterns;

// Re-export commonly used types
pub use context::{ContextType, SqlContext};
pub use cursor::{CurrentWord, current_word_at, offset_at};
pub use keywords::{KeywordProvider, KeywordSet, SqlKeyword};
pub use parser::parse_context;
