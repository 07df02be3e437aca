// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # LSP conversions
//!
//! Maps completion results onto `lsp-types` for editors speaking the
//! Language Server Protocol. LSP positions are 0-based; ours are 1-based.

use lsp_types::CompletionOptions;
use sql_complete_ir::Position;

use crate::completion::Registration;

// The `From` impls for `CompletionItem` and `CompletionList` live in
// `sql_complete_ir::lsp` because of the orphan rule.
pub use sql_complete_ir::lsp::{to_lsp_position, to_lsp_range};

/// 1-based position of a 0-based LSP position
pub fn from_lsp_position(position: lsp_types::Position) -> Position {
    Position::new(position.line.saturating_add(1), position.character.saturating_add(1))
}

impl From<Registration> for CompletionOptions {
    fn from(registration: Registration) -> Self {
        CompletionOptions {
            trigger_characters: Some(
                registration
                    .trigger_characters
                    .iter()
                    .map(char::to_string)
                    .collect(),
            ),
            ..Default::default()
        }
    }
}
