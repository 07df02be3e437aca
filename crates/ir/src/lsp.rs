// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # LSP conversions for shared types
//!
//! `From` impls onto `lsp-types` must live next to the types they convert
//! (orphan rule); `sql_complete_provider::lsp` re-exports the helpers.
//! LSP positions are 0-based; ours are 1-based.

use lsp_types::{CompletionResponse, CompletionTextEdit, Documentation, TextEdit};

use crate::{CompletionItem, CompletionItemKind, CompletionList, Position, Range};

/// 0-based LSP position of a 1-based position
pub fn to_lsp_position(position: Position) -> lsp_types::Position {
    lsp_types::Position::new(
        position.line.saturating_sub(1),
        position.column.saturating_sub(1),
    )
}

pub fn to_lsp_range(range: Range) -> lsp_types::Range {
    lsp_types::Range::new(to_lsp_position(range.start), to_lsp_position(range.end))
}

fn to_lsp_kind(kind: CompletionItemKind) -> lsp_types::CompletionItemKind {
    match kind {
        CompletionItemKind::Keyword => lsp_types::CompletionItemKind::KEYWORD,
        CompletionItemKind::Class => lsp_types::CompletionItemKind::CLASS,
        CompletionItemKind::Field => lsp_types::CompletionItemKind::FIELD,
        CompletionItemKind::Function => lsp_types::CompletionItemKind::FUNCTION,
        CompletionItemKind::Operator => lsp_types::CompletionItemKind::OPERATOR,
    }
}

impl From<CompletionItem> for lsp_types::CompletionItem {
    fn from(item: CompletionItem) -> Self {
        let text_edit = item.range.map(|range| {
            CompletionTextEdit::Edit(TextEdit::new(to_lsp_range(range), item.insert_text.clone()))
        });

        lsp_types::CompletionItem {
            kind: Some(to_lsp_kind(item.kind)),
            detail: item.detail,
            documentation: item.documentation.map(Documentation::String),
            sort_text: Some(item.sort_text),
            filter_text: Some(item.label.clone()),
            insert_text: Some(item.insert_text),
            text_edit,
            label: item.label,
            ..Default::default()
        }
    }
}

impl From<CompletionList> for CompletionResponse {
    fn from(list: CompletionList) -> Self {
        CompletionResponse::Array(list.suggestions.into_iter().map(Into::into).collect())
    }
}
