// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # sql-complete - Shared Data Model
//!
//! This crate holds the types every other layer of the completion engine
//! agrees on:
//! - [`Dialect`]: the closed set of supported database types
//! - [`DatabaseSchema`], [`TableInfo`], [`ColumnInfo`]: schema snapshots
//! - [`FunctionMetadata`]: builtin function vocabulary entries
//! - [`CompletionItem`] and [`SortTier`]: the ranked output of the engine
//! - [`Position`] and [`Range`]: 1-based editor coordinates

pub mod completion;
pub mod dialect;
pub mod lsp;
pub mod metadata;
pub mod position;

// Re-export commonly used types
pub use completion::{CompletionItem, CompletionItemKind, CompletionList, SortTier};
pub use dialect::{Dialect, DialectFamily, DialectParseError};
pub use metadata::{
    ColumnInfo, DatabaseSchema, FunctionMetadata, FunctionType, IndexInfo, TableInfo,
    strip_identifier_quotes,
};
pub use position::{Position, Range};
