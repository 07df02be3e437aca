// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Completion module
//!
//! This module turns a buffer and a cursor into ranked suggestions.
//!
//! ## Architecture
//!
//! - `dialect`: per-database adapters and the suggestion pipeline
//! - `render`: detail/documentation text of items
//! - `ranking`: tier ordering, deduplication and prefix filtering
//!
//! ## Flow
//!
//! ```text
//! 1. Editor integration calls provide_completion_items(model, position)
//!    ↓
//! 2. SchemaCache.get_schema()           (never fails, may be empty)
//!    ↓
//! 3. parse_context(text, position)
//!    ↓
//! 4. dispatch on context type → adapter suggestions
//!    ↓
//! 5. sort_and_filter_suggestions()
//!    ↓
//! 6. CompletionList returned to the editor
//! ```

pub mod dialect;
pub mod ranking;
pub mod render;

use std::borrow::Cow;
use std::sync::Arc;

use sql_complete_catalog::SchemaCache;
use sql_complete_context::{ContextType, KeywordProvider, SqlContext, parse_context};
use sql_complete_ir::{CompletionItem, CompletionList, DatabaseSchema, Dialect, Position};
use tracing::debug;

use crate::completion::dialect::DialectAdapter;
use crate::completion::ranking::sort_and_filter_suggestions;
use crate::completion::render::CompletionRenderer;
use crate::config::DEFAULT_TRIGGER_CHARACTERS;

/// Read access to the text of an editor buffer
pub trait BufferModel {
    fn text(&self) -> Cow<'_, str>;
}

impl BufferModel for str {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl BufferModel for String {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

/// What the editor integration registers the provider with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub trigger_characters: Vec<char>,
}

/// Completion provider
///
/// Orchestrates the completion flow from schema lookup to ranking for one
/// connection and dialect.
pub struct CompletionProvider {
    adapter: Box<dyn DialectAdapter>,
    cache: Arc<SchemaCache>,
    keywords: KeywordProvider,
    current_database: Option<String>,
    max_items: Option<usize>,
}

impl CompletionProvider {
    /// Create a provider using `adapter` over the schema held by `cache`
    pub fn new(adapter: Box<dyn DialectAdapter>, cache: Arc<SchemaCache>) -> Self {
        Self {
            adapter,
            cache,
            keywords: KeywordProvider::new(),
            current_database: None,
            max_items: None,
        }
    }

    /// Builder method: set the session's current database
    pub fn with_current_database(mut self, database: Option<String>) -> Self {
        self.current_database = database;
        self
    }

    /// Builder method: truncate ranked lists to `max_items`
    pub fn with_max_items(mut self, max_items: Option<usize>) -> Self {
        self.max_items = max_items;
        self
    }

    /// Trigger characters: `.`, space and `(`
    pub fn registration() -> Registration {
        Registration {
            trigger_characters: DEFAULT_TRIGGER_CHARACTERS.to_vec(),
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.adapter.dialect()
    }

    pub fn adapter(&self) -> &dyn DialectAdapter {
        self.adapter.as_ref()
    }

    pub fn cache(&self) -> &Arc<SchemaCache> {
        &self.cache
    }

    /// Suggestions for the cursor at `position` in `model`
    ///
    /// Never fails: missing metadata shrinks the list to keywords and
    /// functions.
    pub async fn provide_completion_items<M>(&self, model: &M, position: Position) -> CompletionList
    where
        M: BufferModel + ?Sized,
    {
        let schema = self.cache.get_schema().await;
        let text = model.text();
        let context = parse_context(&text, position);
        let suggestions = self.suggest(&context, &schema);

        debug!(
            dialect = %self.dialect(),
            context = ?context.context_type,
            word = %context.current_word,
            items = suggestions.len(),
            "completion served"
        );

        CompletionList { suggestions }
    }

    /// Ranked suggestions for an already parsed context
    pub fn suggest(&self, context: &SqlContext, schema: &DatabaseSchema) -> Vec<CompletionItem> {
        let current_database = self.current_database.as_deref();
        let adapter = self.adapter.as_ref();

        let items = match context.context_type {
            ContextType::Keyword | ContextType::Unknown => {
                let mut items = adapter.keyword_suggestions(self.keywords.all_keywords());
                items.extend(adapter.table_suggestions(schema, current_database));
                items.extend(adapter.function_suggestions());
                items
            }
            ContextType::SelectComplete => adapter.keyword_suggestions(
                self.keywords
                    .clause_keywords()
                    .merge(adapter.clause_keywords()),
            ),
            ContextType::From | ContextType::Join => {
                adapter.table_suggestions(schema, current_database)
            }
            ContextType::Select => {
                let mut items = vec![CompletionRenderer::wildcard_item()];
                items.extend(adapter.column_suggestions(context, schema, current_database));
                items.extend(adapter.function_suggestions());
                items
            }
            ContextType::Column | ContextType::Where => {
                let mut items = adapter.column_suggestions(context, schema, current_database);
                items.extend(adapter.function_suggestions());
                items
            }
            ContextType::Function => adapter.function_suggestions(),
        };

        let range = (!context.current_word.is_empty()).then_some(context.word_range);
        sort_and_filter_suggestions(items, &context.current_word, range, self.max_items)
    }
}

impl std::fmt::Debug for CompletionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionProvider")
            .field("dialect", &self.dialect())
            .field("current_database", &self.current_database)
            .field("max_items", &self.max_items)
            .finish_non_exhaustive()
    }
}
