// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Testing utilities for sql-complete
//!
//! This crate provides common testing components including:
//! - Mock catalog implementations with call counting and failure injection
//! - Completion-list assertions
//! - Test fixtures and sample buffers with cursor markers

pub mod assertions;
pub mod fixtures;
pub mod mock_catalog;

// Re-exports for convenience
pub use assertions::CompletionAssertions;
pub use fixtures::{CURSOR_MARKER, SqlFixtures, split_cursor};
pub use mock_catalog::{Endpoint, MockCatalog, MockCatalogBuilder};
