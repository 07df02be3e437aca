// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # SQL Function Registry
//!
//! This crate provides the builtin function vocabulary offered by the
//! completion engine.
//!
//! ## Features
//!
//! - A fixed core list shared by every dialect (`COUNT`, `SUM`, `AVG`,
//!   `MIN`, `MAX`, `COALESCE`, `CAST`)
//! - Extended per-dialect lists for MySQL/MariaDB, PostgreSQL and SQLite
//! - Case-insensitive lookup by dialect
//!
//! ## Usage
//!
//! ```rust
//! use sql_complete_function_registry::{Dialect, FunctionRegistry};
//!
//! let registry = FunctionRegistry::new();
//! assert!(registry.has_function(Dialect::PostgreSQL, "string_agg"));
//! assert!(!registry.has_function(Dialect::MySQL, "string_agg"));
//! ```

pub mod builtin;
pub mod registry;

// Re-exports from ir for convenience
pub use sql_complete_ir::{Dialect, FunctionMetadata, FunctionType};

pub use registry::FunctionRegistry;
