// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Metadata types for database schema information
//!
//! This module re-exports metadata types from the `sql-complete-ir` crate.

pub use sql_complete_ir::{ColumnInfo, DatabaseSchema, IndexInfo, TableInfo};
