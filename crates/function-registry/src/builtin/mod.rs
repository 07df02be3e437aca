// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Builtin SQL function definitions
//!
//! This module contains function definitions for different SQL dialects.

pub mod core;
pub mod mysql;
pub mod postgresql;
pub mod sqlite;
