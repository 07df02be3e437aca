// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! SQLite builtin function definitions

use crate::{FunctionMetadata, FunctionType};

/// Get all extended SQLite functions
pub fn all_functions() -> Vec<FunctionMetadata> {
    vec![
        FunctionMetadata::new("GROUP_CONCAT")
            .with_type(FunctionType::Aggregate)
            .with_signature("GROUP_CONCAT(expr [, separator])")
            .with_description("Concatenate values from multiple rows"),
        FunctionMetadata::new("TOTAL")
            .with_type(FunctionType::Aggregate)
            .with_signature("TOTAL(expr)")
            .with_description("Floating-point sum, 0.0 for no rows"),
        FunctionMetadata::new("IFNULL")
            .with_signature("IFNULL(expr, alt)")
            .with_description("Return alternative if null"),
        FunctionMetadata::new("SUBSTR")
            .with_signature("SUBSTR(str, start [, length])")
            .with_description("Extract substring"),
        FunctionMetadata::new("INSTR")
            .with_signature("INSTR(haystack, needle)")
            .with_description("Position of the first occurrence"),
        FunctionMetadata::new("STRFTIME")
            .with_signature("STRFTIME(format, time, ...)")
            .with_description("Format a date/time value"),
        FunctionMetadata::new("DATETIME")
            .with_signature("DATETIME(time, modifier, ...)")
            .with_description("Date and time as YYYY-MM-DD HH:MM:SS"),
        FunctionMetadata::new("JULIANDAY")
            .with_signature("JULIANDAY(time, modifier, ...)")
            .with_description("Fractional Julian day number"),
        FunctionMetadata::new("PRINTF")
            .with_signature("PRINTF(format, ...)")
            .with_description("Format a string"),
        FunctionMetadata::new("TYPEOF")
            .with_signature("TYPEOF(expr)")
            .with_description("Storage class of a value"),
    ]
}
