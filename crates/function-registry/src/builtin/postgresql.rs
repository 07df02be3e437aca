// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! PostgreSQL builtin function definitions

use crate::{FunctionMetadata, FunctionType};

/// Get all extended PostgreSQL functions
pub fn all_functions() -> Vec<FunctionMetadata> {
    vec![
        // Aggregate functions
        FunctionMetadata::new("STRING_AGG")
            .with_type(FunctionType::Aggregate)
            .with_signature("STRING_AGG(expr, delimiter)")
            .with_description("Concatenate values with a delimiter"),
        FunctionMetadata::new("ARRAY_AGG")
            .with_type(FunctionType::Aggregate)
            .with_signature("ARRAY_AGG(expr)")
            .with_description("Collect values into an array"),
        FunctionMetadata::new("JSON_AGG")
            .with_type(FunctionType::Aggregate)
            .with_signature("JSON_AGG(expr)")
            .with_description("Aggregate values as a JSON array"),
        FunctionMetadata::new("JSONB_AGG")
            .with_type(FunctionType::Aggregate)
            .with_signature("JSONB_AGG(expr)")
            .with_description("Aggregate values as a JSONB array"),
        FunctionMetadata::new("BOOL_AND")
            .with_type(FunctionType::Aggregate)
            .with_signature("BOOL_AND(expr)")
            .with_description("True if all inputs are true"),
        FunctionMetadata::new("BOOL_OR")
            .with_type(FunctionType::Aggregate)
            .with_signature("BOOL_OR(expr)")
            .with_description("True if any input is true"),
        // Scalar functions
        FunctionMetadata::new("NOW")
            .with_signature("NOW()")
            .with_description("Current transaction timestamp"),
        FunctionMetadata::new("DATE_TRUNC")
            .with_signature("DATE_TRUNC(field, source)")
            .with_description("Truncate a timestamp to the given precision"),
        FunctionMetadata::new("TO_CHAR")
            .with_signature("TO_CHAR(value, format)")
            .with_description("Format a value as text"),
        FunctionMetadata::new("TO_TIMESTAMP")
            .with_signature("TO_TIMESTAMP(text, format)")
            .with_description("Parse text into a timestamp"),
        FunctionMetadata::new("NULLIF")
            .with_signature("NULLIF(a, b)")
            .with_description("NULL if both arguments are equal"),
        FunctionMetadata::new("GENERATE_SERIES")
            .with_signature("GENERATE_SERIES(start, stop [, step])")
            .with_description("Set-returning series of values"),
        FunctionMetadata::new("JSONB_BUILD_OBJECT")
            .with_signature("JSONB_BUILD_OBJECT(key, value, ...)")
            .with_description("Build a JSONB object"),
        FunctionMetadata::new("REGEXP_REPLACE")
            .with_signature("REGEXP_REPLACE(source, pattern, replacement [, flags])")
            .with_description("Replace substrings matching a POSIX regex"),
        // Window functions
        FunctionMetadata::new("ROW_NUMBER")
            .with_type(FunctionType::Window)
            .with_signature("ROW_NUMBER() OVER (...)")
            .with_description("Row number within partition"),
        FunctionMetadata::new("DENSE_RANK")
            .with_type(FunctionType::Window)
            .with_signature("DENSE_RANK() OVER (...)")
            .with_description("Rank within partition, without gaps"),
        FunctionMetadata::new("LAG")
            .with_type(FunctionType::Window)
            .with_signature("LAG(value [, offset [, default]]) OVER (...)")
            .with_description("Value from a preceding row"),
    ]
}
