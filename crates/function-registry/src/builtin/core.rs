// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Functions available in every supported dialect

use crate::{FunctionMetadata, FunctionType};

/// The fixed core function list
pub fn all_functions() -> Vec<FunctionMetadata> {
    vec![
        FunctionMetadata::new("COUNT")
            .with_type(FunctionType::Aggregate)
            .with_signature("COUNT(expr)")
            .with_description("Count the number of rows"),
        FunctionMetadata::new("SUM")
            .with_type(FunctionType::Aggregate)
            .with_signature("SUM(expr)")
            .with_description("Sum of values"),
        FunctionMetadata::new("AVG")
            .with_type(FunctionType::Aggregate)
            .with_signature("AVG(expr)")
            .with_description("Average of values"),
        FunctionMetadata::new("MIN")
            .with_type(FunctionType::Aggregate)
            .with_signature("MIN(expr)")
            .with_description("Minimum value"),
        FunctionMetadata::new("MAX")
            .with_type(FunctionType::Aggregate)
            .with_signature("MAX(expr)")
            .with_description("Maximum value"),
        FunctionMetadata::new("COALESCE")
            .with_signature("COALESCE(value, ...)")
            .with_description("Return first non-null value"),
        FunctionMetadata::new("CAST")
            .with_signature("CAST(expr AS type)")
            .with_description("Convert a value to another type"),
    ]
}
