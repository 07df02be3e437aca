// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! MySQL and MariaDB builtin function definitions

use crate::{FunctionMetadata, FunctionType};

/// Get all extended MySQL functions
pub fn all_functions() -> Vec<FunctionMetadata> {
    vec![
        // Aggregate functions
        FunctionMetadata::new("GROUP_CONCAT")
            .with_type(FunctionType::Aggregate)
            .with_signature("GROUP_CONCAT(expr [ORDER BY ...] [SEPARATOR str])")
            .with_description("Concatenate values from multiple rows"),
        FunctionMetadata::new("JSON_ARRAYAGG")
            .with_type(FunctionType::Aggregate)
            .with_signature("JSON_ARRAYAGG(expr)")
            .with_description("Aggregate values into a JSON array"),
        FunctionMetadata::new("JSON_OBJECTAGG")
            .with_type(FunctionType::Aggregate)
            .with_signature("JSON_OBJECTAGG(key, value)")
            .with_description("Aggregate key/value pairs into a JSON object"),
        FunctionMetadata::new("BIT_OR")
            .with_type(FunctionType::Aggregate)
            .with_signature("BIT_OR(expr)")
            .with_description("Bitwise OR of all bits"),
        // Scalar functions
        FunctionMetadata::new("IFNULL")
            .with_signature("IFNULL(expr, alt)")
            .with_description("Return alternative if null"),
        FunctionMetadata::new("IF")
            .with_signature("IF(cond, then, else)")
            .with_description("Conditional value"),
        FunctionMetadata::new("CONCAT")
            .with_signature("CONCAT(str, ...)")
            .with_description("Concatenate strings"),
        FunctionMetadata::new("CONCAT_WS")
            .with_signature("CONCAT_WS(separator, str, ...)")
            .with_description("Concatenate strings with a separator"),
        FunctionMetadata::new("SUBSTRING_INDEX")
            .with_signature("SUBSTRING_INDEX(str, delim, count)")
            .with_description("Substring before count occurrences of a delimiter"),
        FunctionMetadata::new("DATE_FORMAT")
            .with_signature("DATE_FORMAT(date, format)")
            .with_description("Format a date value"),
        FunctionMetadata::new("DATE_ADD")
            .with_signature("DATE_ADD(date, INTERVAL expr unit)")
            .with_description("Add a time interval to a date"),
        FunctionMetadata::new("DATEDIFF")
            .with_signature("DATEDIFF(date1, date2)")
            .with_description("Days between two dates"),
        FunctionMetadata::new("NOW")
            .with_signature("NOW()")
            .with_description("Current date and time"),
        FunctionMetadata::new("CURDATE")
            .with_signature("CURDATE()")
            .with_description("Current date"),
        FunctionMetadata::new("UNIX_TIMESTAMP")
            .with_signature("UNIX_TIMESTAMP([date])")
            .with_description("Seconds since the Unix epoch"),
        FunctionMetadata::new("FROM_UNIXTIME")
            .with_signature("FROM_UNIXTIME(seconds [, format])")
            .with_description("Convert a Unix timestamp to a datetime"),
        FunctionMetadata::new("JSON_EXTRACT")
            .with_signature("JSON_EXTRACT(doc, path, ...)")
            .with_description("Extract data from a JSON document"),
        // Window functions (MySQL 8.0+)
        FunctionMetadata::new("ROW_NUMBER")
            .with_type(FunctionType::Window)
            .with_signature("ROW_NUMBER() OVER (...)")
            .with_description("Row number within partition"),
        FunctionMetadata::new("RANK")
            .with_type(FunctionType::Window)
            .with_signature("RANK() OVER (...)")
            .with_description("Rank within partition, with gaps"),
    ]
}
