// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Keyword and table-reference patterns, compiled once.

use std::sync::LazyLock;

use regex::Regex;

/// Clause keywords whose last occurrence decides the context
pub(crate) static CLAUSE_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(SELECT|FROM|WHERE|HAVING|ON|GROUP\s+BY|ORDER\s+BY|(?:(?:LEFT|RIGHT|FULL|INNER|CROSS|NATURAL)\s+)?(?:OUTER\s+)?JOIN)\b",
    )
    .expect("clause keyword pattern is valid")
});

/// `FROM <table> [[AS] alias]` and `JOIN <table> [[AS] alias]`
pub(crate) static TABLE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)\b(?:FROM|JOIN)\s+((?:[`"\[]?[\w$]+[`"\]]?\.){0,2}[`"\[]?[\w$]+[`"\]]?)(?:\s+(?:AS\s+)?([`"\[]?\w+[`"\]]?))?"#,
    )
    .expect("table reference pattern is valid")
});

pub(crate) static FROM_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bFROM\b").expect("FROM pattern is valid"));

pub(crate) static ON_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bON\b").expect("ON pattern is valid"));

/// Words that may follow a table reference but are never aliases
pub(crate) const NON_ALIAS_WORDS: &[&str] = &[
    "AS", "ON", "USING", "FROM", "WHERE", "JOIN", "LEFT", "RIGHT", "FULL", "INNER", "OUTER", "CROSS",
    "NATURAL", "STRAIGHT_JOIN", "GROUP", "ORDER", "HAVING", "LIMIT", "OFFSET", "FETCH", "UNION",
    "INTERSECT", "EXCEPT", "WINDOW", "SET", "VALUES", "RETURNING", "INTO", "SELECT", "WITH",
    "LATERAL", "FOR", "LOCK",
];
