// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # SQL Keywords for Completion
//!
//! This module defines the dialect-neutral SQL keyword vocabulary.
//! Dialect-specific keywords are supplied by the dialect adapters.

use std::collections::HashSet;

/// SQL keyword with metadata
#[derive(Debug, Clone, PartialEq)]
pub struct SqlKeyword {
    /// The keyword text
    pub label: String,
    /// Optional description/documentation
    pub description: Option<String>,
}

impl SqlKeyword {
    /// Create a new SQL keyword
    pub fn new(label: &str, description: Option<&str>) -> Self {
        Self {
            label: label.to_uppercase(),
            description: description.map(|d| d.to_string()),
        }
    }

    /// Create a simple keyword without description
    pub fn simple(label: &str) -> Self {
        Self::new(label, None)
    }
}

/// Keyword set for a specific context
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    /// Keywords in this set
    pub keywords: Vec<SqlKeyword>,
}

impl KeywordSet {
    /// Create a new keyword set
    pub fn new(keywords: Vec<SqlKeyword>) -> Self {
        Self { keywords }
    }

    /// Get all keyword labels as a HashSet for filtering
    pub fn labels(&self) -> HashSet<String> {
        self.keywords.iter().map(|k| k.label.clone()).collect()
    }

    /// Append keywords whose label is not present yet
    pub fn merge(mut self, other: KeywordSet) -> Self {
        let mut seen = self.labels();
        for keyword in other.keywords {
            if seen.insert(keyword.label.clone()) {
                self.keywords.push(keyword);
            }
        }
        self
    }
}

/// Keyword provider for different SQL contexts
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordProvider;

impl KeywordProvider {
    /// Create a new keyword provider
    pub fn new() -> Self {
        Self
    }

    /// Get statement keywords (for start of statement)
    pub fn statement_keywords(&self) -> KeywordSet {
        KeywordSet::new(vec![
            SqlKeyword::new("SELECT", Some("Retrieve data from tables")),
            SqlKeyword::new("INSERT", Some("Insert new rows into a table")),
            SqlKeyword::new("UPDATE", Some("Modify existing rows in a table")),
            SqlKeyword::new("DELETE", Some("Delete rows from a table")),
            SqlKeyword::new("CREATE", Some("Create database objects")),
            SqlKeyword::new("ALTER", Some("Modify database objects")),
            SqlKeyword::new("DROP", Some("Remove database objects")),
            SqlKeyword::new("WITH", Some("Common Table Expression (CTE)")),
        ])
    }

    /// Keywords that may follow a complete SELECT projection
    pub fn clause_keywords(&self) -> KeywordSet {
        KeywordSet::new(vec![
            SqlKeyword::new("FROM", Some("Specify tables to query")),
            SqlKeyword::new("WHERE", Some("Filter rows")),
            SqlKeyword::new("GROUP BY", Some("Group rows by values")),
            SqlKeyword::new("HAVING", Some("Filter groups")),
            SqlKeyword::new("ORDER BY", Some("Sort result rows")),
            SqlKeyword::new("JOIN", Some("Join with another table")),
            SqlKeyword::new("INNER JOIN", Some("Inner join with another table")),
            SqlKeyword::new("LEFT JOIN", Some("Left outer join")),
            SqlKeyword::new("RIGHT JOIN", Some("Right outer join")),
            SqlKeyword::new("ON", Some("Join condition")),
            SqlKeyword::new("UNION", Some("Combine result sets")),
            SqlKeyword::new("DISTINCT", Some("Remove duplicate rows")),
            SqlKeyword::new("AS", Some("Alias for columns or tables")),
        ])
    }

    /// Get expression/operator keywords
    pub fn expression_keywords(&self) -> KeywordSet {
        KeywordSet::new(vec![
            SqlKeyword::new("AND", Some("Logical AND")),
            SqlKeyword::new("OR", Some("Logical OR")),
            SqlKeyword::new("NOT", Some("Logical NOT")),
            SqlKeyword::new("IN", Some("Value in list")),
            SqlKeyword::new("EXISTS", Some("Subquery exists")),
            SqlKeyword::new("BETWEEN", Some("Value between range")),
            SqlKeyword::new("LIKE", Some("Pattern matching")),
            SqlKeyword::new("IS NULL", Some("Check if value is NULL")),
            SqlKeyword::new("IS NOT NULL", Some("Check if value is not NULL")),
            SqlKeyword::new("CASE", Some("Conditional expression")),
            SqlKeyword::new("WHEN", Some("CASE WHEN condition")),
            SqlKeyword::new("THEN", Some("CASE THEN result")),
            SqlKeyword::new("ELSE", Some("CASE ELSE default")),
            SqlKeyword::new("END", Some("END CASE expression")),
            SqlKeyword::new("NULL", Some("NULL value")),
        ])
    }

    /// Every dialect-neutral keyword, deduplicated by label
    pub fn all_keywords(&self) -> KeywordSet {
        self.statement_keywords()
            .merge(self.clause_keywords())
            .merge(self.expression_keywords())
    }
}
