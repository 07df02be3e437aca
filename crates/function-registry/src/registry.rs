// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

use crate::{Dialect, FunctionMetadata, builtin};
use sql_complete_ir::DialectFamily;
use std::collections::HashMap;

/// Function registry for builtin SQL functions
///
/// Holds the core function list shared by every dialect and the extended
/// list of each dialect family.
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    core: Vec<FunctionMetadata>,
    /// Extended functions organized by dialect family
    functions: HashMap<DialectFamily, Vec<FunctionMetadata>>,
}

impl FunctionRegistry {
    /// Create a new function registry with all builtin functions loaded
    pub fn new() -> Self {
        let mut functions = HashMap::new();
        functions.insert(DialectFamily::MySQL, builtin::mysql::all_functions());
        functions.insert(DialectFamily::PostgreSQL, builtin::postgresql::all_functions());
        functions.insert(DialectFamily::SQLite, builtin::sqlite::all_functions());

        Self {
            core: builtin::core::all_functions(),
            functions,
        }
    }

    /// The fixed core function list
    pub fn core_functions(&self) -> &[FunctionMetadata] {
        &self.core
    }

    /// Get the extended functions for a specific dialect
    ///
    /// Returns an empty slice if the dialect has no extended list.
    pub fn get_functions(&self, dialect: Dialect) -> &[FunctionMetadata] {
        self.functions
            .get(&dialect.family())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Lookup a single function by name and dialect, core list included
    ///
    /// # Arguments
    ///
    /// * `dialect` - The SQL dialect to search in
    /// * `name` - The function name to lookup (case-insensitive)
    pub fn get_function(&self, dialect: Dialect, name: &str) -> Option<&FunctionMetadata> {
        self.core
            .iter()
            .chain(self.get_functions(dialect))
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Check if a function exists for a specific dialect
    pub fn has_function(&self, dialect: Dialect, name: &str) -> bool {
        self.get_function(dialect, name).is_some()
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry() {
        let registry = FunctionRegistry::new();
        assert_eq!(registry.core_functions().len(), 7);
        for dialect in Dialect::ALL {
            assert!(!registry.get_functions(dialect).is_empty());
        }
    }

    #[test]
    fn test_mariadb_shares_mysql_functions() {
        let registry = FunctionRegistry::new();
        assert_eq!(
            registry.get_functions(Dialect::MariaDB),
            registry.get_functions(Dialect::MySQL)
        );
    }

    #[test]
    fn test_get_function_case_insensitive() {
        let registry = FunctionRegistry::new();

        let upper = registry.get_function(Dialect::MySQL, "GROUP_CONCAT");
        let lower = registry.get_function(Dialect::MySQL, "group_concat");
        assert!(upper.is_some());
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_core_functions_visible_in_every_dialect() {
        let registry = FunctionRegistry::new();
        for dialect in Dialect::ALL {
            assert!(registry.has_function(dialect, "count"));
            assert!(registry.has_function(dialect, "CAST"));
        }
    }

    #[test]
    fn test_dialect_specific_functions() {
        let registry = FunctionRegistry::new();
        assert!(registry.has_function(Dialect::PostgreSQL, "DATE_TRUNC"));
        assert!(!registry.has_function(Dialect::SQLite, "DATE_TRUNC"));
        assert!(registry.has_function(Dialect::SQLite, "STRFTIME"));
        assert!(!registry.has_function(Dialect::MySQL, "NONEXISTENT"));
    }
}
