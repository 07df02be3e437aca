// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Catalog manager
//!
//! Keeps one schema cache per connection.
//!
//! The catalog manager is responsible for:
//! - Creating a cache the first time a connection asks for completions
//! - Reusing it across completion requests of that connection
//! - Invalidating it on reconnect and disposing it when the session ends

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use sql_complete_catalog::{Catalog, SchemaCache};
use tracing::debug;

/// Catalog manager
///
/// Maps connection ids to their schema caches.
#[derive(Debug, Default)]
pub struct CatalogManager {
    caches: HashMap<String, Arc<SchemaCache>>,
}

impl CatalogManager {
    /// Create a new catalog manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cache of `connection_id`, creating it over `catalog` if
    /// the connection has none yet
    pub fn get_or_create(
        &mut self,
        connection_id: &str,
        catalog: Arc<dyn Catalog>,
        timeout: Duration,
    ) -> Arc<SchemaCache> {
        if let Some(cache) = self.caches.get(connection_id) {
            return cache.clone();
        }

        debug!(connection = connection_id, ?timeout, "creating schema cache");
        let cache = Arc::new(SchemaCache::new(connection_id, catalog).with_timeout(timeout));
        self.caches.insert(connection_id.to_string(), cache.clone());
        cache
    }

    pub fn get(&self, connection_id: &str) -> Option<Arc<SchemaCache>> {
        self.caches.get(connection_id).cloned()
    }

    /// Force the next completion on `connection_id` to refetch metadata.
    /// Returns whether the connection had a cache.
    pub fn invalidate(&self, connection_id: &str) -> bool {
        match self.caches.get(connection_id) {
            Some(cache) => {
                cache.invalidate();
                true
            }
            None => false,
        }
    }

    /// Dispose and forget the cache of `connection_id`
    pub fn dispose(&mut self, connection_id: &str) -> bool {
        match self.caches.remove(connection_id) {
            Some(cache) => {
                cache.dispose();
                true
            }
            None => false,
        }
    }

    /// Dispose every cache
    ///
    /// This should be called when shutting down.
    pub fn close_all(&mut self) {
        for (_, cache) in self.caches.drain() {
            cache.dispose();
        }
    }

    pub fn len(&self) -> usize {
        self.caches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caches.is_empty()
    }
}
