// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Schema Cache
//!
//! Memoizes the [`DatabaseSchema`] of one connection.
//!
//! The cache slot is always in one of three states:
//!
//! - **Empty**: nothing fetched yet, or the last fetch failed
//! - **InFlight**: a shared fetch future every caller awaits
//! - **Ready**: a published snapshot with the instant it was fetched
//!
//! Concurrent callers that arrive while a fetch is running join the same
//! future, so each metadata endpoint is hit once per refresh. A published
//! snapshot is never mutated; a refresh swaps in a new `Arc`.
//!
//! The slot mutex is never held across an `.await`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt, Shared, try_join_all};
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::metadata::{DatabaseSchema, TableInfo};
use crate::{Catalog, CatalogResult};

/// Default lifetime of a fetched schema (5 minutes)
pub const DEFAULT_CACHE_TIMEOUT: Duration = Duration::from_secs(300);

type SharedFetch = Shared<BoxFuture<'static, CatalogResult<Arc<DatabaseSchema>>>>;

enum Slot {
    Empty,
    InFlight {
        generation: u64,
        fetch: SharedFetch,
    },
    Ready {
        schema: Arc<DatabaseSchema>,
        fetched_at: Instant,
    },
}

struct CacheState {
    slot: Slot,
    /// Bumped by `invalidate` and `dispose`; fetches started under an older
    /// generation never publish.
    generation: u64,
    disposed: bool,
}

/// Per-connection schema cache with single-flight refresh
pub struct SchemaCache {
    connection_id: String,
    catalog: Arc<dyn Catalog>,
    timeout: Duration,
    state: Mutex<CacheState>,
}

impl SchemaCache {
    /// Create a cache over `catalog` with the default timeout
    pub fn new(connection_id: impl Into<String>, catalog: Arc<dyn Catalog>) -> Self {
        Self {
            connection_id: connection_id.into(),
            catalog,
            timeout: DEFAULT_CACHE_TIMEOUT,
            state: Mutex::new(CacheState {
                slot: Slot::Empty,
                generation: 0,
                disposed: false,
            }),
        }
    }

    /// Builder method: set the cache timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn connection_id(&self) -> &str {
        &self.connection_id
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn is_disposed(&self) -> bool {
        self.lock().disposed
    }

    /// Return the current schema snapshot, fetching it if needed.
    ///
    /// Never fails: a failed fetch yields an empty schema and leaves the
    /// slot empty so the next call retries.
    pub async fn get_schema(&self) -> Arc<DatabaseSchema> {
        let (generation, fetch) = {
            let mut state = self.lock();
            if state.disposed {
                debug!(connection = %self.connection_id, "schema requested from disposed cache");
                return Arc::new(DatabaseSchema::empty());
            }

            let joined = match &state.slot {
                Slot::Ready { schema, fetched_at } if fetched_at.elapsed() < self.timeout => {
                    debug!(connection = %self.connection_id, "schema cache hit");
                    return Arc::clone(schema);
                }
                Slot::InFlight { generation, fetch } => Some((*generation, fetch.clone())),
                _ => None,
            };

            match joined {
                Some(in_flight) => {
                    debug!(connection = %self.connection_id, "joining in-flight schema fetch");
                    in_flight
                }
                None => {
                    debug!(connection = %self.connection_id, "starting schema fetch");
                    let generation = state.generation;
                    let fetch = fetch_schema(self.connection_id.clone(), Arc::clone(&self.catalog))
                        .boxed()
                        .shared();
                    state.slot = Slot::InFlight {
                        generation,
                        fetch: fetch.clone(),
                    };
                    (generation, fetch)
                }
            }
        };

        let result = fetch.await;

        let mut state = self.lock();
        let owns_slot = matches!(
            state.slot,
            Slot::InFlight { generation: g, .. } if g == generation
        ) && state.generation == generation;

        match result {
            Ok(schema) => {
                if owns_slot {
                    state.slot = Slot::Ready {
                        schema: Arc::clone(&schema),
                        fetched_at: Instant::now(),
                    };
                }
                if state.disposed {
                    debug!(connection = %self.connection_id, "discarding schema fetched after dispose");
                    return Arc::new(DatabaseSchema::empty());
                }
                schema
            }
            Err(err) => {
                if owns_slot {
                    warn!(connection = %self.connection_id, error = %err, "schema fetch failed, serving empty schema");
                    state.slot = Slot::Empty;
                }
                Arc::new(DatabaseSchema::empty())
            }
        }
    }

    /// Drop the cached snapshot; the next `get_schema` refetches.
    ///
    /// A fetch already running finishes for its current waiters but is
    /// not published.
    pub fn invalidate(&self) {
        let mut state = self.lock();
        state.generation += 1;
        state.slot = Slot::Empty;
        debug!(connection = %self.connection_id, generation = state.generation, "schema cache invalidated");
    }

    /// Release the snapshot and any in-flight fetch. The cache serves empty
    /// schemas from now on.
    pub fn dispose(&self) {
        let mut state = self.lock();
        state.generation += 1;
        state.slot = Slot::Empty;
        state.disposed = true;
        debug!(connection = %self.connection_id, "schema cache disposed");
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for SchemaCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaCache")
            .field("connection_id", &self.connection_id)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// List databases, then tables of every database, then the columns of
/// every table. Each fan-out runs concurrently.
async fn fetch_schema(
    connection_id: String,
    catalog: Arc<dyn Catalog>,
) -> CatalogResult<Arc<DatabaseSchema>> {
    let started = Instant::now();

    let databases = catalog.list_databases().await?;
    let table_lists = try_join_all(databases.iter().map(|db| catalog.list_tables(db))).await?;

    let targets: Vec<(&str, String)> = databases
        .iter()
        .zip(table_lists)
        .flat_map(|(db, tables)| tables.into_iter().map(move |t| (db.as_str(), t)))
        .collect();

    let tables = try_join_all(
        targets
            .iter()
            .map(|(db, table)| fetch_table(catalog.as_ref(), db, table)),
    )
    .await?;

    let schema = DatabaseSchema::from_parts(databases.iter().cloned(), tables);
    debug!(
        connection = %connection_id,
        databases = schema.databases.len(),
        tables = schema.tables.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "schema fetched"
    );
    Ok(Arc::new(schema))
}

async fn fetch_table(catalog: &dyn Catalog, database: &str, table: &str) -> CatalogResult<TableInfo> {
    let (columns, primary_key, indexes) = futures::join!(
        catalog.get_column_schema(database, table),
        catalog.get_primary_key(database, table),
        catalog.list_indexes(database, table),
    );

    let mut info = TableInfo::new(database, table).with_columns(columns?);
    info.primary_key = primary_key.unwrap_or_else(|err| {
        debug!(database, table, error = %err, "primary key unavailable");
        None
    });
    info.indexes = indexes.unwrap_or_else(|err| {
        debug!(database, table, error = %err, "indexes unavailable");
        None
    });
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CatalogError;
    use crate::metadata::ColumnInfo;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingCatalog {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait::async_trait]
    impl Catalog for CountingCatalog {
        async fn list_databases(&self) -> CatalogResult<Vec<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(CatalogError::ConnectionFailed("refused".into()));
            }
            Ok(vec!["app".into()])
        }

        async fn list_tables(&self, _database: &str) -> CatalogResult<Vec<String>> {
            Ok(vec!["users".into()])
        }

        async fn get_column_schema(&self, _: &str, _: &str) -> CatalogResult<Vec<ColumnInfo>> {
            Ok(vec![ColumnInfo::new("id", "int")])
        }

        async fn get_primary_key(&self, _: &str, _: &str) -> CatalogResult<Option<Vec<String>>> {
            Err(CatalogError::NotSupported("primary keys".into()))
        }
    }

    fn cache(fail: bool) -> (Arc<CountingCatalog>, SchemaCache) {
        let catalog = Arc::new(CountingCatalog {
            calls: AtomicUsize::new(0),
            fail,
        });
        let cache = SchemaCache::new("test", catalog.clone() as Arc<dyn Catalog>);
        (catalog, cache)
    }

    #[tokio::test]
    async fn test_fetch_assembles_schema() {
        let (_, cache) = cache(false);
        let schema = cache.get_schema().await;
        assert!(schema.databases.contains("app"));
        let users = &schema.tables["app.users"];
        assert_eq!(users.columns[0].name, "id");
        // optional metadata failure is recorded as absent
        assert_eq!(users.primary_key, None);
    }

    #[tokio::test]
    async fn test_failure_is_not_cached() {
        let (catalog, cache) = cache(true);
        assert!(cache.get_schema().await.is_empty());
        assert!(cache.get_schema().await.is_empty());
        assert_eq!(catalog.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let (catalog, cache) = cache(false);
        let first = cache.get_schema().await;
        cache.invalidate();
        let second = cache.get_schema().await;
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(catalog.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_disposed_cache_serves_empty() {
        let (catalog, cache) = cache(false);
        cache.dispose();
        assert!(cache.is_disposed());
        assert!(cache.get_schema().await.is_empty());
        assert_eq!(catalog.calls.load(Ordering::SeqCst), 0);
    }
}
