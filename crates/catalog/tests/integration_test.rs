// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Integration tests for the schema cache

use std::sync::Arc;
use std::time::Duration;

use sql_complete_catalog::{Catalog, CatalogError, DEFAULT_CACHE_TIMEOUT, SchemaCache};
use sql_complete_test_utils::{Endpoint, MockCatalog, MockCatalogBuilder};

const LATENCY: Duration = Duration::from_millis(100);

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("sql_complete_catalog=debug")
        .with_test_writer()
        .try_init();
}

fn cache_over(catalog: MockCatalog) -> (Arc<MockCatalog>, SchemaCache) {
    let catalog = Arc::new(catalog);
    let cache = SchemaCache::new("conn-1", catalog.clone() as Arc<dyn Catalog>);
    (catalog, cache)
}

#[tokio::test]
async fn test_schema_assembled_from_catalog() {
    let (_, cache) = cache_over(MockCatalogBuilder::new().with_standard_schema().build());

    let schema = cache.get_schema().await;

    assert_eq!(
        schema.databases.iter().collect::<Vec<_>>(),
        vec!["analytics", "app"]
    );
    assert_eq!(
        schema.tables.keys().collect::<Vec<_>>(),
        vec!["analytics.events", "app.orders", "app.products", "app.users"]
    );
    let users = &schema.tables["app.users"];
    assert_eq!(users.columns.len(), 4);
    assert_eq!(users.primary_key, Some(vec!["id".to_string()]));
    assert_eq!(users.indexes.as_ref().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_postgres_tables_use_three_segment_keys() {
    let (_, cache) = cache_over(MockCatalogBuilder::new().with_postgres_schema().build());

    let schema = cache.get_schema().await;

    assert!(schema.tables.contains_key("shop.public.users"));
    assert!(schema.tables.contains_key("shop.sales.invoices"));
    assert_eq!(
        schema.resolve_table("users", Some("shop")).map(|t| t.key()),
        Some("shop.public.users".to_string())
    );
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_requests_share_one_fetch() {
    let (catalog, cache) = cache_over(
        MockCatalogBuilder::new()
            .with_standard_schema()
            .with_latency(LATENCY)
            .build(),
    );

    let (first, second) = tokio::join!(cache.get_schema(), cache.get_schema());

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(catalog.calls(Endpoint::ListDatabases), 1);
    assert_eq!(catalog.calls(Endpoint::ListTables), 2);
    assert_eq!(catalog.calls(Endpoint::GetColumnSchema), 4);
    assert_eq!(catalog.calls(Endpoint::GetPrimaryKey), 4);
    assert_eq!(catalog.calls(Endpoint::ListIndexes), 4);
}

#[tokio::test(start_paused = true)]
async fn test_late_joiner_shares_in_flight_fetch() {
    let (catalog, cache) = cache_over(
        MockCatalogBuilder::new()
            .with_standard_schema()
            .with_latency(LATENCY)
            .build(),
    );

    let (first, second) = tokio::join!(cache.get_schema(), async {
        tokio::time::sleep(LATENCY * 2).await;
        cache.get_schema().await
    });

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(catalog.calls(Endpoint::ListDatabases), 1);
}

#[tokio::test(start_paused = true)]
async fn test_fresh_schema_is_same_instance() {
    let (catalog, cache) = cache_over(MockCatalogBuilder::new().with_standard_schema().build());

    let first = cache.get_schema().await;
    tokio::time::advance(DEFAULT_CACHE_TIMEOUT - Duration::from_secs(1)).await;
    let second = cache.get_schema().await;

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(catalog.calls(Endpoint::ListDatabases), 1);
}

#[tokio::test(start_paused = true)]
async fn test_expired_schema_is_refetched() {
    let (catalog, cache) = cache_over(MockCatalogBuilder::new().with_standard_schema().build());

    let first = cache.get_schema().await;
    tokio::time::advance(DEFAULT_CACHE_TIMEOUT + Duration::from_secs(1)).await;
    let second = cache.get_schema().await;

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(*first, *second);
    assert_eq!(catalog.calls(Endpoint::ListDatabases), 2);
}

#[tokio::test(start_paused = true)]
async fn test_custom_timeout() {
    let catalog = Arc::new(MockCatalogBuilder::new().with_sqlite_schema().build());
    let cache = SchemaCache::new("conn-1", catalog.clone() as Arc<dyn Catalog>)
        .with_timeout(Duration::from_secs(10));

    cache.get_schema().await;
    tokio::time::advance(Duration::from_secs(11)).await;
    cache.get_schema().await;

    assert_eq!(catalog.calls(Endpoint::ListDatabases), 2);
}

#[tokio::test]
async fn test_failed_listing_degrades_to_empty_schema() {
    init_tracing();
    let (_, cache) = cache_over(
        MockCatalogBuilder::new()
            .with_standard_schema()
            .failing(
                Endpoint::ListDatabases,
                CatalogError::ConnectionFailed("connection refused".to_string()),
            )
            .build(),
    );

    let schema = cache.get_schema().await;

    assert!(schema.databases.is_empty());
    assert!(schema.tables.is_empty());
}

#[tokio::test]
async fn test_failed_column_fetch_degrades_to_empty_schema() {
    init_tracing();
    let (catalog, cache) = cache_over(
        MockCatalogBuilder::new()
            .with_standard_schema()
            .failing(Endpoint::GetColumnSchema, CatalogError::QueryTimeout(30))
            .build(),
    );

    let schema = cache.get_schema().await;
    assert!(schema.is_empty());

    // failures are not cached
    cache.get_schema().await;
    assert_eq!(catalog.calls(Endpoint::ListDatabases), 2);
}

#[tokio::test]
async fn test_optional_metadata_failure_keeps_tables() {
    init_tracing();
    let (_, cache) = cache_over(
        MockCatalogBuilder::new()
            .with_standard_schema()
            .failing(
                Endpoint::GetPrimaryKey,
                CatalogError::PermissionDenied("information_schema".to_string()),
            )
            .failing(
                Endpoint::ListIndexes,
                CatalogError::NotSupported("indexes".to_string()),
            )
            .build(),
    );

    let schema = cache.get_schema().await;

    let users = &schema.tables["app.users"];
    assert_eq!(users.columns.len(), 4);
    assert_eq!(users.primary_key, None);
    assert_eq!(users.indexes, None);
}

#[tokio::test]
async fn test_invalidate_forces_refetch() {
    let (catalog, cache) = cache_over(MockCatalogBuilder::new().with_standard_schema().build());

    let first = cache.get_schema().await;
    cache.invalidate();
    let second = cache.get_schema().await;

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(catalog.calls(Endpoint::ListDatabases), 2);
}

#[tokio::test(start_paused = true)]
async fn test_invalidate_during_fetch_skips_publish() {
    let (catalog, cache) = cache_over(
        MockCatalogBuilder::new()
            .with_standard_schema()
            .with_latency(LATENCY)
            .build(),
    );

    let (schema, _) = tokio::join!(cache.get_schema(), async {
        tokio::time::sleep(LATENCY / 2).await;
        cache.invalidate();
    });

    // the waiting caller still receives the fetched data
    assert!(!schema.is_empty());

    cache.get_schema().await;
    assert_eq!(catalog.calls(Endpoint::ListDatabases), 2);
}

#[tokio::test(start_paused = true)]
async fn test_dispose_discards_in_flight_result() {
    init_tracing();
    let (catalog, cache) = cache_over(
        MockCatalogBuilder::new()
            .with_standard_schema()
            .with_latency(LATENCY)
            .build(),
    );

    let (schema, _) = tokio::join!(cache.get_schema(), async {
        tokio::time::sleep(LATENCY / 2).await;
        cache.dispose();
    });

    assert!(schema.is_empty());
    assert!(cache.is_disposed());
    assert!(cache.get_schema().await.is_empty());
    assert_eq!(catalog.calls(Endpoint::ListDatabases), 1);
}
