// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! End-to-end completion tests: buffer + cursor in, ranked list out

use std::sync::Arc;
use std::time::Duration;

use sql_complete_catalog::{Catalog, CatalogError, SchemaCache};
use sql_complete_ir::{CompletionItem, CompletionItemKind, Dialect, Position, Range};
use sql_complete_provider::{
    CompletionProvider, ConfigError, EngineConfig, create_provider, provider_from_config,
};
use sql_complete_test_utils::{
    CompletionAssertions as A, Endpoint, MockCatalog, MockCatalogBuilder, SqlFixtures,
    split_cursor,
};

fn provider(dialect: &str, catalog: MockCatalog, current_database: Option<&str>) -> CompletionProvider {
    let cache = Arc::new(SchemaCache::new("test", Arc::new(catalog)));
    create_provider(dialect, cache)
        .unwrap()
        .with_current_database(current_database.map(str::to_string))
}

async fn complete_with(provider: &CompletionProvider, fixture: &str) -> Vec<CompletionItem> {
    let (text, position) = split_cursor(fixture);
    provider
        .provide_completion_items(text.as_str(), position)
        .await
        .suggestions
}

async fn complete(fixture: &str) -> Vec<CompletionItem> {
    let provider = provider(
        "mysql",
        MockCatalogBuilder::new().with_standard_schema().build(),
        Some("app"),
    );
    complete_with(&provider, fixture).await
}

#[tokio::test]
async fn test_alias_member_completion() {
    let items = complete(SqlFixtures::alias_member()).await;

    assert_eq!(
        A::labels(&items),
        vec!["u.created_at", "u.email", "u.id", "u.name"]
    );
    let id = A::item(&items, "u.id");
    assert_eq!(id.insert_text, "`u`.`id`");
    assert_eq!(id.sort_text, "6u.id");
    assert_eq!(id.detail.as_deref(), Some("bigint NOT NULL PRIMARY KEY"));
    assert_eq!(
        id.range,
        Some(Range::new(Position::new(1, 29), Position::new(1, 31)))
    );
}

#[tokio::test]
async fn test_table_completion_after_from() {
    let items = complete(SqlFixtures::after_from()).await;

    assert_eq!(
        A::labels(&items),
        vec!["events", "orders", "products", "users", "analytics.events"]
    );
    A::assert_all_kind(&items, CompletionItemKind::Class);
    assert_eq!(A::item(&items, "analytics.events").insert_text, "`analytics`.`events`");
    assert!(items.iter().all(|i| i.range.is_none()));
}

#[tokio::test]
async fn test_tables_qualified_without_current_database() {
    let provider = provider(
        "mysql",
        MockCatalogBuilder::new().with_standard_schema().build(),
        None,
    );
    let items = complete_with(&provider, SqlFixtures::after_from()).await;

    A::assert_contains(&items, &["users", "app.users", "analytics.events"]);
    assert_eq!(A::item(&items, "app.users").sort_text, "2app.users");
}

#[tokio::test]
async fn test_partial_table_name_is_filtered_and_ranged() {
    let items = complete(SqlFixtures::partial_table()).await;

    assert_eq!(A::labels(&items), vec!["users"]);
    assert_eq!(
        items[0].range,
        Some(Range::new(Position::new(1, 15), Position::new(1, 17)))
    );
}

#[tokio::test]
async fn test_prefix_filter_property() {
    let items = complete("us|").await;

    assert!(!items.is_empty());
    A::assert_prefix(&items, "us");
    A::assert_contains(&items, &["users", "USE"]);
}

#[tokio::test]
async fn test_empty_word_returns_full_sorted_list() {
    let items = complete(SqlFixtures::statement_start()).await;

    A::assert_sorted(&items);
    A::assert_unique_labels(&items);
    A::assert_contains(&items, &["SELECT", "STRAIGHT_JOIN", "users", "COUNT", "GROUP_CONCAT"]);
    assert_eq!(items[0].kind, CompletionItemKind::Keyword);
    assert_eq!(items.last().map(|i| i.sort_text.as_bytes()[0]), Some(b'7'));
}

#[tokio::test]
async fn test_function_context_offers_functions_only() {
    let items = complete(SqlFixtures::function_call()).await;

    A::assert_all_kind(&items, CompletionItemKind::Function);
    A::assert_contains(&items, &["COUNT", "COALESCE", "CAST", "GROUP_CONCAT", "IFNULL"]);
    A::assert_excludes(&items, &["STRING_AGG", "users"]);
    assert_eq!(A::item(&items, "GROUP_CONCAT").sort_text, "7GROUP_CONCAT");
}

#[tokio::test]
async fn test_clause_keywords_after_projection() {
    let items = complete(SqlFixtures::after_projection()).await;

    A::assert_all_kind(&items, CompletionItemKind::Keyword);
    A::assert_contains(&items, &["FROM", "WHERE", "ORDER BY", "LIMIT"]);
    A::assert_excludes(&items, &["INSERT", "users"]);
}

#[tokio::test]
async fn test_projection_offers_wildcard_and_functions() {
    let items = complete(SqlFixtures::projection()).await;

    assert_eq!(A::item(&items, "*").kind, CompletionItemKind::Operator);
    A::assert_contains(&items, &["COUNT"]);
    // nothing is in scope before FROM
    A::assert_excludes(&items, &["users"]);
}

#[tokio::test]
async fn test_join_target_and_condition() {
    let target = complete(SqlFixtures::join_target()).await;
    A::assert_all_kind(&target, CompletionItemKind::Class);
    A::assert_contains(&target, &["orders"]);

    let condition = complete(SqlFixtures::join_condition()).await;
    A::assert_contains(&condition, &["user_id", "o.user_id", "u.id", "orders.total", "COUNT"]);
}

#[tokio::test]
async fn test_columns_across_joined_tables_are_unique() {
    let items = complete(
        "SELECT * FROM users u JOIN orders o ON u.id = o.user_id WHERE |",
    )
    .await;

    A::assert_unique_labels(&items);
    assert_eq!(items.iter().filter(|i| i.label == "id").count(), 1);
    A::assert_contains(
        &items,
        &["id", "email", "status", "users.email", "orders.status", "u.name", "o.total"],
    );
    assert_eq!(A::item(&items, "users.email").sort_text, "5users.email");
    assert_eq!(A::item(&items, "o.total").sort_text, "6o.total");
}

#[tokio::test]
async fn test_group_by_offers_columns() {
    let items = complete(SqlFixtures::group_by()).await;
    A::assert_contains(&items, &["status", "orders.status", "total"]);
}

#[tokio::test]
async fn test_qualified_table_reference_resolves() {
    let items = complete("SELECT * FROM analytics.events WHERE |").await;
    A::assert_contains(&items, &["kind", "analytics.events.kind"]);
    assert_eq!(
        A::item(&items, "analytics.events.kind").insert_text,
        "`analytics`.`events`.`kind`"
    );
}

#[tokio::test]
async fn test_unknown_table_in_scope_yields_no_columns() {
    let items = complete("SELECT * FROM missing m WHERE |").await;
    assert!(items.iter().all(|i| i.kind != CompletionItemKind::Field));
    A::assert_contains(&items, &["COUNT"]);
}

// Heuristic boundary: FROM anywhere earlier in the buffer turns a later
// projection into a column context instead of offering clause keywords.
#[tokio::test]
async fn test_select_complete_heuristic_spans_statements() {
    let items = complete("SELECT id FROM users;\nSELECT name |").await;
    assert!(items.iter().all(|i| i.kind != CompletionItemKind::Keyword));
}

// Heuristic boundary: subquery tables share one flat alias map.
#[tokio::test]
async fn test_subquery_aliases_are_flat() {
    let items = complete("SELECT * FROM (SELECT * FROM orders o) x WHERE o.|").await;
    A::assert_contains(&items, &["o.total", "o.status"]);
}

#[tokio::test]
async fn test_metadata_failure_degrades_to_keywords_and_functions() {
    let catalog = MockCatalogBuilder::new()
        .with_standard_schema()
        .failing(
            Endpoint::ListDatabases,
            CatalogError::ConnectionFailed("connection refused".to_string()),
        )
        .build();
    let provider = provider("mysql", catalog, Some("app"));

    let start = complete_with(&provider, "|").await;
    A::assert_contains(&start, &["SELECT", "COUNT"]);
    assert!(start.iter().all(|i| i.kind != CompletionItemKind::Class));

    let columns = complete_with(&provider, SqlFixtures::alias_member()).await;
    assert!(columns.is_empty());

    let from = complete_with(&provider, SqlFixtures::after_from()).await;
    assert!(from.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_requests_share_schema_fetch() {
    let catalog = Arc::new(
        MockCatalogBuilder::new()
            .with_standard_schema()
            .with_latency(Duration::from_millis(50))
            .build(),
    );
    let cache = Arc::new(SchemaCache::new("test", catalog.clone() as Arc<dyn Catalog>));
    let provider = create_provider("mysql", cache).unwrap();

    let (first, second) = tokio::join!(
        complete_with(&provider, SqlFixtures::after_from()),
        complete_with(&provider, SqlFixtures::alias_member()),
    );

    assert!(!first.is_empty() && !second.is_empty());
    assert_eq!(catalog.calls(Endpoint::ListDatabases), 1);
    assert_eq!(catalog.calls(Endpoint::ListTables), 2);
}

#[tokio::test]
async fn test_unsupported_database_type_fails_fast() {
    let cache = Arc::new(SchemaCache::new(
        "test",
        Arc::new(MockCatalogBuilder::new().build()),
    ));
    let err = create_provider("db2", cache).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedDialect(_)));
    assert_eq!(err.to_string(), "unsupported database type: db2");
}

#[tokio::test]
async fn test_max_items_from_config() {
    let cache = Arc::new(SchemaCache::new(
        "test",
        Arc::new(MockCatalogBuilder::new().with_standard_schema().build()),
    ));
    let config = EngineConfig::new(Dialect::MySQL, "test")
        .with_current_database("app")
        .with_max_items(2);
    let provider = provider_from_config(&config, cache).unwrap();

    let items = complete_with(&provider, SqlFixtures::after_from()).await;
    assert_eq!(A::labels(&items), vec!["events", "orders"]);
}

#[tokio::test]
async fn test_string_buffer_model() {
    let provider = provider(
        "sqlite",
        MockCatalogBuilder::new().with_sqlite_schema().build(),
        Some("main"),
    );
    let buffer = String::from("SELECT * FROM ");
    let list = provider
        .provide_completion_items(&buffer, Position::new(1, 15))
        .await;
    assert_eq!(A::labels(&list.suggestions), vec!["orders", "users"]);
}
