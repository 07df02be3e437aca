// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Completion pipeline benchmarks
//!
//! Context parsing and suggestion ranking over a fixed in-memory schema.

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sql_complete_catalog::{SchemaCache, StaticCatalog};
use sql_complete_context::parse_context;
use sql_complete_ir::{ColumnInfo, DatabaseSchema, Position, TableInfo};
use sql_complete_provider::{CompletionProvider, create_provider};

const QUERIES: &[(&str, &str)] = &[
    ("statement_start", ""),
    ("after_from", "SELECT id FROM "),
    ("alias_member", "SELECT * FROM users u WHERE u."),
    (
        "join_where",
        "SELECT u.id, o.total\nFROM users u\nJOIN orders o ON u.id = o.user_id\nWHERE ",
    ),
    ("function_call", "SELECT COUNT("),
];

fn end_position(sql: &str) -> Position {
    let line = sql.split('\n').count() as u32;
    let column = sql.rsplit('\n').next().map_or(0, |l| l.chars().count()) as u32 + 1;
    Position::new(line, column)
}

fn schema(table_count: usize) -> DatabaseSchema {
    let mut tables = vec![
        TableInfo::new("app", "users").with_columns(vec![
            ColumnInfo::new("id", "bigint"),
            ColumnInfo::new("email", "varchar(255)"),
            ColumnInfo::new("name", "varchar(100)").with_nullable(true),
        ]),
        TableInfo::new("app", "orders").with_columns(vec![
            ColumnInfo::new("id", "bigint"),
            ColumnInfo::new("user_id", "bigint"),
            ColumnInfo::new("total", "decimal(10,2)"),
        ]),
    ];
    tables.extend((0..table_count).map(|i| {
        TableInfo::new("app", format!("table_{i}"))
            .with_columns((0..10).map(|c| ColumnInfo::new(format!("col_{c}"), "int")).collect())
    }));
    DatabaseSchema::from_parts(["app".to_string()], tables)
}

fn provider() -> CompletionProvider {
    let cache = Arc::new(SchemaCache::new("bench", Arc::new(StaticCatalog::default())));
    create_provider("mysql", cache)
        .expect("mysql is supported")
        .with_current_database(Some("app".to_string()))
}

fn bench_parse_context(c: &mut Criterion) {
    let mut group = c.benchmark_group("completion/parse_context");
    for (name, sql) in QUERIES {
        let position = end_position(sql);
        group.bench_with_input(BenchmarkId::from_parameter(name), sql, |b, sql| {
            b.iter(|| black_box(parse_context(black_box(sql), position)));
        });
    }
    group.finish();
}

fn bench_suggest(c: &mut Criterion) {
    let provider = provider();
    let mut group = c.benchmark_group("completion/suggest");

    for table_count in [10, 100, 1000] {
        let schema = schema(table_count);
        for (name, sql) in QUERIES {
            let context = parse_context(sql, end_position(sql));
            group.bench_with_input(
                BenchmarkId::new(*name, table_count),
                &context,
                |b, context| {
                    b.iter(|| black_box(provider.suggest(context, &schema)));
                },
            );
        }
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(50);
    targets = bench_parse_context, bench_suggest
);

criterion_main!(benches);
