// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use sql_complete_catalog::{SchemaCache, StaticCatalog};
use sql_complete_ir::Position;
use sql_complete_provider::create_provider;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Print SQL completion suggestions for a cursor position as JSON
#[derive(Debug, Parser)]
#[command(name = "sql-complete", version, about)]
struct Args {
    /// Database type (mysql, mariadb, postgresql, sqlite)
    #[arg(long, default_value = "mysql")]
    dialect: String,

    /// Schema document (JSON or YAML)
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Current database of the session
    #[arg(long)]
    database: Option<String>,

    /// Cursor line (1-based); defaults to the end of the text
    #[arg(long)]
    line: Option<u32>,

    /// Cursor column (1-based); defaults to the end of the line
    #[arg(long)]
    column: Option<u32>,

    /// SQL text; read from stdin when absent
    #[arg(long)]
    sql: Option<String>,

    /// Maximum number of suggestions
    #[arg(long)]
    limit: Option<usize>,
}

fn end_position(text: &str) -> Position {
    let line = text.matches('\n').count() as u32 + 1;
    let last_line = text.rsplit('\n').next().unwrap_or_default();
    Position::new(line, last_line.chars().count() as u32 + 1)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    let args = Args::parse();

    let sql = match args.sql {
        Some(sql) => sql,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read SQL from stdin")?;
            buffer
        }
    };

    let catalog = match &args.schema {
        Some(path) => StaticCatalog::from_file(path)
            .with_context(|| format!("failed to load schema from {}", path.display()))?,
        None => StaticCatalog::default(),
    };

    let cache = Arc::new(SchemaCache::new("cli", Arc::new(catalog)));
    let provider = create_provider(&args.dialect, cache)?
        .with_current_database(args.database)
        .with_max_items(args.limit);

    let end = end_position(&sql);
    let line = args.line.unwrap_or(end.line);
    let column = match (args.line, args.column) {
        (_, Some(column)) => column,
        (None, None) => end.column,
        (Some(line), None) => {
            let text = sql.split('\n').nth(line.saturating_sub(1) as usize).unwrap_or_default();
            text.chars().count() as u32 + 1
        }
    };

    tracing::info!(dialect = %provider.dialect(), line, column, "completing");
    let list = provider
        .provide_completion_items(sql.as_str(), Position::new(line, column))
        .await;

    println!("{}", serde_json::to_string_pretty(&list)?);
    Ok(())
}
