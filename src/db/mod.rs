//! SQLite persistence for players, seasons and games

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::path::Path;

pub mod models;
pub mod repository;
pub mod schema;

/// Connect to the league database, creating the file if needed
pub async fn connect(db_path: &Path) -> Result<SqlitePool> {
    if let Some(dir) = db_path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create database directory: {:?}", dir))?;
            log::info!("Created database directory: {:?}", dir);
        }
    }

    let database_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let pool = SqlitePool::connect(&database_url)
        .await
        .with_context(|| format!("Failed to connect to database: {}", db_path.display()))?;

    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(&pool)
        .await
        .context("Failed to enable WAL mode")?;

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .context("Failed to enable foreign keys")?;

    log::debug!("Connected to SQLite database: {}", db_path.display());
    Ok(pool)
}

/// Connect to a private in-memory database.
///
/// The pool is capped at one connection that never expires, otherwise every new
/// connection would see its own empty database.
pub async fn connect_memory() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .context("Failed to connect to in-memory database")?;

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .context("Failed to enable foreign keys")?;

    log::debug!("Connected to in-memory SQLite database");
    Ok(pool)
}

/// Create or verify the league tables
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    let record = schema::ensure(pool).await?;
    log::debug!("Using schema {} created at {}", record.version, record.created_at);
    Ok(())
}

/// In-memory database with the full schema, used by tests
pub async fn connect_test() -> Result<SqlitePool> {
    let pool = connect_memory().await?;
    ensure_schema(&pool).await?;
    Ok(pool)
}

/// Release every connection; the single cleanup step on shutdown
pub async fn close(pool: &SqlitePool) {
    if !pool.is_closed() {
        pool.close().await;
        log::info!("Database connections closed");
    }
}

/// Get database info for the `db info` command
pub async fn get_db_info(pool: &SqlitePool) -> Result<DatabaseInfo> {
    let version: String = sqlx::query_scalar("SELECT sqlite_version()")
        .fetch_one(pool)
        .await
        .context("Failed to get SQLite version")?;

    let recorded = schema::recorded(pool).await?;

    let table_count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
    )
    .fetch_one(pool)
    .await
    .context("Failed to get table count")?;

    let journal_mode: String = sqlx::query_scalar("PRAGMA journal_mode")
        .fetch_one(pool)
        .await
        .context("Failed to get journal mode")?;

    let player_count = repository::users::count(pool).await?;
    let season_count = repository::seasons::count(pool).await?;
    let game_count = repository::games::count(pool).await?;

    Ok(DatabaseInfo {
        sqlite_version: version,
        schema_version: recorded.as_ref().map(|record| record.version),
        schema_created_at: recorded.map(|record| record.created_at),
        table_count,
        journal_mode,
        player_count,
        season_count,
        game_count,
    })
}

#[derive(Debug)]
pub struct DatabaseInfo {
    pub sqlite_version: String,
    pub schema_version: Option<i64>,
    pub schema_created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub table_count: i64,
    pub journal_mode: String,
    pub player_count: i64,
    pub season_count: i64,
    pub game_count: i64,
}
