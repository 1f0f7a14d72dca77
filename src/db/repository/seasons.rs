//! Repository for league seasons

use anyhow::{Context, Result};
use sqlx::SqlitePool;

use crate::db::models::DbLeagueSeason;

pub async fn insert(pool: &SqlitePool, name: &str) -> Result<i64> {
    let result = sqlx::query("INSERT INTO league_seasons (name) VALUES (?)")
        .bind(name)
        .execute(pool)
        .await
        .with_context(|| format!("Failed to create league season '{}'", name))?;

    log::info!("Created league season: {}", name);
    Ok(result.last_insert_rowid())
}

/// The most recently created season, which all statistics refer to
pub async fn latest(pool: &SqlitePool) -> Result<Option<DbLeagueSeason>> {
    sqlx::query_as("SELECT id, name FROM league_seasons ORDER BY id DESC LIMIT 1")
        .fetch_optional(pool)
        .await
        .context("Failed to get the latest league season")
}

pub async fn count(pool: &SqlitePool) -> Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM league_seasons")
        .fetch_one(pool)
        .await
        .context("Failed to count league seasons")
}
