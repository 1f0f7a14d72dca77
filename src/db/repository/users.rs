//! Repository for players

use anyhow::{Context, Result};
use sqlx::SqlitePool;

use crate::db::models::DbUser;

/// Fields of a player that passed validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub nickname: String,
    pub age: Option<i64>,
}

pub async fn insert(pool: &SqlitePool, user: &NewUser) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO users (first_name, last_name, email, nickname, age)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.email)
    .bind(&user.nickname)
    .bind(user.age)
    .execute(pool)
    .await
    .with_context(|| format!("Failed to insert player '{}'", user.nickname))?;

    log::info!("Saved player: {}", user.nickname);
    Ok(result.last_insert_rowid())
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<DbUser>> {
    sqlx::query_as(
        "SELECT id, first_name, last_name, email, nickname, age FROM users WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .with_context(|| format!("Failed to get player {}", id))
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<DbUser>> {
    sqlx::query_as(
        "SELECT id, first_name, last_name, email, nickname, age FROM users ORDER BY id",
    )
    .fetch_all(pool)
    .await
    .context("Failed to list players")
}

/// Players whose id is not in `excluded`
pub async fn list_excluding(pool: &SqlitePool, excluded: &[i64]) -> Result<Vec<DbUser>> {
    let users = list(pool).await?;
    Ok(users
        .into_iter()
        .filter(|user| !excluded.contains(&user.id))
        .collect())
}

pub async fn count(pool: &SqlitePool) -> Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .context("Failed to count players")
}

/// Delete a player with their results and moves; `false` when no such player exists
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .with_context(|| format!("Failed to delete player {}", id))?;

    let deleted = result.rows_affected() > 0;
    if deleted {
        log::info!("Deleted player {}", id);
    }
    Ok(deleted)
}
