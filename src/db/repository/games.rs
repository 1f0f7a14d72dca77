//! Repository for games, their results and the moves made in them

use anyhow::{Context, Result};
use sqlx::SqlitePool;

use crate::db::models::{DbGameResult, DbGameUserDecision};

/// Create a game in `season_id` with one open result per `(user_id, symbol)`
pub async fn create(pool: &SqlitePool, season_id: i64, players: &[(i64, char)]) -> Result<i64> {
    let mut tx = pool.begin().await.context("Failed to start transaction")?;

    let game_id = sqlx::query("INSERT INTO games (league_season_id) VALUES (?)")
        .bind(season_id)
        .execute(&mut *tx)
        .await
        .context("Failed to create game")?
        .last_insert_rowid();

    for &(user_id, symbol) in players {
        sqlx::query("INSERT INTO game_results (game_id, user_id, symbol) VALUES (?, ?, ?)")
            .bind(game_id)
            .bind(user_id)
            .bind(symbol.to_string())
            .execute(&mut *tx)
            .await
            .with_context(|| format!("Failed to register player {} in game {}", user_id, game_id))?;
    }

    tx.commit().await.context("Failed to commit transaction")?;

    log::info!("Created game {} in season {}", game_id, season_id);
    Ok(game_id)
}

pub async fn record_decision(pool: &SqlitePool, game_id: i64, user_id: i64, x: usize, y: usize) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO game_user_decisions (game_id, user_id, coordinate_x, coordinate_y)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(game_id)
    .bind(user_id)
    .bind(x as i64)
    .bind(y as i64)
    .execute(pool)
    .await
    .with_context(|| format!("Failed to save move of player {} in game {}", user_id, game_id))?;

    Ok(())
}

/// Close a game; `None` records a draw
pub async fn finish(pool: &SqlitePool, game_id: i64, winner: Option<i64>) -> Result<()> {
    let mut tx = pool.begin().await.context("Failed to start transaction")?;

    sqlx::query("UPDATE game_results SET is_winner = 0 WHERE game_id = ?")
        .bind(game_id)
        .execute(&mut *tx)
        .await
        .with_context(|| format!("Failed to update results of game {}", game_id))?;

    if let Some(user_id) = winner {
        sqlx::query("UPDATE game_results SET is_winner = 1 WHERE game_id = ? AND user_id = ?")
            .bind(game_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .with_context(|| format!("Failed to record winner of game {}", game_id))?;
    }

    tx.commit().await.context("Failed to commit transaction")?;

    log::info!("Finished game {} (winner: {:?})", game_id, winner);
    Ok(())
}

/// Every result of every game in `season_id`, in game order
pub async fn season_results(pool: &SqlitePool, season_id: i64) -> Result<Vec<DbGameResult>> {
    sqlx::query_as(
        r#"
        SELECT r.game_id, r.user_id, u.nickname, r.symbol, r.is_winner
        FROM game_results r
        JOIN users u ON u.id = r.user_id
        JOIN games g ON g.id = r.game_id
        WHERE g.league_season_id = ?
        ORDER BY r.game_id, r.id
        "#,
    )
    .bind(season_id)
    .fetch_all(pool)
    .await
    .with_context(|| format!("Failed to load results of season {}", season_id))
}

pub async fn results(pool: &SqlitePool, game_id: i64) -> Result<Vec<DbGameResult>> {
    sqlx::query_as(
        r#"
        SELECT r.game_id, r.user_id, u.nickname, r.symbol, r.is_winner
        FROM game_results r
        JOIN users u ON u.id = r.user_id
        WHERE r.game_id = ?
        ORDER BY r.id
        "#,
    )
    .bind(game_id)
    .fetch_all(pool)
    .await
    .with_context(|| format!("Failed to load results of game {}", game_id))
}

pub async fn decisions(pool: &SqlitePool, game_id: i64) -> Result<Vec<DbGameUserDecision>> {
    sqlx::query_as(
        r#"
        SELECT id, game_id, user_id, coordinate_x, coordinate_y
        FROM game_user_decisions
        WHERE game_id = ?
        ORDER BY id
        "#,
    )
    .bind(game_id)
    .fetch_all(pool)
    .await
    .with_context(|| format!("Failed to load moves of game {}", game_id))
}

pub async fn count(pool: &SqlitePool) -> Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM games")
        .fetch_one(pool)
        .await
        .context("Failed to count games")
}
