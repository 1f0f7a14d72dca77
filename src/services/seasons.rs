//! League season flows

use anyhow::Result;
use sqlx::SqlitePool;
use std::io::Write;

use crate::db::models::DbLeagueSeason;
use crate::db::repository::seasons;
use crate::ui::Console;

pub async fn create_season(pool: &SqlitePool, console: &mut Console) -> Result<DbLeagueSeason> {
    let name = console.prompt("Enter new league season name:")?;
    let name = name.trim().to_string();
    let id = seasons::insert(pool, &name).await?;
    writeln!(console, "\n        New league season {} was created.", name)?;
    Ok(DbLeagueSeason { id, name: Some(name) })
}

/// Latest season, asking the user to create one while there is none
pub async fn ensure_season(pool: &SqlitePool, console: &mut Console) -> Result<DbLeagueSeason> {
    if let Some(season) = seasons::latest(pool).await? {
        return Ok(season);
    }
    console.notice(
        "You don't have any league season. You need to create one before start the game",
    )?;
    create_season(pool, console).await
}
