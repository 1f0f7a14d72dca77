/// The real menu tree and operation groups, driven through scripted consoles
pub mod game;
pub mod statistics;

use sqlx::SqlitePool;
use tictac_league::db::repository::users::{self, NewUser};

pub async fn add_player(pool: &SqlitePool, nickname: &str) -> i64 {
    users::insert(
        pool,
        &NewUser {
            nickname: nickname.to_string(),
            ..NewUser::default()
        },
    )
    .await
    .unwrap()
}
