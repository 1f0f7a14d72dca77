//! Row types for the league database

use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DbUser {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub nickname: String,
    pub age: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DbLeagueSeason {
    pub id: i64,
    pub name: Option<String>,
}

impl DbLeagueSeason {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// One player's result in one game, joined with the player's nickname
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DbGameResult {
    pub game_id: i64,
    pub user_id: i64,
    pub nickname: String,
    pub symbol: String,
    /// `None` while the game is still running
    pub is_winner: Option<bool>,
}

impl DbGameResult {
    pub fn won(&self) -> bool {
        self.is_winner.unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DbGameUserDecision {
    pub id: i64,
    pub game_id: i64,
    pub user_id: i64,
    pub coordinate_x: i64,
    pub coordinate_y: i64,
}
