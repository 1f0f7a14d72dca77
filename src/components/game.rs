use anyhow::Result;
use async_trait::async_trait;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sqlx::SqlitePool;

use crate::menu::{DispatchError, OperationGroup, Request, Response};
use crate::services::game::{self, REQUIRED_PLAYERS};
use crate::services::{players, seasons};

pub const ID: &str = "game";

pub struct Game {
    pool: SqlitePool,
}

impl Game {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OperationGroup for Game {
    fn id(&self) -> &'static str {
        ID
    }

    fn operations(&self) -> &'static [&'static str] {
        &["start_game"]
    }

    async fn invoke(&self, operation: &str, request: Request<'_>) -> Result<Response> {
        if operation != "start_game" {
            return Err(DispatchError::method_not_found(ID, operation).into());
        }

        let console = request.console;
        let mut rng = StdRng::from_entropy();
        let season = seasons::ensure_season(&self.pool, console).await?;
        players::ensure_players(&self.pool, console, REQUIRED_PLAYERS, &mut rng).await?;

        let report = game::play(&self.pool, console, &season, &mut rng).await?;
        info!(
            "Game {} finished after {} moves, winner: {:?}",
            report.game_id,
            report.moves,
            report.winner.as_ref().map(|user| user.nickname.as_str())
        );
        Ok(Response::empty())
    }
}
