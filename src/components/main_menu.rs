use anyhow::Result;
use async_trait::async_trait;
use log::info;
use sqlx::SqlitePool;
use std::io::Write;

use crate::db;
use crate::menu::{DispatchError, OperationGroup, Request, Response};
use crate::services::statistics;

pub const ID: &str = "main_menu";

const OPERATIONS: &[&str] = &[
    "welcome",
    "management",
    "ranking_table",
    "player_statistic",
    "exit_game",
];

pub struct MainMenu {
    pool: SqlitePool,
}

impl MainMenu {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OperationGroup for MainMenu {
    fn id(&self) -> &'static str {
        ID
    }

    fn operations(&self) -> &'static [&'static str] {
        OPERATIONS
    }

    async fn invoke(&self, operation: &str, request: Request<'_>) -> Result<Response> {
        let console = request.console;
        match operation {
            "welcome" => {
                writeln!(console, "\n        Greeting player. Choose the option:")?;
            }
            "management" => {
                writeln!(console, "\n        Management section. Choose the option:")?;
            }
            "ranking_table" => {
                writeln!(console, "\n        Ranking table:\n")?;
                statistics::show_ranking_table(&self.pool, console, None).await?;
            }
            "player_statistic" => {
                writeln!(console, "\n        Past games statistics:\n")?;
                statistics::show_past_games_statistic(&self.pool, console).await?;
            }
            "exit_game" => {
                writeln!(console, "\n        Bye, see you next time!\n")?;
                console.flush()?;
                info!("Exit requested from the menu");
                db::close(&self.pool).await;
                std::process::exit(0);
            }
            other => return Err(DispatchError::method_not_found(ID, other).into()),
        }
        Ok(Response::empty())
    }
}
