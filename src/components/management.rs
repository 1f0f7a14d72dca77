//! Player and league season management screens

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sqlx::SqlitePool;
use std::io::Write;

use crate::db::repository::users;
use crate::menu::{DispatchError, OperationGroup, OperationRef, Request, Response};
use crate::services::{players, seasons};

pub const ID: &str = "management";

pub const PLAYER_DETAILS: OperationRef = OperationRef::new(ID, "player_details");
pub const PLAYER_DELETE_CONFIRMATION: OperationRef =
    OperationRef::new(ID, "player_delete_confirmation");

const OPERATIONS: &[&str] = &[
    "player_list",
    "player_details",
    "player_create",
    "player_delete",
    "player_delete_confirmation",
    "new_league_season",
];

pub struct Management {
    pool: SqlitePool,
}

impl Management {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OperationGroup for Management {
    fn id(&self) -> &'static str {
        ID
    }

    fn operations(&self) -> &'static [&'static str] {
        OPERATIONS
    }

    async fn invoke(&self, operation: &str, request: Request<'_>) -> Result<Response> {
        let Request {
            parent,
            args,
            console,
            ..
        } = request;

        match operation {
            "player_list" => {
                writeln!(console, "\n        Choose the player to see the details:")?;
                let items = players::player_menu(&self.pool, parent, PLAYER_DETAILS).await?;
                Ok(Response::submenu(items))
            }
            "player_details" => {
                let user_id = args.require_i64("user_id")?;
                match users::get(&self.pool, user_id).await? {
                    Some(user) => players::show_player_details(&self.pool, console, &user).await?,
                    None => console.notice("This player does not exist anymore")?,
                }
                Ok(Response::empty())
            }
            "player_create" => {
                let mut rng = StdRng::from_entropy();
                let user = players::create_player(&self.pool, console, &mut rng).await?;
                info!("Created player {} ({})", user.nickname, user.id);
                Ok(Response::empty())
            }
            "player_delete" => {
                writeln!(console, "\n        Choose the player to delete:")?;
                let items =
                    players::player_menu(&self.pool, parent, PLAYER_DELETE_CONFIRMATION).await?;
                Ok(Response::submenu(items))
            }
            "player_delete_confirmation" => {
                let user_id = args.require_i64("user_id")?;
                let Some(user) = users::get(&self.pool, user_id).await? else {
                    console.notice("This player does not exist anymore")?;
                    return Ok(Response::empty());
                };

                let question = format!(
                    "Are you sure you want to delete {}? All of their games will be removed too.",
                    user.nickname
                );
                if console.confirm(&question)? {
                    let deleted = users::delete(&self.pool, user.id)
                        .await
                        .with_context(|| format!("Failed to delete player {}", user.nickname))?;
                    if deleted {
                        writeln!(console, "\n        Player {} was deleted.", user.nickname)?;
                    } else {
                        warn!("Player {} vanished before deletion", user.id);
                    }
                } else {
                    writeln!(console, "\n        Deletion cancelled.")?;
                }
                Ok(Response::empty())
            }
            "new_league_season" => {
                seasons::create_season(&self.pool, console).await?;
                Ok(Response::empty())
            }
            other => Err(DispatchError::method_not_found(ID, other).into()),
        }
    }
}
