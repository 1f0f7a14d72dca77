//! Operation groups wired into the menu

pub mod game;
pub mod main_menu;
pub mod management;
pub mod utility;

use anyhow::Result;
use sqlx::SqlitePool;

use crate::menu::Registry;

/// Construct every group once and register it
pub fn build_registry(pool: &SqlitePool) -> Result<Registry> {
    let mut registry = Registry::new();
    registry.register(Box::new(main_menu::MainMenu::new(pool.clone())))?;
    registry.register(Box::new(management::Management::new(pool.clone())))?;
    registry.register(Box::new(game::Game::new(pool.clone())))?;
    registry.register(Box::new(utility::Utility))?;
    log::debug!("Registered {} components", registry.len());
    Ok(registry)
}
