use anyhow::{Context, Result};
use log::{info, warn};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::components;
use crate::config::Settings;
use crate::db;
use crate::menu::{Navigator, routes};
use crate::ui::Console;

/// Open the database, build the menu and navigate until input ends or Ctrl-C
pub async fn play_command(settings: &Settings) -> Result<()> {
    let pool = db::connect(&settings.database_path).await?;
    db::ensure_schema(&pool).await?;

    let registry = components::build_registry(&pool)?;
    let console = Console::stdio();
    let clear_screen = settings.clear_screen && console.is_interactive();
    let navigator =
        Navigator::new(registry, routes::main_menu(), console).with_screen_clearing(clear_screen);

    let navigation = spawn_navigation(navigator);
    let mut interrupted = false;
    let result = tokio::select! {
        joined = navigation => joined.context("Navigation task panicked")?,
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to listen for Ctrl-C")?;
            warn!("Interrupted, shutting down");
            println!("\n        Bye, see you next time!");
            interrupted = true;
            Ok(())
        }
    };

    db::close(&pool).await;
    info!("Menu closed");
    if interrupted {
        // The navigation thread may still be blocked reading stdin
        std::process::exit(0);
    }
    result
}

/// Run the navigator on the blocking pool; its console reads stdin synchronously
pub fn spawn_navigation(mut navigator: Navigator) -> JoinHandle<Result<()>> {
    let handle = Handle::current();
    tokio::task::spawn_blocking(move || handle.block_on(navigator.run()))
}
