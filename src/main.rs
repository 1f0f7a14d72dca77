use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use tictac_league::cli::{Cli, Commands, commands};
use tictac_league::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings =
        Settings::load(cli.config.as_deref())?.with_overrides(cli.database.clone(), cli.no_clear);

    // Initialize logger to file (truncate on each run), stdout belongs to the menu
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&settings.log_file)
        .with_context(|| format!("Failed to open log file: {:?}", settings.log_file))?;
    env_logger::Builder::new()
        .parse_filters(&settings.log_level)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    info!("Starting tictac-league");

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => commands::play_command(&settings).await?,
        Commands::Db(db_args) => commands::db_command(db_args, &settings).await?,
    }

    Ok(())
}
