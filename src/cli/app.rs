use super::commands::db::DbCommands;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tictac-league")]
#[command(about = "Tic-tac-toe league played from a terminal menu")]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the SQLite database, overrides the configured one
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    /// Keep previous screens instead of clearing the terminal
    #[arg(long, global = true)]
    pub no_clear: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the game menu (default)
    Play,
    /// Database maintenance
    Db(DbCommands),
}
