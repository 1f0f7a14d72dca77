use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use log::info;
use sqlx::SqlitePool;

use crate::config::Settings;
use crate::db::{self, schema};
use crate::ui::prompts;

#[derive(Args)]
pub struct DbCommands {
    #[command(subcommand)]
    pub command: DbSubcommands,
}

#[derive(Subcommand)]
pub enum DbSubcommands {
    /// Show database location, schema version and row counts
    Info,
    /// Drop every table and create the schema again, deleting all data
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn db_command(args: DbCommands, settings: &Settings) -> Result<()> {
    let pool = db::connect(&settings.database_path).await?;
    let result = match args.command {
        DbSubcommands::Info => show_info(&pool, settings).await,
        DbSubcommands::Reset { yes } => reset(&pool, settings, yes).await,
    };
    db::close(&pool).await;
    result
}

async fn show_info(pool: &SqlitePool, settings: &Settings) -> Result<()> {
    db::ensure_schema(pool).await?;
    let info = db::get_db_info(pool).await?;

    println!("{}", "Database".bold());
    println!("  Path:           {}", settings.database_path.display());
    println!("  SQLite version: {}", info.sqlite_version);
    println!("  Journal mode:   {}", info.journal_mode);
    match (info.schema_version, info.schema_created_at) {
        (Some(version), Some(created_at)) => println!(
            "  Schema:         version {} created {}",
            version,
            created_at.format("%Y-%m-%d %H:%M:%S")
        ),
        _ => println!("  Schema:         {}", "not created".yellow()),
    }
    println!("  Tables:         {}", info.table_count);
    println!();
    println!("  Players:        {}", info.player_count);
    println!("  Seasons:        {}", info.season_count);
    println!("  Games:          {}", info.game_count);
    Ok(())
}

async fn reset(pool: &SqlitePool, settings: &Settings, yes: bool) -> Result<()> {
    let database = settings.database_path.display().to_string();
    if !yes && !prompts::prompt_reset_confirmation(&database)? {
        println!("{}", "Reset cancelled".yellow());
        return Ok(());
    }

    let record = schema::reset(pool).await?;

    info!("Database {} was reset to schema {}", database, record.version);
    println!("{} {}", "✓".green(), format!("Database {} was reset", database).green());
    Ok(())
}
