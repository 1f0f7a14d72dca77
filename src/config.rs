use anyhow::{Context, Result};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "tictac-league";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_clear_screen")]
    pub clear_screen: bool,
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn default_database_path() -> PathBuf {
    data_dir().join("league.db")
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictac-league.log")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_clear_screen() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            log_file: default_log_file(),
            log_level: default_log_level(),
            clear_screen: default_clear_screen(),
        }
    }
}

impl Settings {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join(APP_DIR)
        } else {
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(format!(".{}", APP_DIR))
        };
        Ok(config_dir.join("config.toml"))
    }

    /// Load from `path`, or the default location; missing files give defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::get_config_path()?,
        };
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    /// Apply command line overrides on top of the loaded file
    pub fn with_overrides(mut self, database: Option<PathBuf>, no_clear: bool) -> Self {
        if let Some(database) = database {
            self.database_path = database;
        }
        if no_clear {
            self.clear_screen = false;
        }
        self
    }
}
