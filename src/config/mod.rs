use crate::constants::{DEFAULT_STANDINGS_CACHE_SIZE, env_vars, paths::LOG_FILE};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// How the binary prints plans and tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::config_error(format!(
                "Unknown output format '{other}', expected 'text' or 'json'"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Number of standings tables kept by the season coordinator.
    #[serde(default = "default_standings_cache_size")]
    pub standings_cache_size: usize,
    /// Default output format when `--json` is not given.
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_standings_cache_size() -> usize {
    DEFAULT_STANDINGS_CACHE_SIZE
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_file_path: None,
            standings_cache_size: default_standings_cache_size(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing config file yields the defaults.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `LEAGUE_PLANNER_LOG_FILE` - Override log file path
    /// - `LEAGUE_PLANNER_CACHE_SIZE` - Override standings cache size
    /// - `LEAGUE_PLANNER_OUTPUT` - Override output format (`text` or `json`)
    pub async fn load() -> Result<Self, AppError> {
        let mut config = Self::load_stored().await?;
        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Loads the stored configuration for editing: file values only, without
    /// env overrides, so saving it back never persists an override. A missing
    /// file yields the defaults; a malformed file is an error.
    pub async fn load_stored() -> Result<Self, AppError> {
        Self::load_stored_from_path(&get_config_path()).await
    }

    pub async fn load_stored_from_path(path: &str) -> Result<Self, AppError> {
        if Path::new(path).exists() {
            Self::load_from_path(path).await
        } else {
            Ok(Config::default())
        }
    }

    /// Applies environment variable overrides on top of file values
    pub fn apply_env_overrides(&mut self) -> Result<(), AppError> {
        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Ok(size) = std::env::var(env_vars::CACHE_SIZE) {
            self.standings_cache_size = size.trim().parse::<usize>().map_err(|e| {
                AppError::config_error(format!(
                    "Invalid {} '{size}': {e}",
                    env_vars::CACHE_SIZE
                ))
            })?;
        }

        if let Ok(output) = std::env::var(env_vars::OUTPUT) {
            self.output_format = output.parse()?;
        }

        Ok(())
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self.standings_cache_size, &self.log_file_path)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("Standings Cache Size:");
            println!("{} tables", config.standings_cache_size);
            println!("────────────────────────────────────");
            println!("Output Format:");
            println!("{}", config.output_format);
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/{LOG_FILE}");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path, creating the parent
    /// directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
