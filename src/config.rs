//! Configuration management for the rolodex.
//!
//! Configuration comes from environment variables, with a `.env` file loaded
//! first when present. Everything has a sensible default; the only lookup
//! that can fail outright is resolving a data directory on a platform that
//! has none.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;

/// Name of the backing file inside the default data directory.
const DATA_FILE_NAME: &str = "contacts.json";

/// Configuration for the rolodex.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON backing file
    pub data_path: PathBuf,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ROLODEX_DATA_PATH`: backing file path (default: the platform data
    ///   directory, e.g. `~/.local/share/rolodex/contacts.json`)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present, without failing when it isn't
        let _ = dotenvy::dotenv();

        let data_path = match env::var("ROLODEX_DATA_PATH") {
            Ok(raw) if raw.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ROLODEX_DATA_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                })
            }
            Ok(raw) => PathBuf::from(raw),
            Err(_) => Self::default_data_path()?,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            data_path,
            log_level,
        })
    }

    /// Platform-appropriate default location for the backing file.
    fn default_data_path() -> ConfigResult<PathBuf> {
        let dirs = ProjectDirs::from("", "", "rolodex").ok_or(ConfigError::NoDataDir)?;
        Ok(dirs.data_dir().join(DATA_FILE_NAME))
    }
}
