//! Configuration management for the summoners book.
//!
//! Settings are read from environment variables, with an optional `.env`
//! file loaded first. Nothing here touches stdout.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default location of the book's data file.
pub const DEFAULT_DATA_FILE: &str = "data/summonersbook.json";

/// Configuration for the summoners book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON data file (default: `data/summonersbook.json`)
    pub data_file_path: PathBuf,

    /// Fuzzy match confidence threshold (0-100, default: 30)
    pub match_confidence_threshold: u8,

    /// Log level used when `RUST_LOG` is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `SUMMONERS_BOOK_DATA_FILE`: Path of the data file
    /// - `MATCH_CONFIDENCE_THRESHOLD`: Min fuzzy confidence score (default: 30)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() does not print to stdout
        let _ = dotenvy::dotenv();

        let data_file_path = match env::var("SUMMONERS_BOOK_DATA_FILE") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "SUMMONERS_BOOK_DATA_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => PathBuf::from(DEFAULT_DATA_FILE),
        };

        let match_confidence_threshold = Self::parse_env_u8("MATCH_CONFIDENCE_THRESHOLD", 30)?;
        if match_confidence_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                var: "MATCH_CONFIDENCE_THRESHOLD".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            data_file_path,
            match_confidence_threshold,
            log_level,
        })
    }

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-100, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file_path: PathBuf::from(DEFAULT_DATA_FILE),
            match_confidence_threshold: 30,
            log_level: "info".to_string(),
        }
    }
}
