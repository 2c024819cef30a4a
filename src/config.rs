//! Configuration management for the Contacts MCP Server.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is honored if present; nothing is printed to stdout, which MCP
//! uses for communication.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the Contacts MCP Server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the address book export (JSON array of contacts)
    pub contacts_file: PathBuf,

    /// How long a loaded contact list is reused, in seconds (default: 300)
    pub cache_ttl_secs: u64,

    /// Program that receives `tel:` URIs; calls are only logged when unset
    pub dial_command: Option<String>,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `CONTACTS_FILE`: Path to the address book export
    ///
    /// Optional environment variables:
    /// - `CONTACTS_CACHE_TTL_SECONDS`: Contact list cache TTL (default: 300)
    /// - `DIAL_COMMAND`: Dial handler program, e.g. `xdg-open`
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let contacts_file = env::var("CONTACTS_FILE")
            .map_err(|_| ConfigError::MissingVar("CONTACTS_FILE".to_string()))?;

        if contacts_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_FILE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let cache_ttl_secs = Self::parse_env_u64("CONTACTS_CACHE_TTL_SECONDS", 300)?;

        let dial_command = env::var("DIAL_COMMAND")
            .ok()
            .map(|cmd| cmd.trim().to_string())
            .filter(|cmd| !cmd.is_empty());

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            contacts_file: PathBuf::from(contacts_file),
            cache_ttl_secs,
            dial_command,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contacts_file: PathBuf::from("contacts.json"),
            cache_ttl_secs: 300,
            dial_command: None,
            log_level: "error".to_string(),
        }
    }
}
