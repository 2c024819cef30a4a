//! Error types for the Contacts MCP Server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The similarity filter itself is total and has no error type.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when loading, filtering, or calling contacts.
#[derive(Error, Debug)]
pub enum ContactError {
    /// The contact store could not be read
    #[error("Contact store unavailable: {0}")]
    Store(String),

    /// The contact export is not valid JSON
    #[error("Contact export parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A list position outside the current view was requested
    #[error("Position {position} is out of range for a list of {len} contacts")]
    PositionOutOfRange { position: usize, len: usize },

    /// The selected contact has no dialable number
    #[error("Contact cannot be called: {0}")]
    InvalidPhone(#[from] ValidationError),

    /// The dial handler failed
    #[error("Dial failed: {0}")]
    DialFailed(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
