//! Serene - console wellness companion
//!
//! A small interactive program for account check-in, mood journaling,
//! motivational quotes and guided breathing, backed by flat text stores.

use std::path::PathBuf;

use thiserror::Error;

pub mod config;
pub mod credentials;
pub mod exercise;
pub mod journal;
pub mod models;
pub mod quotes;
pub mod session;
pub mod store;

// Common error types
#[derive(Debug, Error)]
pub enum SereneError {
    /// Console or other I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A backing store could not be opened for reading or writing
    #[error("Store unavailable at {}: {source}", .path.display())]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Configuration validation or parsing error
    #[error("Configuration error: {0}")]
    Config(String),
    /// Input rejected before reaching a store
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<toml::de::Error> for SereneError {
    fn from(err: toml::de::Error) -> Self {
        SereneError::Config(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for SereneError {
    fn from(err: toml::ser::Error) -> Self {
        SereneError::Config(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for Serene operations
pub type Result<T> = std::result::Result<T, SereneError>;

/// Error handling utilities
pub mod error {
    use super::SereneError;

    /// Whether the error means a store could not be reached. The session
    /// reports these and keeps going.
    pub fn is_store_error(error: &SereneError) -> bool {
        matches!(error, SereneError::StoreUnavailable { .. })
    }

    /// Convert error to a message suitable for the console
    pub fn user_friendly_message(error: &SereneError) -> String {
        match error {
            SereneError::StoreUnavailable { path, source } => match source.kind() {
                std::io::ErrorKind::PermissionDenied => format!(
                    "Error: could not open {} (permission denied). Check file permissions.",
                    path.display()
                ),
                _ => format!("Error: could not open {}.", path.display()),
            },
            SereneError::Config(msg) => {
                format!("Configuration error: {}. Using default settings.", msg)
            }
            SereneError::InvalidInput(msg) => format!("Invalid input: {}", msg),
            SereneError::Io(err) => format!("Error: {}", err),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "serene";
pub const CONFIG_FILE: &str = "serene.toml";
pub const USERS_FILE: &str = "users.txt";
pub const MOODS_FILE: &str = "moods.txt";
pub const QUOTES_FILE: &str = "quotes.txt";
