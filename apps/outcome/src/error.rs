//! # Application Errors
//!
//! Failures of the binary itself: reading configuration and rendering output.
//! A `Failure` produced by a walkthrough chain is NOT an `AppError`; it is a
//! value the commands print.

use thiserror::Error;

/// Errors that can stop an `outcome` command.
#[derive(Debug, Error)]
pub enum AppError {
    /// The configuration file could not be read.
    #[error("Cannot read config '{path}': {reason}")]
    ConfigRead { path: String, reason: String },

    /// The configuration file is not valid TOML for `AppConfig`.
    #[error("Invalid config '{path}': {reason}")]
    ConfigParse { path: String, reason: String },

    /// Output could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
