//! # Configuration
//!
//! Optional TOML file selecting the output format and the walkthrough inputs.
//! Every key has a default, so an empty file and no file at all behave the
//! same. CLI flags are applied on top by the caller.
//!
//! ```toml
//! [output]
//! format = "json"
//! banner = false
//!
//! [walkthrough]
//! success_value = "SUCCESS"
//! ```

use crate::AppError;
use crate::walkthrough::WalkthroughInputs;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maximum config file size (1 MB).
///
/// Anything larger is not a hand-written config file.
const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

// =============================================================================
// OUTPUT
// =============================================================================

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `LABEL: rendered` lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// `[output]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub banner: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            banner: true,
        }
    }
}

// =============================================================================
// APP CONFIG
// =============================================================================

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub walkthrough: WalkthroughInputs,
}

impl AppConfig {
    /// Load from `path`, or fall back to defaults when no path is given.
    pub fn resolve(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Load and parse a config file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let shown = path.display().to_string();

        let metadata = std::fs::metadata(path).map_err(|e| AppError::ConfigRead {
            path: shown.clone(),
            reason: e.to_string(),
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(AppError::ConfigRead {
                path: shown,
                reason: format!(
                    "file size {} bytes exceeds maximum allowed {} bytes",
                    metadata.len(),
                    MAX_CONFIG_FILE_SIZE
                ),
            });
        }

        let contents = std::fs::read_to_string(path).map_err(|e| AppError::ConfigRead {
            path: shown.clone(),
            reason: e.to_string(),
        })?;

        let config = Self::from_toml(&contents).map_err(|e| AppError::ConfigParse {
            path: shown.clone(),
            reason: e.to_string(),
        })?;

        tracing::debug!("Loaded config from {}", shown);
        Ok(config)
    }

    /// Parse config text.
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

// =============================================================================
// TESTS
// =============================================================================
