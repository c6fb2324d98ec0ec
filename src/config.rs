use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::version::compare::ComparisonMode;
use crate::version::error::ConfigError;

// =============================================================================
// Lookup-related constants
// =============================================================================

/// Timeout for a single lookup request in milliseconds (30 seconds)
pub const LOOKUP_TIMEOUT_MS: u64 = 30_000;

/// Store region segment of the lookup path
pub const LOOKUP_REGION: &str = "in";

/// User agent sent with lookup requests
pub const USER_AGENT: &str = concat!("app-version-check/", env!("CARGO_PKG_VERSION"));

/// Checker configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckerConfig {
    pub comparison: ComparisonMode,
    /// Lookup request timeout in milliseconds, must be non-zero
    pub timeout_ms: u64,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            comparison: ComparisonMode::default(),
            timeout_ms: LOOKUP_TIMEOUT_MS,
        }
    }
}

impl CheckerConfig {
    /// Load configuration from a JSON file, using defaults for missing fields
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "timeoutMs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// `$XDG_DATA_HOME/app-version-check`, then `~/.local/share/app-version-check`, then `./app-version-check`
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

pub fn log_path() -> PathBuf {
    data_dir().join("app-version-check.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("app-version-check")
}
