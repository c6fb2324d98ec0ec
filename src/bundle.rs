//! Application bundle metadata
//!
//! The local version and bundle identifier come from the app's `Info.plist`.
//! [`InfoPlist`] reads them from disk on every query; [`StaticBundle`] holds
//! them in memory for hosts that embed the values at build time.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Key of the user-visible version string
pub const SHORT_VERSION_KEY: &str = "CFBundleShortVersionString";

/// Key of the bundle identifier
pub const BUNDLE_IDENTIFIER_KEY: &str = "CFBundleIdentifier";

/// Read access to the running application's bundle metadata
pub trait BundleInfo: Send + Sync {
    /// Returns the string stored under `key`, if present
    fn value(&self, key: &str) -> Option<String>;

    fn local_version(&self) -> Option<String> {
        self.value(SHORT_VERSION_KEY)
    }

    fn bundle_identifier(&self) -> Option<String> {
        self.value(BUNDLE_IDENTIFIER_KEY)
    }
}

/// Property list file on disk (XML or binary)
#[derive(Debug, Clone)]
pub struct InfoPlist {
    path: PathBuf,
}

impl InfoPlist {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_value(&self, key: &str) -> Result<Option<String>, plist::Error> {
        let root = plist::Value::from_file(&self.path)?;

        Ok(root
            .as_dictionary()
            .and_then(|dict| dict.get(key))
            .and_then(|value| value.as_string())
            .map(str::to_string))
    }
}

impl BundleInfo for InfoPlist {
    fn value(&self, key: &str) -> Option<String> {
        self.read_value(key)
            .inspect_err(|e| debug!("Failed to read {}: {}", self.path.display(), e))
            .ok()
            .flatten()
    }
}

/// In-memory bundle metadata
#[derive(Debug, Clone, Default)]
pub struct StaticBundle {
    values: HashMap<String, String>,
}

impl StaticBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_version(self, version: &str) -> Self {
        self.with_value(SHORT_VERSION_KEY, version)
    }

    pub fn with_identifier(self, bundle_id: &str) -> Self {
        self.with_value(BUNDLE_IDENTIFIER_KEY, bundle_id)
    }
}

impl BundleInfo for StaticBundle {
    fn value(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
