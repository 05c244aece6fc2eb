//! Project configuration describing where revved assets live.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// File name searched for when no explicit configuration is provided.
pub const DEFAULT_CONFIG_FILE: &str = "revved.config.json";

/// Discoverable configuration for resolving revved references.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    /// Directories references are looked up under, in priority order.
    pub search_dirs: Vec<String>,
    /// Optional rename mapping; when absent the filesystem is searched instead.
    pub mapping: Option<String>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            search_dirs: vec!["dist".into()],
            mapping: None,
        }
    }
}

impl FinderConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// When the configuration file does not exist or fails to parse we fall back to default
    /// values.
    pub fn discover(dir: &Path) -> Self {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&content) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("ignoring malformed config {}: {}", path.display(), err);
                None
            }
        }
    }

    /// Mapping file resolved against `base_dir`, when one is configured.
    pub fn mapping_path(&self, base_dir: &Path) -> Option<PathBuf> {
        self.mapping.as_ref().map(|mapping| base_dir.join(mapping))
    }
}
