//! The precomputed original → revved dictionary consulted in mapping mode.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::asset_paths::normalize;

/// Immutable mapping from original asset paths to their revved counterparts.
///
/// Keys are stored normalised, as they appear once a search directory has been joined with a
/// reference, e.g. `dist/images/pic.png`. Only the basename of each value is ever used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevMapping {
  entries: BTreeMap<String, String>,
}

/// Errors that can occur while loading a mapping file.
#[derive(Debug)]
pub enum MappingLoadError {
  /// Failed to read the mapping file from disk.
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// Failed to parse a JSON mapping file.
  Json {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
  /// Failed to parse a YAML mapping file.
  Yaml {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_yaml::Error,
  },
}

impl RevMapping {
  /// Build a mapping from `(original, revved)` pairs, normalising every key.
  pub fn new<I, K, V>(entries: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
  {
    Self {
      entries: entries
        .into_iter()
        .map(|(original, revved)| (normalize(original.as_ref()), revved.into()))
        .collect(),
    }
  }

  /// Load a flat `{"original": "revved"}` object from disk.
  ///
  /// Files ending in `.yaml` or `.yml` are parsed as YAML, everything else as JSON.
  pub fn load(path: impl AsRef<Path>) -> Result<Self, MappingLoadError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| MappingLoadError::Io {
      path: path.to_path_buf(),
      source,
    })?;

    let entries: BTreeMap<String, String> = if is_yaml_path(path) {
      serde_yaml::from_str(&contents).map_err(|source| MappingLoadError::Yaml {
        path: path.to_path_buf(),
        source,
      })?
    } else {
      serde_json::from_str(&contents).map_err(|source| MappingLoadError::Json {
        path: path.to_path_buf(),
        source,
      })?
    };

    tracing::debug!("Loaded {} mapping entries from {}", entries.len(), path.display());
    Ok(Self::new(entries))
  }

  /// Revved path recorded for a normalised original path.
  pub fn get(&self, key: &str) -> Option<&str> {
    self.entries.get(key).map(String::as_str)
  }

  /// Number of recorded renames.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns `true` when no renames are recorded.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl<K, V> FromIterator<(K, V)> for RevMapping
where
  K: AsRef<str>,
  V: Into<String>,
{
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    Self::new(iter)
  }
}

fn is_yaml_path(path: &Path) -> bool {
  path
    .extension()
    .and_then(|ext| ext.to_str())
    .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

impl std::fmt::Display for MappingLoadError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Io { path, source } => {
        write!(f, "failed to read {}: {}", path.display(), source)
      }
      Self::Json { path, source } => {
        write!(f, "failed to parse {}: {}", path.display(), source)
      }
      Self::Yaml { path, source } => {
        write!(f, "failed to parse {}: {}", path.display(), source)
      }
    }
  }
}

impl std::error::Error for MappingLoadError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io { source, .. } => Some(source),
      Self::Json { source, .. } => Some(source),
      Self::Yaml { source, .. } => Some(source),
    }
  }
}
