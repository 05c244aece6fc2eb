//! Filesystem expansion backed by the `glob` crate.

use crate::locator::Expand;

/// Expand glob patterns against the local filesystem.
///
/// Only regular files are returned, rendered with forward slashes. Invalid patterns and
/// unreadable entries are skipped so that a lookup degrades to "no candidate" rather than
/// failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobExpander;

impl GlobExpander {
    /// Create an expander rooted at the current working directory.
    pub fn new() -> Self {
        Self
    }
}

impl Expand for GlobExpander {
    fn expand(&self, pattern: &str) -> Vec<String> {
        let paths = match glob::glob(pattern) {
            Ok(paths) => paths,
            Err(err) => {
                tracing::debug!("Invalid glob pattern {pattern}: {err}");
                return Vec::new();
            }
        };

        let mut files = Vec::new();
        for entry in paths {
            match entry {
                Ok(path) if path.is_file() => {
                    files.push(path.to_string_lossy().replace('\\', "/"));
                }
                Ok(_) => {}
                Err(err) => tracing::debug!("Skipping unreadable match for {pattern}: {err}"),
            }
        }

        files
    }
}
