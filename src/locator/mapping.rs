use crate::asset_paths::{basename, dirname, join};
use crate::locator::CandidateSource;
use crate::mapping::RevMapping;

/// Resolve candidates through a precomputed rename mapping.
#[derive(Debug, Clone)]
pub struct MappingStrategy {
  mapping: RevMapping,
}

impl MappingStrategy {
  /// Create a strategy backed by `mapping`.
  pub fn new(mapping: RevMapping) -> Self {
    Self { mapping }
  }
}

impl CandidateSource for MappingStrategy {
  /// The mapping is keyed by paths rooted at a search directory (`dist/images/pic.png`), but
  /// the candidate keeps the directory part of the reference itself: `images/pic.png` looked
  /// up under `dist` yields `images/2123.pic.png`, with only the basename taken from the
  /// mapping value.
  fn candidates(&self, file: &str, search_dirs: &[&str]) -> Vec<String> {
    let dir = dirname(file);
    let mut candidates = Vec::new();

    for search_dir in search_dirs {
      let key = join([*search_dir, file]);
      tracing::debug!("Looking at mapping for {key} (from {search_dir}/{file})");

      if let Some(revved_name) = self
        .mapping
        .get(&key)
        .map(basename)
        .filter(|name| !name.is_empty())
      {
        tracing::debug!("Found a candidate: {dir}/{revved_name}");
        candidates.push(format!("{dir}/{revved_name}"));
      }
    }

    candidates
  }
}
