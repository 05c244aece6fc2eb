//! Resolve an asset reference to its revved counterpart.

use crate::asset_paths::{is_passthrough_reference, split_absolute_prefix};
use crate::locator::{CandidateSource, Expand, FilesystemStrategy, MappingStrategy};
use crate::mapping::RevMapping;

/// Ordered list of directories a reference is looked up under.
///
/// A single directory converts into a one-element list, so [`RevvedFinder::find`] accepts
/// either form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchDirs<'a>(Vec<&'a str>);

impl<'a> SearchDirs<'a> {
  /// Directories in lookup order.
  pub fn as_slice(&self) -> &[&'a str] {
    &self.0
  }
}

impl<'a> From<&'a str> for SearchDirs<'a> {
  fn from(dir: &'a str) -> Self {
    Self(vec![dir])
  }
}

impl<'a> From<&'a String> for SearchDirs<'a> {
  fn from(dir: &'a String) -> Self {
    Self(vec![dir.as_str()])
  }
}

impl<'a> From<Vec<&'a str>> for SearchDirs<'a> {
  fn from(dirs: Vec<&'a str>) -> Self {
    Self(dirs)
  }
}

impl<'a> From<&[&'a str]> for SearchDirs<'a> {
  fn from(dirs: &[&'a str]) -> Self {
    Self(dirs.to_vec())
  }
}

impl<'a, const N: usize> From<[&'a str; N]> for SearchDirs<'a> {
  fn from(dirs: [&'a str; N]) -> Self {
    Self(dirs.to_vec())
  }
}

impl<'a> From<&'a [String]> for SearchDirs<'a> {
  fn from(dirs: &'a [String]) -> Self {
    Self(dirs.iter().map(String::as_str).collect())
  }
}

impl<'a> From<&'a Vec<String>> for SearchDirs<'a> {
  fn from(dirs: &'a Vec<String>) -> Self {
    Self::from(dirs.as_slice())
  }
}

/// How candidates are discovered, fixed at construction.
#[derive(Debug)]
enum Strategy {
  Mapping(MappingStrategy),
  Filesystem(FilesystemStrategy),
}

/// Finds the revved version of asset references.
///
/// Imagine the following build output, where `style.css` references `../../images/pic.png`:
///
/// ```text
/// build/
///   css/
///     style.css
/// images/
///   2123.pic.png
/// ```
///
/// Looking the reference up under `build/css` yields `../../images/2123.pic.png`: the
/// reference keeps its own shape and only the file name changes.
#[derive(Debug)]
pub struct RevvedFinder {
  strategy: Strategy,
}

impl RevvedFinder {
  /// Create a finder that consults a precomputed rename mapping.
  pub fn from_mapping(mapping: RevMapping) -> Self {
    Self {
      strategy: Strategy::Mapping(MappingStrategy::new(mapping)),
    }
  }

  /// Create a finder that searches the filesystem through `expander`.
  pub fn from_expander<E: Expand + 'static>(expander: E) -> Self {
    Self {
      strategy: Strategy::Filesystem(FilesystemStrategy::new(expander)),
    }
  }

  /// Collect every revved candidate for a relative `file` across `search_dirs`.
  pub fn revved_candidates(&self, file: &str, search_dirs: &[&str]) -> Vec<String> {
    match &self.strategy {
      Strategy::Mapping(strategy) => {
        tracing::debug!("Looking at mapping");
        strategy.candidates(file, search_dirs)
      }
      Strategy::Filesystem(strategy) => {
        tracing::debug!("Looking on disk");
        strategy.candidates(file, search_dirs)
      }
    }
  }

  /// Find the revved version of `reference` under `search_dirs`.
  ///
  /// Empty and external (`scheme://`) references are returned untouched, as is any reference
  /// without a candidate. Absolute references are looked up as relative ones and get their
  /// leading separators back verbatim. When several candidates exist the first one, in search
  /// directory order, wins.
  pub fn find<'a>(&self, reference: &str, search_dirs: impl Into<SearchDirs<'a>>) -> String {
    let search_dirs = search_dirs.into();
    tracing::debug!(
      "Looking for revved version of {reference} in {:?}",
      search_dirs.as_slice()
    );

    if is_passthrough_reference(reference) {
      return reference.to_string();
    }

    let (prefix, file) = split_absolute_prefix(reference);
    if file.is_empty() {
      return reference.to_string();
    }

    let Some(candidate) = self
      .revved_candidates(file, search_dirs.as_slice())
      .into_iter()
      .next()
    else {
      tracing::debug!("No revved version of {reference}");
      return reference.to_string();
    };

    let resolved = format!("{prefix}{candidate}");
    tracing::debug!("Let's return {resolved}");
    resolved
  }
}
