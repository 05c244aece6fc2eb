use crate::asset_paths::{basename, dirname, join, revved_name_pattern};
use crate::locator::CandidateSource;

/// Capability expanding a glob-style pattern into the matching file paths.
///
/// Results may come back in any order; the order returned is the order candidates are
/// reported in.
pub trait Expand {
  /// Return every path matching `pattern`.
  fn expand(&self, pattern: &str) -> Vec<String>;
}

impl<F> Expand for F
where
  F: Fn(&str) -> Vec<String>,
{
  fn expand(&self, pattern: &str) -> Vec<String> {
    self(pattern)
  }
}

/// Resolve candidates by looking for hash-prefixed siblings on disk.
pub struct FilesystemStrategy {
  expander: Box<dyn Expand>,
}

impl FilesystemStrategy {
  /// Create a strategy that queries `expander` for files.
  pub fn new<E: Expand + 'static>(expander: E) -> Self {
    Self {
      expander: Box::new(expander),
    }
  }
}

impl std::fmt::Debug for FilesystemStrategy {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("FilesystemStrategy").finish_non_exhaustive()
  }
}

impl CandidateSource for FilesystemStrategy {
  fn candidates(&self, file: &str, search_dirs: &[&str]) -> Vec<String> {
    let name = basename(file);
    let dir = dirname(file);
    let revved = revved_name_pattern(name);
    let wildcard = format!("*.{name}");
    let single_segment = !file.contains('/');
    let mut candidates = Vec::new();

    for search_dir in search_dirs {
      let pattern = join([*search_dir, dir, wildcard.as_str()]);
      tracing::debug!("Looking for {pattern} on disk");

      let files = self.expander.expand(&pattern);
      tracing::debug!("Found {files:?}");

      // Only the basename is reported back; the search directory part of the match is dropped.
      for found in files.iter().map(|path| basename(path)) {
        if !revved.is_match(found) {
          continue;
        }

        if single_segment {
          tracing::debug!("Adding {found} to candidates");
          candidates.push(found.to_string());
        } else {
          tracing::debug!("Adding {dir}/{found} to candidates");
          candidates.push(format!("{dir}/{found}"));
        }
      }
    }

    candidates
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::cell::RefCell;
  use std::rc::Rc;

  fn listing(pattern: &str) -> Vec<String> {
    match pattern {
      "dist/css/*.style.css" => vec![
        "dist/css/9f8a.style.css".into(),
        "dist/css/zz.style.css".into(),
        "dist/css/ABC1.style.css".into(),
      ],
      "public/css/*.style.css" => vec!["public/css/77.style.css".into()],
      "dist/*.style.css" => vec!["dist/beef.style.css".into()],
      _ => Vec::new(),
    }
  }

  #[test]
  fn keeps_only_hex_prefixed_matches_in_expand_order() {
    let strategy = FilesystemStrategy::new(listing);
    let candidates = strategy.candidates("css/style.css", &["dist"]);
    assert_eq!(candidates, vec![
      "css/9f8a.style.css".to_string(),
      "css/ABC1.style.css".to_string(),
    ]);
  }

  #[test]
  fn accepts_any_name_ending_in_hex_before_the_dot() {
    let strategy = FilesystemStrategy::new(|_: &str| {
      vec![
        "dist/css/old.style.css".to_string(),
        "dist/css/style.css".to_string(),
      ]
    });
    assert_eq!(strategy.candidates("css/style.css", &["dist"]), vec![
      "css/old.style.css".to_string()
    ]);
  }

  #[test]
  fn collects_across_directories_in_order() {
    let strategy = FilesystemStrategy::new(listing);
    let candidates = strategy.candidates("css/style.css", &["public", "dist"]);
    assert_eq!(candidates[0], "css/77.style.css");
    assert_eq!(candidates.len(), 3);
  }

  #[test]
  fn single_segment_reference_yields_bare_name() {
    let strategy = FilesystemStrategy::new(listing);
    assert_eq!(strategy.candidates("style.css", &["dist"]), vec![
      "beef.style.css".to_string()
    ]);
  }

  #[test]
  fn builds_patterns_relative_to_each_search_directory() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let recorder = {
      let seen = Rc::clone(&seen);
      move |pattern: &str| {
        seen.borrow_mut().push(pattern.to_string());
        Vec::new()
      }
    };

    let strategy = FilesystemStrategy::new(recorder);
    let candidates = strategy.candidates("../../images/pic.png", &["build/css", "dist/a/b"]);

    assert!(candidates.is_empty());
    assert_eq!(*seen.borrow(), vec![
      "images/*.pic.png".to_string(),
      "dist/images/*.pic.png".to_string(),
    ]);
  }

  #[test]
  fn escapes_metacharacters_in_reference_name() {
    let strategy = FilesystemStrategy::new(|_: &str| {
      vec![
        "dist/js/12.app+v(2).js".to_string(),
        "dist/js/12.appv2.js".to_string(),
      ]
    });
    assert_eq!(strategy.candidates("js/app+v(2).js", &["dist"]), vec![
      "js/12.app+v(2).js".to_string()
    ]);
  }
}
