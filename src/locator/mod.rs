//! Candidate discovery strategies.
//!
//! A strategy receives a relative reference (absolute prefixes are already stripped) and the
//! ordered search directories, and returns revved candidates written in the same directory
//! style as the reference. Candidates are ordered by search directory first and by discovery
//! order within a directory second; nothing is re-sorted.

mod filesystem;
mod mapping;

pub use filesystem::{Expand, FilesystemStrategy};
pub use mapping::MappingStrategy;

/// Trait describing a source of revved candidates for a reference.
pub trait CandidateSource {
  /// Collect every revved candidate for `file` across `search_dirs`, in directory order.
  fn candidates(&self, file: &str, search_dirs: &[&str]) -> Vec<String>;
}
