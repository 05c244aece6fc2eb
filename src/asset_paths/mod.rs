//! Path helpers shared by both candidate-discovery strategies.
//!
//! All helpers work on forward-slash strings rather than [`std::path::Path`] because asset
//! references are URL-like: they are written with `/` in stylesheets and markup regardless of
//! the platform the build runs on, and the values we return are spliced straight back into
//! those documents.

mod filters;
mod normalize;
mod pattern;

pub use filters::{is_external_reference, is_passthrough_reference, split_absolute_prefix};
pub use normalize::{basename, dirname, join, normalize};
pub use pattern::revved_name_pattern;
