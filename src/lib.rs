#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod config;
pub mod expand;
pub mod finder;
pub mod locator;
pub mod mapping;

pub use config::FinderConfig;
pub use expand::GlobExpander;
pub use finder::{RevvedFinder, SearchDirs};
pub use locator::Expand;
pub use mapping::{MappingLoadError, RevMapping};
