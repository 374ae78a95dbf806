//! Feature-gated source list selection for build configuration.
//!
//! A build author declares an ordered list of candidate source files, some of
//! them gated behind named configuration options. Given the resolved
//! configuration, [`select::feature_sources`] returns the ordered sub-list of
//! file references that should participate in the build.

pub mod config;
pub mod errors;
pub mod manifest;
pub mod select;

pub use crate::config::{load_config, BuildConfig, OptionValue};
pub use crate::errors::{ConfigError, SelectError};
pub use crate::manifest::{load_manifest, Manifest};
pub use crate::select::{feature_sources, feature_sources_with, Candidate, SourceRef};
