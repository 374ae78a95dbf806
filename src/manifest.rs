//! Declarative candidate lists loaded from manifest files.
//!
//! A manifest lives next to the sources it describes and lists candidates
//! in build order:
//!
//! ```toml
//! sources = [
//!     "console.c",
//!     { option = "WITH_UI", path = "ui.c" },
//!     "memory.c",
//! ]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::BuildConfig;
use crate::errors::{ConfigError, SelectError};
use crate::select::{feature_sources, Candidate, SourceRef};

/// An ordered, build-author-declared candidate list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub sources: Vec<Candidate>,
}

impl Manifest {
    /// Parse a manifest document. A candidate that is neither a bare path
    /// string nor an `{ option, path }` table is a parse error.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let manifest: Manifest = toml::from_str(text)?;
        Ok(manifest)
    }

    /// Filter this manifest's candidates against `config`.
    pub fn select(&self, config: &BuildConfig) -> Result<Vec<SourceRef>, SelectError> {
        feature_sources(config, &self.sources)
    }
}

/// Load a manifest from a TOML file on disk.
pub fn load_manifest(path: impl AsRef<Path>) -> Result<Manifest, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let manifest = Manifest::from_toml_str(&text)?;
    tracing::debug!(
        "loaded {} source candidates from {}",
        manifest.sources.len(),
        path.display()
    );
    Ok(manifest)
}
