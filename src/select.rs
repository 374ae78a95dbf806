use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::BuildConfig;
use crate::errors::SelectError;

/// One declared possible source file: either always included, or gated
/// behind a named configuration option.
///
/// The serde representation matches how candidate lists are written in
/// manifests: a bare string is an `Always` entry, a `{ option, path }`
/// table is a `Gated` entry. Anything else fails to deserialise, so a
/// malformed entry is caught when the list is authored rather than
/// silently skipped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Candidate {
    /// Unconditionally part of the build.
    Always(PathBuf),
    /// Part of the build iff `option` evaluates truthy in the configuration.
    Gated { option: String, path: PathBuf },
}

impl Candidate {
    pub fn always(path: impl Into<PathBuf>) -> Self {
        Candidate::Always(path.into())
    }

    pub fn gated(option: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Candidate::Gated {
            option: option.into(),
            path: path.into(),
        }
    }

    /// The declared file path, regardless of gating.
    pub fn path(&self) -> &Path {
        match self {
            Candidate::Always(path) => path,
            Candidate::Gated { path, .. } => path,
        }
    }
}

/// An opaque handle representing a source file path.
///
/// Downstream build machinery interprets it as a pointer to a path; no file
/// is opened or checked for existence here.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceRef(PathBuf);

impl SourceRef {
    pub fn new(path: &Path) -> Self {
        SourceRef(path.to_path_buf())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    pub fn into_path(self) -> PathBuf {
        self.0
    }
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl From<PathBuf> for SourceRef {
    fn from(path: PathBuf) -> Self {
        SourceRef(path)
    }
}

impl AsRef<Path> for SourceRef {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

/// Filter `candidates` against `config`, wrapping each selected path with
/// the caller-supplied factory.
///
/// Single pass in input order: `Always` entries are always kept, `Gated`
/// entries are kept iff their option is truthy. A gated entry whose option
/// was never declared fails immediately with
/// [`SelectError::MissingOption`]; options are not defaulted here, the
/// configuration schema upstream is expected to declare them.
pub fn feature_sources_with<T, F>(
    config: &BuildConfig,
    candidates: &[Candidate],
    mut make: F,
) -> Result<Vec<T>, SelectError>
where
    F: FnMut(&Path) -> T,
{
    let mut output = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        match candidate {
            Candidate::Always(path) => output.push(make(path)),
            Candidate::Gated { option, path } => {
                let enabled =
                    config
                        .truthy(option)
                        .ok_or_else(|| SelectError::MissingOption {
                            option: option.clone(),
                            path: path.clone(),
                        })?;
                if enabled {
                    output.push(make(path));
                } else {
                    tracing::trace!(
                        "skipping {} (option {} is falsy)",
                        path.display(),
                        option
                    );
                }
            }
        }
    }
    Ok(output)
}

/// Filter `candidates` against `config`, producing [`SourceRef`] handles.
pub fn feature_sources(
    config: &BuildConfig,
    candidates: &[Candidate],
) -> Result<Vec<SourceRef>, SelectError> {
    feature_sources_with(config, candidates, SourceRef::new)
}
