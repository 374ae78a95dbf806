use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the conditional source selector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// A gated candidate referenced an option that the configuration does
    /// not declare. Not recovered locally: the caller is expected to halt
    /// build configuration and report the misconfiguration.
    #[error("source `{path}` is gated on undeclared option `{option}`", path = .path.display())]
    MissingOption { option: String, path: PathBuf },
}

/// Errors produced while loading configuration or manifest files.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Wrapper for underlying IO errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file was not valid TOML, or a manifest entry had an
    /// unrecognised shape.
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A configuration option held a TOML value kind that has no
    /// truthiness interpretation.
    #[error("option `{key}` has unsupported {kind} value (expected boolean, integer or string)")]
    UnsupportedValue { key: String, kind: &'static str },
}
