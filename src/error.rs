//! Error types for clawmerge.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, merging, or writing configuration documents.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("Source config not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Target config not found: {}", .0.display())]
    TargetNotFound(PathBuf),

    #[error("Malformed JSON in {}: {message}", path.display())]
    MalformedJson { path: PathBuf, message: String },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Path conflict at '{path}': segment '{segment}' holds a non-object value")]
    PathConflict { path: String, segment: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl MergeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MergeError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for MergeError {
    fn from(err: config::ConfigError) -> Self {
        MergeError::ConfigError(err.to_string())
    }
}
