//! Error types for distance-field operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for distance-field operations.
pub type DistanceResult<T> = Result<T, DistanceError>;

/// Errors that can occur computing or caching a distance field.
#[derive(Debug, Error)]
pub enum DistanceError {
    /// The source mesh has no vertices to annotate.
    #[error("source mesh has no vertices")]
    EmptySource,

    /// The target mesh has no faces to measure against.
    #[error("target mesh has no faces")]
    EmptyTarget,

    /// The cache file exists but could not be read or decoded.
    #[error("failed to read distance cache {path}: {reason}")]
    CacheRead {
        /// Path of the unreadable cache file.
        path: PathBuf,
        /// What went wrong while decoding.
        reason: String,
    },

    /// The cache file could not be written.
    #[error("failed to write distance cache {path}")]
    CacheWrite {
        /// Path of the cache file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl DistanceError {
    /// Create a `CacheRead` error with the given reason.
    #[must_use]
    pub fn cache_read(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::CacheRead {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
