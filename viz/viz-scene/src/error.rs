//! Error types for scene assembly.

use thiserror::Error;
use viz_distance::DistanceError;

/// Result type for scene-assembly operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Errors that can occur assembling or driving a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The graphics backend reported a failure.
    #[error("graphics backend error: {message}")]
    Backend {
        /// Backend-provided description of the failure.
        message: String,
    },

    /// Isosurface extraction produced an empty mesh.
    #[error("isosurface at value {iso_value} is empty")]
    EmptySurface {
        /// The iso-value that produced no geometry.
        iso_value: f64,
    },

    /// A distance-field computation or cache operation failed.
    #[error(transparent)]
    Distance(#[from] DistanceError),
}

impl SceneError {
    /// Create a `Backend` error from any displayable failure.
    #[must_use]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}
