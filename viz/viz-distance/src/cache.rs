//! File-backed memoization of distance fields.

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use viz_types::IndexedMesh;

use crate::error::DistanceResult;
use crate::field::distance_field;
use crate::format::{read_field, write_field};

/// A distance field memoized to a single file.
///
/// The cache is keyed by file existence alone. When the file is present its
/// contents are loaded and returned without invoking the compute step and
/// without any validation against the current inputs; when it is absent the
/// field is computed, written, and returned. Deleting the file is the only
/// way to invalidate it.
///
/// # Example
///
/// ```no_run
/// use viz_distance::DistanceCache;
/// use viz_types::unit_cube;
///
/// let cache = DistanceCache::new("skin_to_bone.vdf");
/// let bone = unit_cube();
/// let skin = unit_cube();
///
/// // First run computes and persists; later runs read the file back.
/// let annotated = cache.distance_between(&bone, &skin).unwrap();
/// assert!(annotated.has_scalars());
/// ```
#[derive(Debug, Clone)]
pub struct DistanceCache {
    path: PathBuf,
}

impl DistanceCache {
    /// Create a cache backed by the given file path.
    ///
    /// The file is not touched until [`load_or_compute`](Self::load_or_compute)
    /// or [`distance_between`](Self::distance_between) runs.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file currently exists.
    ///
    /// Existence is the whole cache key: a populated cache is served as-is
    /// regardless of what inputs produced it.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.path.exists()
    }

    /// Load the cached field, or compute and persist it.
    ///
    /// If the backing file exists, `compute` is never invoked and the file
    /// contents are returned. Otherwise `compute` runs once, its result is
    /// written to the file, and the freshly computed mesh is returned.
    ///
    /// # Errors
    ///
    /// Propagates any error from `compute`, plus
    /// [`DistanceError::CacheRead`](crate::DistanceError::CacheRead) for an
    /// unreadable file and
    /// [`DistanceError::CacheWrite`](crate::DistanceError::CacheWrite) when
    /// the fresh result cannot be persisted.
    pub fn load_or_compute<F>(&self, compute: F) -> DistanceResult<IndexedMesh>
    where
        F: FnOnce() -> DistanceResult<IndexedMesh>,
    {
        if self.is_populated() {
            debug!(path = %self.path.display(), "Distance cache hit");
            return read_field(&self.path);
        }

        info!(path = %self.path.display(), "Distance cache miss, computing");
        let field = compute()?;
        write_field(&self.path, &field)?;
        Ok(field)
    }

    /// Annotate `source` with distances to `target`, memoized through the
    /// backing file.
    ///
    /// Equivalent to [`load_or_compute`](Self::load_or_compute) over
    /// [`distance_field`]. Note that on a cache hit the returned mesh comes
    /// from the file, not from the meshes passed here.
    ///
    /// # Errors
    ///
    /// See [`load_or_compute`](Self::load_or_compute) and [`distance_field`].
    pub fn distance_between(
        &self,
        source: &IndexedMesh,
        target: &IndexedMesh,
    ) -> DistanceResult<IndexedMesh> {
        self.load_or_compute(|| distance_field(source, target))
    }
}
