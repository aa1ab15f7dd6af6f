//! Surface-to-surface distance fields with on-disk memoization.
//!
//! This crate annotates a "source" mesh (e.g. a contoured bone surface)
//! with, at every vertex, the unsigned distance to the nearest point on a
//! "target" mesh (e.g. the skin surface). The annotated mesh keeps the
//! source topology exactly; only the per-vertex scalar attribute is added.
//!
//! Because the computation is quadratic in mesh size and the inputs of a
//! visualization run rarely change, [`DistanceCache`] persists the result
//! to a file and reuses it on subsequent runs.
//!
//! # Cache contract
//!
//! The cache is keyed by file existence only, not by a content hash of the
//! inputs. If a file exists at the cache path its contents are returned
//! unconditionally, even when the current meshes differ from those that
//! produced it. Callers must treat the cache as valid only while the
//! underlying volume data and iso-values are unchanged between runs; delete
//! the file to force recomputation.
//!
//! # Example
//!
//! ```
//! use viz_types::unit_cube;
//! use viz_distance::distance_field;
//!
//! let mut skin = unit_cube();
//! skin.translate(viz_types::Vector3::new(10.0, 0.0, 0.0));
//! let bone = unit_cube();
//!
//! let annotated = distance_field(&bone, &skin).unwrap();
//! let (min, max) = annotated.scalar_range().unwrap();
//! assert!(min >= 0.0);
//! assert_eq!(annotated.vertex_count(), bone.vertex_count());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod cache;
mod error;
mod field;
mod format;

pub use cache::DistanceCache;
pub use error::{DistanceError, DistanceResult};
pub use field::{distance_field, distance_to_surface};
pub use format::{read_field, write_field};
