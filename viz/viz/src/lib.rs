//! Four-quadrant volume-scan visualization pipeline.
//!
//! This umbrella crate re-exports the viz-* crates, providing a unified API
//! for turning a CT/MRI volume into a renderable four-view scene with a
//! file-memoized skin-to-bone distance field.
//!
//! # Quick Start
//!
//! ```ignore
//! use viz::prelude::*;
//!
//! let config = SceneConfig::default().with_volume_path("vw_knee.slc");
//! let (scene, mut camera) = assemble(&backend, &config)?;
//! orbit(&mut renderer, &scene, &mut camera, config.orbit_frames)?;
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Core data structures: `IndexedMesh`, `Vertex`, `ScalarVolume`, `Aabb`
//! - [`distance`] - Surface-to-surface distance fields and the on-disk cache
//! - [`scene`] - Actors, viewports, camera, configuration, and scene assembly
//!
//! # Feature Flags
//!
//! - `serde` - Serialize/Deserialize derives on the core data model

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

/// Core data structures: `IndexedMesh`, `Vertex`, `ScalarVolume`, `Aabb`.
pub use viz_types as types;

/// Surface-to-surface distance fields and the on-disk cache.
pub use viz_distance as distance;

/// Actors, viewports, camera, configuration, and scene assembly.
pub use viz_scene as scene;

/// Common imports for the visualization pipeline.
///
/// # Usage
///
/// ```
/// use viz::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use viz_types::{Aabb, IndexedMesh, Point3, ScalarVolume, Triangle, Vector3, Vertex};

    // Distance fields and caching
    pub use viz_distance::{distance_field, DistanceCache};

    // Scene assembly (main use case)
    pub use viz_scene::{
        assemble, orbit, Actor, Camera, GeometryBackend, Renderer, Scene, SceneConfig,
    };
}
