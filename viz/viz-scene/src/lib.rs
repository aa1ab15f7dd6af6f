//! Scene assembly for the four-quadrant knee-scan visualization.
//!
//! This crate turns a volume scan into a renderable scene: skin and bone
//! isosurfaces, a spherical inspection window carved through the skin,
//! planar contour rings, a distance-colored bone surface, and a volume
//! outline, laid out across four viewports that share one orbiting camera.
//!
//! The numerically heavy operations (contouring, clipping, cutting, volume
//! reading, rendering) live behind the [`GeometryBackend`] and [`Renderer`]
//! traits; this crate only configures and arranges their outputs.
//!
//! # Example
//!
//! ```ignore
//! use viz_scene::{assemble, orbit, SceneConfig};
//!
//! let config = SceneConfig::default().with_volume_path("vw_knee.slc");
//! let (scene, mut camera) = assemble(&backend, &config)?;
//! orbit(&mut renderer, &scene, &mut camera, config.orbit_frames)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod actor;
mod assemble;
mod backend;
mod camera;
mod config;
mod error;
mod implicit;
mod scene;
mod shapes;

pub use actor::{Actor, Appearance, Color, CullMode, Geometry};
pub use assemble::{
    assemble, clipped_skin_actor, distance_actor, extract_surface, orbit, outline_actor,
    ring_actor, window_sphere_actor,
};
pub use backend::{GeometryBackend, Renderer};
pub use camera::Camera;
pub use config::SceneConfig;
pub use error::{SceneError, SceneResult};
pub use implicit::{ContourValues, Plane, Sphere};
pub use scene::{Scene, View, Viewport};
pub use shapes::{outline_edges, sphere_mesh};
