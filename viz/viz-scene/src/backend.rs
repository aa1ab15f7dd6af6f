//! Trait seams to the external graphics toolkit.
//!
//! Everything numerically heavy or windowing-related lives behind these two
//! traits: contouring, normal generation, polygon clipping, contour cutting,
//! volume reading, and rendering. The assembler only arranges their outputs;
//! it never reimplements them. Test code substitutes lightweight stubs.

use std::path::Path;

use viz_types::{IndexedMesh, Point3, ScalarVolume};

use crate::camera::Camera;
use crate::error::SceneResult;
use crate::implicit::{ContourValues, Plane, Sphere};
use crate::scene::Scene;

/// Geometry operations supplied by the graphics toolkit.
///
/// Implementations report failures through
/// [`SceneError::Backend`](crate::SceneError::Backend); the assembler
/// propagates them without a degraded mode.
pub trait GeometryBackend {
    /// Read a structured scalar volume from disk.
    ///
    /// # Errors
    ///
    /// Fails when the file is missing or not a volume the toolkit can read.
    fn read_volume(&self, path: &Path) -> SceneResult<ScalarVolume>;

    /// Extract the isosurface of `volume` at `iso_value` as a triangle mesh.
    ///
    /// # Errors
    ///
    /// Fails when the toolkit cannot contour the volume.
    fn extract_isosurface(&self, volume: &ScalarVolume, iso_value: f64)
        -> SceneResult<IndexedMesh>;

    /// Recompute vertex normals, splitting edges sharper than
    /// `feature_angle` degrees.
    ///
    /// # Errors
    ///
    /// Fails when the toolkit cannot process the mesh.
    fn compute_normals(&self, mesh: &IndexedMesh, feature_angle: f64) -> SceneResult<IndexedMesh>;

    /// Clip `mesh` against an implicit sphere, keeping the geometry where
    /// the clip scalar exceeds `boundary_value` (outside the window).
    ///
    /// # Errors
    ///
    /// Fails when the toolkit cannot clip the mesh.
    fn clip(
        &self,
        mesh: &IndexedMesh,
        sphere: &Sphere,
        boundary_value: f64,
    ) -> SceneResult<IndexedMesh>;

    /// Cut `mesh` with an implicit plane at each of the generated contour
    /// values, returning the resulting line segments.
    ///
    /// # Errors
    ///
    /// Fails when the toolkit cannot cut the mesh.
    fn cut_contours(
        &self,
        mesh: &IndexedMesh,
        plane: &Plane,
        values: &ContourValues,
    ) -> SceneResult<Vec<[Point3<f64>; 2]>>;
}

/// Rendering seam: draws a composed scene through the shared camera.
pub trait Renderer {
    /// Draw one frame of `scene` as seen by `camera`.
    ///
    /// # Errors
    ///
    /// Fails when the window or graphics context is unavailable.
    fn render(&mut self, scene: &Scene, camera: &Camera) -> SceneResult<()>;
}
