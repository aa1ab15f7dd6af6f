//! Per-vertex unsigned distance field computation.

use nalgebra::Point3;
use rayon::prelude::*;
use tracing::{debug, info};
use viz_types::IndexedMesh;

use crate::error::{DistanceError, DistanceResult};

/// Annotate every vertex of `source` with its unsigned distance to `target`.
///
/// The result is a copy of `source` whose per-vertex scalar attribute holds
/// the distance from that vertex to the nearest point on any triangle of
/// `target`. Topology is preserved exactly: vertex count, vertex order, and
/// face connectivity all equal the input. All scalars are non-negative.
///
/// Vertices are processed in parallel; the per-vertex query is an exact
/// closest-point-on-triangle scan over the target surface.
///
/// # Errors
///
/// Returns [`DistanceError::EmptySource`] if `source` has no vertices, or
/// [`DistanceError::EmptyTarget`] if `target` has no faces.
///
/// # Example
///
/// ```
/// use viz_types::unit_cube;
/// use viz_distance::distance_field;
///
/// let bone = unit_cube();
/// let skin = unit_cube();
///
/// // A surface measured against itself is at distance zero everywhere.
/// let annotated = distance_field(&bone, &skin).unwrap();
/// let (min, max) = annotated.scalar_range().unwrap();
/// assert!(min.abs() < 1e-12 && max.abs() < 1e-12);
/// ```
pub fn distance_field(source: &IndexedMesh, target: &IndexedMesh) -> DistanceResult<IndexedMesh> {
    if source.vertices.is_empty() {
        return Err(DistanceError::EmptySource);
    }
    if target.faces.is_empty() {
        return Err(DistanceError::EmptyTarget);
    }

    info!(
        source_vertices = source.vertex_count(),
        target_faces = target.face_count(),
        "Computing surface distance field"
    );

    let scalars: Vec<f64> = source
        .vertices
        .par_iter()
        .map(|vertex| nearest_surface_distance(vertex.position, target))
        .collect();

    let mut annotated = source.clone();
    annotated.set_scalars(&scalars);

    if let Some((min, max)) = annotated.scalar_range() {
        debug!(min, max, "Distance field complete");
    }

    Ok(annotated)
}

/// Compute the unsigned distance from a point to the nearest point on a
/// mesh surface.
///
/// Returns `None` if the mesh has no faces.
#[must_use]
pub fn distance_to_surface(point: Point3<f64>, mesh: &IndexedMesh) -> Option<f64> {
    if mesh.faces.is_empty() {
        return None;
    }
    Some(nearest_surface_distance(point, mesh))
}

/// Exact scan over all target triangles.
fn nearest_surface_distance(point: Point3<f64>, target: &IndexedMesh) -> f64 {
    let mut min_dist_sq = f64::INFINITY;

    for triangle in target.triangles() {
        let closest = closest_point_on_triangle(point, triangle.v0, triangle.v1, triangle.v2);
        let dist_sq = (closest - point).norm_squared();
        if dist_sq < min_dist_sq {
            min_dist_sq = dist_sq;
        }
    }

    min_dist_sq.sqrt()
}

/// Compute the closest point on a triangle to a query point.
///
/// Barycentric-region classification: test the vertex regions, then the
/// edge regions, then project into the face interior.
#[allow(clippy::many_single_char_names)]
fn closest_point_on_triangle(
    p: Point3<f64>,
    a: Point3<f64>,
    b: Point3<f64>,
    c: Point3<f64>,
) -> Point3<f64> {
    let ab = b - a;
    let ac = c - a;
    let ap = p - a;

    let d1 = ab.dot(&ap);
    let d2 = ac.dot(&ap);
    if d1 <= 0.0 && d2 <= 0.0 {
        return a;
    }

    let bp = p - b;
    let d3 = ab.dot(&bp);
    let d4 = ac.dot(&bp);
    if d3 >= 0.0 && d4 <= d3 {
        return b;
    }

    let vc = d1.mul_add(d4, -(d3 * d2));
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        let v = d1 / (d1 - d3);
        return Point3::from(a.coords + ab * v);
    }

    let cp = p - c;
    let d5 = ab.dot(&cp);
    let d6 = ac.dot(&cp);
    if d6 >= 0.0 && d5 <= d6 {
        return c;
    }

    let vb = d5.mul_add(d2, -(d1 * d6));
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        let w = d2 / (d2 - d6);
        return Point3::from(a.coords + ac * w);
    }

    let va = d3.mul_add(d6, -(d5 * d4));
    if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
        let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
        return Point3::from(b.coords + (c - b) * w);
    }

    let denom = 1.0 / (va + vb + vc);
    let v = vb * denom;
    let w = vc * denom;
    Point3::from(a.coords + ab * v + ac * w)
}
