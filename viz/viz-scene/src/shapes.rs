//! Locally generated helper geometry: the window sphere and the outline box.

use std::f64::consts::PI;

use viz_types::{Aabb, IndexedMesh, Point3, Vertex};

/// Generate a closed UV sphere mesh.
///
/// `resolution` is the number of subdivisions in both latitude and
/// longitude, matching the usual sphere-source parameterization. Values
/// below 3 are clamped to 3.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // resolution is tiny, indices fit u32
pub fn sphere_mesh(center: Point3<f64>, radius: f64, resolution: usize) -> IndexedMesh {
    let n = resolution.max(3);
    let mut mesh = IndexedMesh::with_capacity(2 + n * (n - 1), 2 * n * (n - 1));

    // Poles first, then latitude rings of n vertices each.
    mesh.vertices
        .push(Vertex::from_coords(center.x, center.y, center.z + radius));
    mesh.vertices
        .push(Vertex::from_coords(center.x, center.y, center.z - radius));

    #[allow(clippy::cast_precision_loss)]
    let n_f = n as f64;
    for ring in 1..n {
        #[allow(clippy::cast_precision_loss)]
        let phi = PI * ring as f64 / n_f;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for slice in 0..n {
            #[allow(clippy::cast_precision_loss)]
            let theta = 2.0 * PI * slice as f64 / n_f;
            let (sin_theta, cos_theta) = theta.sin_cos();
            mesh.vertices.push(Vertex::from_coords(
                radius.mul_add(sin_phi * cos_theta, center.x),
                radius.mul_add(sin_phi * sin_theta, center.y),
                radius.mul_add(cos_phi, center.z),
            ));
        }
    }

    let ring_start = |ring: usize| (2 + (ring - 1) * n) as u32;

    // Top and bottom fans.
    for slice in 0..n {
        let next = (slice + 1) % n;
        let first = ring_start(1);
        mesh.faces
            .push([0, first + slice as u32, first + next as u32]);
        let last = ring_start(n - 1);
        mesh.faces
            .push([1, last + next as u32, last + slice as u32]);
    }

    // Quad bands between adjacent rings, split into triangle pairs.
    for ring in 1..n - 1 {
        let upper = ring_start(ring);
        let lower = ring_start(ring + 1);
        for slice in 0..n {
            let next = (slice + 1) % n;
            let (s, t) = (slice as u32, next as u32);
            mesh.faces.push([upper + s, lower + s, lower + t]);
            mesh.faces.push([upper + s, lower + t, upper + t]);
        }
    }

    mesh
}

/// The 12 edges of an axis-aligned box, as line segments.
#[must_use]
pub fn outline_edges(bounds: &Aabb) -> Vec<[Point3<f64>; 2]> {
    let c = bounds.corners();
    // Corner index bits: 0 -> x, 1 -> y, 2 -> z. An edge joins two corners
    // differing in exactly one bit.
    let mut edges = Vec::with_capacity(12);
    for i in 0..8usize {
        for bit in 0..3usize {
            let j = i | (1 << bit);
            if j != i {
                edges.push([c[i], c[j]]);
            }
        }
    }
    edges
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sphere_is_closed() {
        let mesh = sphere_mesh(Point3::origin(), 1.0, 20);

        // Closed orientable surface: V - E + F = 2 with E = 3F/2.
        let v = mesh.vertex_count() as i64;
        let f = mesh.face_count() as i64;
        assert_eq!(f % 2, 0);
        let e = 3 * f / 2;
        assert_eq!(v - e + f, 2);
    }

    #[test]
    fn sphere_vertices_lie_on_the_sphere() {
        let center = Point3::new(70.0, 40.0, 100.0);
        let mesh = sphere_mesh(center, 50.0, 20);

        for vertex in &mesh.vertices {
            assert_relative_eq!((vertex.position - center).norm(), 50.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn sphere_resolution_is_clamped() {
        let mesh = sphere_mesh(Point3::origin(), 1.0, 0);
        assert!(!mesh.faces.is_empty());
    }

    #[test]
    fn outline_has_twelve_edges_of_correct_length() {
        let bounds = Aabb::new(Point3::origin(), Point3::new(2.0, 3.0, 4.0));
        let edges = outline_edges(&bounds);

        assert_eq!(edges.len(), 12);

        // Four edges per axis length.
        for expected in [2.0, 3.0, 4.0] {
            let count = edges
                .iter()
                .filter(|[a, b]| ((b - a).norm() - expected).abs() < 1e-12)
                .count();
            assert_eq!(count, 4);
        }
    }
}
