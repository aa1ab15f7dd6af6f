//! Indexed triangle mesh.

use crate::{Aabb, Triangle, Vertex};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh.
///
/// Stores vertices and faces separately, with faces referencing vertices by
/// index. Faces use counter-clockwise winding when viewed from outside, so
/// normals point outward by the right-hand rule.
///
/// Contouring stages produce meshes; downstream stages (clipping, cutting,
/// distance annotation) consume them by reference and never mutate a mesh
/// after creation.
///
/// # Example
///
/// ```
/// use viz_types::{IndexedMesh, Vertex};
///
/// let mut mesh = IndexedMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Triangle faces as indices into the vertex array.
    /// Each face is `[v0, v1, v2]` with counter-clockwise winding.
    pub faces: Vec<[u32; 3]>,
}

impl IndexedMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices and faces.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Create a mesh from raw coordinate and index data.
    ///
    /// Returns an empty mesh if `positions.len()` or `indices.len()` is not
    /// divisible by 3.
    ///
    /// # Example
    ///
    /// ```
    /// use viz_types::IndexedMesh;
    ///
    /// let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    /// let indices = [0, 1, 2];
    ///
    /// let mesh = IndexedMesh::from_raw(&positions, &indices);
    /// assert_eq!(mesh.vertex_count(), 3);
    /// ```
    #[must_use]
    pub fn from_raw(positions: &[f64], indices: &[u32]) -> Self {
        if positions.len() % 3 != 0 || indices.len() % 3 != 0 {
            return Self::new();
        }

        let vertices = positions
            .chunks_exact(3)
            .map(|c| Vertex::from_coords(c[0], c[1], c[2]))
            .collect();

        let faces = indices
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();

        Self { vertices, faces }
    }

    /// Get the number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh has no renderable geometry.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Iterate over all faces as triangles with resolved vertex positions.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.faces.iter().map(|&[i0, i1, i2]| Triangle {
            v0: self.vertices[i0 as usize].position,
            v1: self.vertices[i1 as usize].position,
            v2: self.vertices[i2 as usize].position,
        })
    }

    /// Translate the mesh by the given vector.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        for vertex in &mut self.vertices {
            vertex.position += offset;
        }
    }

    /// Replace the per-vertex scalars with the given values.
    ///
    /// Returns `false` without modifying anything if `scalars.len()` does
    /// not match the vertex count.
    pub fn set_scalars(&mut self, scalars: &[f64]) -> bool {
        if scalars.len() != self.vertices.len() {
            return false;
        }
        for (vertex, &scalar) in self.vertices.iter_mut().zip(scalars) {
            vertex.attributes.scalar = Some(scalar);
        }
        true
    }

    /// Check if every vertex carries a scalar value.
    #[must_use]
    pub fn has_scalars(&self) -> bool {
        !self.vertices.is_empty() && self.vertices.iter().all(|v| v.scalar().is_some())
    }

    /// Get the (min, max) range of the per-vertex scalars.
    ///
    /// Returns `None` if any vertex is missing a scalar, or the mesh has no
    /// vertices. Renderers map this range onto a color table for
    /// distance-colored surfaces.
    ///
    /// # Example
    ///
    /// ```
    /// use viz_types::{IndexedMesh, Vertex, Point3};
    ///
    /// let mut mesh = IndexedMesh::new();
    /// mesh.vertices.push(Vertex::with_scalar(Point3::origin(), 2.0));
    /// mesh.vertices.push(Vertex::with_scalar(Point3::origin(), 8.0));
    ///
    /// assert_eq!(mesh.scalar_range(), Some((2.0, 8.0)));
    /// ```
    #[must_use]
    pub fn scalar_range(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for vertex in &self.vertices {
            let s = vertex.scalar()?;
            min = min.min(s);
            max = max.max(s);
        }

        if min <= max { Some((min, max)) } else { None }
    }

    /// Compute the axis-aligned bounding box.
    ///
    /// Returns an empty AABB if the mesh has no vertices.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(|v| &v.position))
    }
}

/// Create a unit cube mesh from (0,0,0) to (1,1,1).
///
/// Useful as a small closed test surface.
///
/// # Example
///
/// ```
/// use viz_types::unit_cube;
///
/// let cube = unit_cube();
/// assert_eq!(cube.vertex_count(), 8);
/// assert_eq!(cube.face_count(), 12);
/// ```
#[must_use]
pub fn unit_cube() -> IndexedMesh {
    let mut mesh = IndexedMesh::with_capacity(8, 12);

    mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0)); // 0
    mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0)); // 1
    mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 0.0)); // 2
    mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0)); // 3
    mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 1.0)); // 4
    mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 1.0)); // 5
    mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 1.0)); // 6
    mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 1.0)); // 7

    // Two CCW triangles per cube face
    mesh.faces.push([0, 2, 1]); // bottom
    mesh.faces.push([0, 3, 2]);
    mesh.faces.push([4, 5, 6]); // top
    mesh.faces.push([4, 6, 7]);
    mesh.faces.push([0, 1, 5]); // front
    mesh.faces.push([0, 5, 4]);
    mesh.faces.push([3, 7, 6]); // back
    mesh.faces.push([3, 6, 2]);
    mesh.faces.push([0, 4, 7]); // left
    mesh.faces.push([0, 7, 3]);
    mesh.faces.push([1, 2, 6]); // right
    mesh.faces.push([1, 6, 5]);

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn mesh_is_empty() {
        let mesh = IndexedMesh::new();
        assert!(mesh.is_empty());

        let mut mesh2 = IndexedMesh::new();
        mesh2.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        assert!(mesh2.is_empty()); // no faces

        mesh2.faces.push([0, 0, 0]);
        assert!(!mesh2.is_empty());
    }

    #[test]
    fn mesh_from_raw() {
        let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let indices = [0, 1, 2];

        let mesh = IndexedMesh::from_raw(&positions, &indices);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
    }

    #[test]
    fn mesh_from_raw_bad_lengths() {
        let mesh = IndexedMesh::from_raw(&[0.0, 1.0], &[0, 1, 2]);
        assert!(mesh.is_empty());
    }

    #[test]
    fn mesh_bounds() {
        let mut mesh = IndexedMesh::new();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(10.0, 5.0, 3.0));
        mesh.vertices.push(Vertex::from_coords(-2.0, 8.0, 1.0));

        let bounds = mesh.bounds();
        assert!((bounds.min.x - (-2.0)).abs() < f64::EPSILON);
        assert!((bounds.max.x - 10.0).abs() < f64::EPSILON);
        assert!((bounds.max.y - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_mesh_bounds() {
        let mesh = IndexedMesh::new();
        assert!(mesh.bounds().is_empty());
    }

    #[test]
    fn mesh_translate() {
        let mut mesh = IndexedMesh::new();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));

        mesh.translate(Vector3::new(1.0, 2.0, 3.0));

        let pos = mesh.vertices[0].position;
        assert!((pos.x - 1.0).abs() < f64::EPSILON);
        assert!((pos.y - 2.0).abs() < f64::EPSILON);
        assert!((pos.z - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn scalar_range_complete() {
        let mut mesh = IndexedMesh::new();
        mesh.vertices.push(Vertex::with_scalar(Point3::origin(), 3.0));
        mesh.vertices.push(Vertex::with_scalar(Point3::origin(), -1.0));
        mesh.vertices.push(Vertex::with_scalar(Point3::origin(), 7.0));

        assert_eq!(mesh.scalar_range(), Some((-1.0, 7.0)));
        assert!(mesh.has_scalars());
    }

    #[test]
    fn scalar_range_incomplete() {
        let mut mesh = IndexedMesh::new();
        mesh.vertices.push(Vertex::with_scalar(Point3::origin(), 3.0));
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));

        assert_eq!(mesh.scalar_range(), None);
        assert!(!mesh.has_scalars());
    }

    #[test]
    fn scalar_range_empty_mesh() {
        assert_eq!(IndexedMesh::new().scalar_range(), None);
    }

    #[test]
    fn set_scalars_length_mismatch() {
        let mut cube = unit_cube();
        assert!(!cube.set_scalars(&[1.0, 2.0]));
        assert!(!cube.has_scalars());

        let scalars: Vec<f64> = (0..8).map(f64::from).collect();
        assert!(cube.set_scalars(&scalars));
        assert_eq!(cube.scalar_range(), Some((0.0, 7.0)));
    }

    #[test]
    fn unit_cube_triangles() {
        let cube = unit_cube();
        assert_eq!(cube.triangles().count(), 12);

        // Total surface area of a unit cube is 6
        let area: f64 = cube.triangles().map(|t| t.area()).sum();
        assert!((area - 6.0).abs() < 1e-10);
    }
}
