//! Core data types for the VolGlass visualization pipeline.
//!
//! This crate provides the foundational types shared by every stage of the
//! pipeline:
//!
//! - [`Vertex`] - A point in 3D space with optional attributes
//! - [`IndexedMesh`] - A triangle mesh with indexed vertices
//! - [`Triangle`] - A concrete triangle with vertex positions
//! - [`Aabb`] - Axis-aligned bounding box
//! - [`ScalarVolume`] - A structured voxel volume (CT/MRI scan data)
//!
//! # Scalars
//!
//! A vertex may carry a single scalar attribute. The pipeline uses it for
//! the skin-to-bone distance field: a contoured bone surface is annotated
//! with, at each vertex, the unsigned distance to the skin surface, and a
//! renderer maps [`IndexedMesh::scalar_range`] onto a color table.
//!
//! # Units and coordinates
//!
//! All coordinates are `f64` and unit-agnostic; scan data is typically in
//! millimeters. Right-handed coordinate system, faces wound
//! counter-clockwise when viewed from outside.
//!
//! # Example
//!
//! ```
//! use viz_types::{IndexedMesh, Vertex, Point3};
//!
//! let mut mesh = IndexedMesh::new();
//! mesh.vertices.push(Vertex::new(Point3::new(0.0, 0.0, 0.0)));
//! mesh.vertices.push(Vertex::new(Point3::new(1.0, 0.0, 0.0)));
//! mesh.vertices.push(Vertex::new(Point3::new(0.5, 1.0, 0.0)));
//! mesh.faces.push([0, 1, 2]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod mesh;
mod triangle;
mod vertex;
mod volume;

pub use bounds::Aabb;
pub use mesh::{unit_cube, IndexedMesh};
pub use triangle::Triangle;
pub use vertex::{Vertex, VertexAttributes};
pub use volume::ScalarVolume;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
