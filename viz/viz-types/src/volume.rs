//! Structured voxel volume for scan data.

use crate::Aabb;
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A structured voxel volume: scalar samples on a regular 3D lattice.
///
/// This is the in-memory form of a CT/MRI scan: dimensions, an origin, a
/// per-axis sample spacing, and one scalar per lattice point, stored in
/// row-major order with x varying fastest. Contouring extracts isosurfaces
/// where the samples cross a threshold (e.g. the tissue density separating
/// skin from air).
///
/// The volume is read-only after construction; it is produced once at
/// startup by a volume reader and consumed by reference.
///
/// # Example
///
/// ```
/// use viz_types::ScalarVolume;
/// use nalgebra::{Point3, Vector3};
///
/// let vol = ScalarVolume::new(
///     (16, 16, 16),
///     Point3::origin(),
///     Vector3::new(1.0, 1.0, 1.5),
/// );
/// assert_eq!(vol.dimensions(), (16, 16, 16));
/// assert_eq!(vol.len(), 4096);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScalarVolume {
    /// Samples in row-major order (x varies fastest).
    values: Vec<f64>,
    /// Lattice dimensions (nx, ny, nz).
    dimensions: (usize, usize, usize),
    /// World-space position of sample (0, 0, 0).
    origin: Point3<f64>,
    /// Distance between adjacent samples along each axis.
    spacing: Vector3<f64>,
}

impl ScalarVolume {
    /// Create a zero-filled volume.
    ///
    /// # Arguments
    ///
    /// * `dimensions` - Lattice dimensions (nx, ny, nz)
    /// * `origin` - World-space position of the first sample
    /// * `spacing` - Distance between adjacent samples per axis
    #[must_use]
    pub fn new(
        dimensions: (usize, usize, usize),
        origin: Point3<f64>,
        spacing: Vector3<f64>,
    ) -> Self {
        let (nx, ny, nz) = dimensions;
        Self {
            values: vec![0.0; nx * ny * nz],
            dimensions,
            origin,
            spacing,
        }
    }

    /// Create a volume by evaluating a function at every sample position.
    ///
    /// # Example
    ///
    /// ```
    /// use viz_types::ScalarVolume;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// // Radial density field
    /// let vol = ScalarVolume::from_fn(
    ///     (8, 8, 8),
    ///     Point3::origin(),
    ///     Vector3::new(1.0, 1.0, 1.0),
    ///     |p| p.coords.norm(),
    /// );
    /// assert_eq!(vol.get(0, 0, 0), 0.0);
    /// ```
    #[must_use]
    pub fn from_fn(
        dimensions: (usize, usize, usize),
        origin: Point3<f64>,
        spacing: Vector3<f64>,
        f: impl Fn(Point3<f64>) -> f64,
    ) -> Self {
        let mut volume = Self::new(dimensions, origin, spacing);
        let (nx, ny, nz) = dimensions;
        for iz in 0..nz {
            for iy in 0..ny {
                for ix in 0..nx {
                    let value = f(volume.position(ix, iy, iz));
                    volume.set(ix, iy, iz, value);
                }
            }
        }
        volume
    }

    /// Create a volume from existing samples.
    ///
    /// Returns `None` if `values.len()` does not equal `nx * ny * nz`.
    #[must_use]
    pub fn from_samples(
        dimensions: (usize, usize, usize),
        origin: Point3<f64>,
        spacing: Vector3<f64>,
        values: Vec<f64>,
    ) -> Option<Self> {
        let (nx, ny, nz) = dimensions;
        if values.len() != nx * ny * nz {
            return None;
        }
        Some(Self {
            values,
            dimensions,
            origin,
            spacing,
        })
    }

    /// Get the lattice dimensions.
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize, usize) {
        self.dimensions
    }

    /// Get the world-space origin.
    #[must_use]
    pub const fn origin(&self) -> Point3<f64> {
        self.origin
    }

    /// Get the per-axis sample spacing.
    #[must_use]
    pub const fn spacing(&self) -> Vector3<f64> {
        self.spacing
    }

    /// Get the sample at lattice coordinates.
    ///
    /// Returns 0.0 for out-of-bounds coordinates.
    #[must_use]
    pub fn get(&self, ix: usize, iy: usize, iz: usize) -> f64 {
        if ix < self.dimensions.0 && iy < self.dimensions.1 && iz < self.dimensions.2 {
            self.values[self.index(ix, iy, iz)]
        } else {
            0.0
        }
    }

    /// Set the sample at lattice coordinates.
    ///
    /// Does nothing for out-of-bounds coordinates.
    pub fn set(&mut self, ix: usize, iy: usize, iz: usize, value: f64) {
        if ix < self.dimensions.0 && iy < self.dimensions.1 && iz < self.dimensions.2 {
            let idx = self.index(ix, iy, iz);
            self.values[idx] = value;
        }
    }

    /// Get the world-space position of a lattice point.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // lattice dimensions are far below 2^52
    pub fn position(&self, ix: usize, iy: usize, iz: usize) -> Point3<f64> {
        Point3::new(
            self.spacing.x.mul_add(ix as f64, self.origin.x),
            self.spacing.y.mul_add(iy as f64, self.origin.y),
            self.spacing.z.mul_add(iz as f64, self.origin.z),
        )
    }

    /// Get the world-space bounding box of the sampled region.
    ///
    /// Returns an empty AABB if any dimension is zero.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        let (nx, ny, nz) = self.dimensions;
        if nx == 0 || ny == 0 || nz == 0 {
            return Aabb::empty();
        }
        let far = self.position(nx - 1, ny - 1, nz - 1);
        Aabb::new(self.origin, far)
    }

    /// Get the total number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the volume has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Access the raw samples in row-major order.
    #[must_use]
    pub fn samples(&self) -> &[f64] {
        &self.values
    }

    /// Convert lattice coordinates to a linear index.
    fn index(&self, ix: usize, iy: usize, iz: usize) -> usize {
        ix + iy * self.dimensions.0 + iz * self.dimensions.0 * self.dimensions.1
    }
}
