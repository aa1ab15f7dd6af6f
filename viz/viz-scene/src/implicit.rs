//! Implicit functions used to carve and cut surfaces.

use viz_types::{Point3, Vector3};

/// An implicit sphere, negative inside and positive outside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center of the sphere.
    pub center: Point3<f64>,
    /// Radius of the sphere.
    pub radius: f64,
}

impl Sphere {
    /// Create a sphere from center and radius.
    #[must_use]
    pub const fn new(center: Point3<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Signed value at `point`: distance to the center minus the radius.
    ///
    /// Negative inside, zero on the surface, positive outside.
    #[must_use]
    pub fn evaluate(&self, point: Point3<f64>) -> f64 {
        (point - self.center).norm() - self.radius
    }

    /// Whether `point` lies strictly inside the sphere.
    #[must_use]
    pub fn contains(&self, point: Point3<f64>) -> bool {
        self.evaluate(point) < 0.0
    }
}

/// An implicit plane, signed by the normal direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// A point on the plane.
    pub origin: Point3<f64>,
    /// Plane normal; need not be unit length.
    pub normal: Vector3<f64>,
}

impl Plane {
    /// Create a plane from an origin point and a normal.
    #[must_use]
    pub const fn new(origin: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self { origin, normal }
    }

    /// The plane `z = height`, normal pointing up.
    #[must_use]
    pub fn horizontal(height: f64) -> Self {
        Self::new(Point3::new(0.0, 0.0, height), Vector3::z())
    }

    /// Signed distance from `point` to the plane, scaled by `|normal|`.
    ///
    /// Positive on the side the normal points toward.
    #[must_use]
    pub fn evaluate(&self, point: Point3<f64>) -> f64 {
        self.normal.dot(&(point - self.origin))
    }
}

/// Evenly spaced iso-values for contour cutting.
///
/// Mirrors the usual contour-filter parameterization: `count` values spread
/// across an inclusive range, first value at `range.0`, last at `range.1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourValues {
    /// Number of contour values to generate.
    pub count: usize,
    /// Inclusive range the values span.
    pub range: (f64, f64),
}

impl ContourValues {
    /// Create a contour-value generator.
    #[must_use]
    pub const fn new(count: usize, range: (f64, f64)) -> Self {
        Self { count, range }
    }

    /// The generated iso-values, evenly spaced over the range.
    ///
    /// A single value sits at the start of the range; zero values yield an
    /// empty vector.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        match self.count {
            0 => Vec::new(),
            1 => vec![self.range.0],
            n => {
                let (lo, hi) = self.range;
                #[allow(clippy::cast_precision_loss)]
                let step = (hi - lo) / (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        #[allow(clippy::cast_precision_loss)]
                        let i = i as f64;
                        i.mul_add(step, lo)
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sphere_sign_convention() {
        let sphere = Sphere::new(Point3::origin(), 2.0);
        assert!(sphere.evaluate(Point3::origin()) < 0.0);
        assert_relative_eq!(sphere.evaluate(Point3::new(2.0, 0.0, 0.0)), 0.0);
        assert!(sphere.evaluate(Point3::new(3.0, 0.0, 0.0)) > 0.0);
        assert!(sphere.contains(Point3::new(1.0, 0.0, 0.0)));
        assert!(!sphere.contains(Point3::new(2.5, 0.0, 0.0)));
    }

    #[test]
    fn plane_sign_convention() {
        let plane = Plane::horizontal(5.0);
        assert!(plane.evaluate(Point3::new(0.0, 0.0, 7.0)) > 0.0);
        assert!(plane.evaluate(Point3::new(0.0, 0.0, 3.0)) < 0.0);
        assert_relative_eq!(plane.evaluate(Point3::new(10.0, -4.0, 5.0)), 0.0);
    }

    #[test]
    fn contour_values_are_evenly_spaced() {
        let contours = ContourValues::new(19, (0.0, 190.0));
        let values = contours.values();

        assert_eq!(values.len(), 19);
        assert_relative_eq!(values[0], 0.0);
        assert_relative_eq!(values[18], 190.0);

        let step = values[1] - values[0];
        for pair in values.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], step, epsilon = 1e-10);
        }
    }

    #[test]
    fn contour_values_degenerate_counts() {
        assert!(ContourValues::new(0, (0.0, 1.0)).values().is_empty());
        assert_eq!(ContourValues::new(1, (3.0, 9.0)).values(), vec![3.0]);
    }
}
