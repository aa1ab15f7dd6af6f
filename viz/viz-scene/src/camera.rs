//! The shared orbiting camera.

use viz_types::{Aabb, Point3, Vector3};

/// View angle in degrees used when fitting the camera to a bounding box.
const FIT_VIEW_ANGLE_DEG: f64 = 30.0;

/// A perspective camera shared by all four viewports.
///
/// The default orientation looks down the -Y axis with +Z up, then rolls and
/// azimuths 180 degrees so the scan appears upright and front-facing.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position.
    pub position: Point3<f64>,
    /// Point the camera looks at.
    pub focal_point: Point3<f64>,
    /// Up direction of the image plane.
    pub view_up: Vector3<f64>,
}

impl Default for Camera {
    fn default() -> Self {
        let mut camera = Self {
            position: Point3::new(0.0, 1.0, 0.0),
            focal_point: Point3::origin(),
            view_up: Vector3::z(),
        };
        camera.roll(180.0);
        camera.azimuth(180.0);
        camera
    }
}

impl Camera {
    /// Unit vector from the eye toward the focal point.
    ///
    /// Falls back to -Y when eye and focal point coincide.
    #[must_use]
    pub fn view_direction(&self) -> Vector3<f64> {
        (self.focal_point - self.position)
            .try_normalize(1e-12)
            .unwrap_or_else(|| -Vector3::y())
    }

    /// Rotate the eye about the view-up axis through the focal point.
    pub fn azimuth(&mut self, degrees: f64) {
        if let Some(axis) = nalgebra::Unit::try_new(self.view_up, 1e-12) {
            let rotation = nalgebra::Rotation3::from_axis_angle(&axis, degrees.to_radians());
            self.position = self.focal_point + rotation * (self.position - self.focal_point);
        }
    }

    /// Rotate the view-up vector about the view direction.
    pub fn roll(&mut self, degrees: f64) {
        if let Some(axis) = nalgebra::Unit::try_new(self.view_direction(), 1e-12) {
            let rotation = nalgebra::Rotation3::from_axis_angle(&axis, degrees.to_radians());
            self.view_up = rotation * self.view_up;
        }
    }

    /// Re-aim at the center of `bounds` and back off far enough to see all
    /// of it, keeping the current view direction.
    pub fn fit(&mut self, bounds: &Aabb) {
        let direction = self.view_direction();
        let center = bounds.center();
        let radius = (bounds.diagonal() / 2.0).max(1e-6);
        let distance = radius / (FIT_VIEW_ANGLE_DEG / 2.0).to_radians().tan();

        self.focal_point = center;
        self.position = center - direction * distance;
    }
}
