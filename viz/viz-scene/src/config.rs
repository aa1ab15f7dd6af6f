//! Immutable run configuration for the four-quadrant scene.

use std::path::PathBuf;

use viz_types::Point3;

use crate::actor::Color;
use crate::implicit::{ContourValues, Sphere};

/// Everything the assembler needs, fixed at construction.
///
/// One value is built up front and passed by reference through the whole
/// pipeline; nothing reads ambient mutable state. The defaults reproduce the
/// knee-scan visualization: skin and bone iso-values, a spherical inspection
/// window through the skin, contour rings up the leg, and a quadrant layout
/// with one background color per view.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Path of the volume data file.
    pub volume_path: PathBuf,
    /// Path of the distance-field cache file.
    pub cache_path: PathBuf,
    /// Render window size in pixels.
    pub window_size: (u32, u32),
    /// Iso-value of the skin surface.
    pub skin_iso: f64,
    /// Iso-value of the bone surface.
    pub bone_iso: f64,
    /// Feature angle in degrees for normal generation.
    pub feature_angle: f64,
    /// Flat color of the skin surface.
    pub skin_color: Color,
    /// Implicit sphere carving the inspection window through the skin.
    pub window_sphere: Sphere,
    /// Latitude and longitude resolution of the visible window-sphere mesh.
    pub sphere_resolution: usize,
    /// Color of the visible window-sphere mesh.
    pub sphere_color: Color,
    /// Opacity of the visible window-sphere mesh.
    pub sphere_opacity: f64,
    /// Iso-values of the planar contour rings cut over the skin.
    pub ring_contours: ContourValues,
    /// Line width of the contour rings.
    pub ring_line_width: f64,
    /// Boundary value of the skin-window clip.
    pub clip_value: f64,
    /// Opacity of the translucent front skin in the top-right view.
    pub front_skin_opacity: f64,
    /// Background colors: top-left, top-right, bottom-left, bottom-right.
    pub backgrounds: [Color; 4],
    /// Number of frames in the camera orbit.
    pub orbit_frames: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            volume_path: PathBuf::from("vw_knee.slc"),
            cache_path: PathBuf::from("skin_to_bone.vdf"),
            window_size: (800, 800),
            skin_iso: 50.0,
            bone_iso: 75.0,
            feature_angle: 60.0,
            skin_color: Color::new(0.81, 0.63, 0.6),
            window_sphere: Sphere::new(Point3::new(70.0, 40.0, 100.0), 50.0),
            sphere_resolution: 20,
            sphere_color: Color::new(0.3, 0.3, 0.0),
            sphere_opacity: 0.1,
            ring_contours: ContourValues::new(19, (0.0, 190.0)),
            ring_line_width: 2.0,
            clip_value: 5.0,
            front_skin_opacity: 0.5,
            backgrounds: [
                Color::new(1.0, 0.83, 0.83),
                Color::new(0.82, 1.0, 0.83),
                Color::new(0.82, 0.82, 1.0),
                Color::new(0.82, 0.82, 0.82),
            ],
            orbit_frames: 360,
        }
    }
}

impl SceneConfig {
    /// Set the volume data path.
    #[must_use]
    pub fn with_volume_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.volume_path = path.into();
        self
    }

    /// Set the distance-cache path.
    #[must_use]
    pub fn with_cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = path.into();
        self
    }

    /// Set the orbit frame count.
    #[must_use]
    pub const fn with_orbit_frames(mut self, frames: usize) -> Self {
        self.orbit_frames = frames;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_knee_pipeline() {
        let config = SceneConfig::default();

        assert!((config.skin_iso - 50.0).abs() < 1e-12);
        assert!((config.bone_iso - 75.0).abs() < 1e-12);
        assert!((config.feature_angle - 60.0).abs() < 1e-12);
        assert!((config.window_sphere.radius - 50.0).abs() < 1e-12);
        assert_eq!(config.ring_contours.count, 19);
        assert_eq!(config.window_size, (800, 800));
        assert_eq!(config.orbit_frames, 360);
    }

    #[test]
    fn builder_overrides() {
        let config = SceneConfig::default()
            .with_volume_path("/data/scan.slc")
            .with_cache_path("/tmp/field.vdf")
            .with_orbit_frames(10);

        assert_eq!(config.volume_path, PathBuf::from("/data/scan.slc"));
        assert_eq!(config.cache_path, PathBuf::from("/tmp/field.vdf"));
        assert_eq!(config.orbit_frames, 10);
    }
}
