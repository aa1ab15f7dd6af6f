//! Renderable actors: geometry plus appearance.

use viz_types::{IndexedMesh, Point3};

/// An RGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component.
    pub r: f64,
    /// Green component.
    pub g: f64,
    /// Blue component.
    pub b: f64,
}

impl Color {
    /// Create a color from RGB components.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
}

/// Which faces the renderer should discard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CullMode {
    /// Draw both sides.
    #[default]
    None,
    /// Discard faces whose normal points toward the camera.
    Front,
    /// Discard faces whose normal points away from the camera.
    Back,
}

/// Surface appearance of an actor.
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    /// Flat surface color, ignored when `scalar_range` is set.
    pub color: Color,
    /// Opacity in `[0, 1]`; 1 is fully opaque.
    pub opacity: f64,
    /// Line width for line geometry.
    pub line_width: f64,
    /// Face culling applied at draw time.
    pub cull: CullMode,
    /// Color of back-facing polygons, when distinct from the front.
    pub backface_color: Option<Color>,
    /// When set, color by per-vertex scalars mapped over this range.
    pub scalar_range: Option<(f64, f64)>,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            opacity: 1.0,
            line_width: 1.0,
            cull: CullMode::None,
            backface_color: None,
            scalar_range: None,
        }
    }
}

impl Appearance {
    /// Opaque surface of the given flat color.
    #[must_use]
    pub fn flat(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    /// Set the opacity.
    #[must_use]
    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Set the line width.
    #[must_use]
    pub const fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    /// Set the cull mode.
    #[must_use]
    pub const fn with_cull(mut self, cull: CullMode) -> Self {
        self.cull = cull;
        self
    }

    /// Set the backface color.
    #[must_use]
    pub const fn with_backface_color(mut self, color: Color) -> Self {
        self.backface_color = Some(color);
        self
    }

    /// Color by per-vertex scalars over the given range.
    #[must_use]
    pub const fn with_scalar_range(mut self, range: (f64, f64)) -> Self {
        self.scalar_range = Some(range);
        self
    }
}

/// Geometry an actor can draw.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// A triangle mesh.
    Mesh(IndexedMesh),
    /// Disconnected line segments.
    Lines(Vec<[Point3<f64>; 2]>),
}

impl Geometry {
    /// Whether the geometry has nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Mesh(mesh) => mesh.faces.is_empty(),
            Self::Lines(segments) => segments.is_empty(),
        }
    }
}

/// A named renderable: geometry plus its appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    /// Stable name, used for logging and scene inspection.
    pub name: String,
    /// What to draw.
    pub geometry: Geometry,
    /// How to draw it.
    pub appearance: Appearance,
}

impl Actor {
    /// Create an actor.
    #[must_use]
    pub fn new(name: impl Into<String>, geometry: Geometry, appearance: Appearance) -> Self {
        Self {
            name: name.into(),
            geometry,
            appearance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viz_types::{unit_cube, IndexedMesh};

    #[test]
    fn appearance_builder_chains() {
        let appearance = Appearance::flat(Color::new(0.81, 0.63, 0.6))
            .with_opacity(0.5)
            .with_cull(CullMode::Front)
            .with_backface_color(Color::BLACK);

        assert!((appearance.opacity - 0.5).abs() < 1e-12);
        assert_eq!(appearance.cull, CullMode::Front);
        assert_eq!(appearance.backface_color, Some(Color::BLACK));
        assert!(appearance.scalar_range.is_none());
    }

    #[test]
    fn geometry_emptiness() {
        assert!(Geometry::Mesh(IndexedMesh::new()).is_empty());
        assert!(Geometry::Lines(Vec::new()).is_empty());
        assert!(!Geometry::Mesh(unit_cube()).is_empty());
    }
}
