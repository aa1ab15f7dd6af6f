//! Viewports, views, and the composed scene.

use crate::actor::{Actor, Color};

/// A normalized viewport rectangle within the render window.
///
/// Coordinates run from (0, 0) at the bottom-left of the window to (1, 1) at
/// the top-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Left edge.
    pub x_min: f64,
    /// Bottom edge.
    pub y_min: f64,
    /// Right edge.
    pub x_max: f64,
    /// Top edge.
    pub y_max: f64,
}

impl Viewport {
    /// Create a viewport from normalized corner coordinates.
    #[must_use]
    pub const fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Top-left quadrant.
    #[must_use]
    pub const fn top_left() -> Self {
        Self::new(0.0, 0.5, 0.5, 1.0)
    }

    /// Top-right quadrant.
    #[must_use]
    pub const fn top_right() -> Self {
        Self::new(0.5, 0.5, 1.0, 1.0)
    }

    /// Bottom-left quadrant.
    #[must_use]
    pub const fn bottom_left() -> Self {
        Self::new(0.0, 0.0, 0.5, 0.5)
    }

    /// Bottom-right quadrant.
    #[must_use]
    pub const fn bottom_right() -> Self {
        Self::new(0.5, 0.0, 1.0, 0.5)
    }

    /// Width of the viewport in normalized units.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the viewport in normalized units.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// One viewport's worth of actors over a background color.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    /// Where in the window this view draws.
    pub viewport: Viewport,
    /// Background color behind the actors.
    pub background: Color,
    /// Actors drawn in this view, in draw order.
    pub actors: Vec<Actor>,
}

impl View {
    /// Create a view.
    #[must_use]
    pub const fn new(viewport: Viewport, background: Color, actors: Vec<Actor>) -> Self {
        Self {
            viewport,
            background,
            actors,
        }
    }
}

/// The full composed scene: a window of views sharing one camera.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Render window size in pixels.
    pub window_size: (u32, u32),
    /// The views, one per viewport.
    pub views: Vec<View>,
}

impl Scene {
    /// Create a scene.
    #[must_use]
    pub const fn new(window_size: (u32, u32), views: Vec<View>) -> Self {
        Self { window_size, views }
    }

    /// Total number of actors across all views.
    #[must_use]
    pub fn actor_count(&self) -> usize {
        self.views.iter().map(|view| view.actors.len()).sum()
    }

    /// Find an actor by name across all views.
    #[must_use]
    pub fn find_actor(&self, name: &str) -> Option<&Actor> {
        self.views
            .iter()
            .flat_map(|view| &view.actors)
            .find(|actor| actor.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadrants_tile_the_window() {
        let quadrants = [
            Viewport::top_left(),
            Viewport::top_right(),
            Viewport::bottom_left(),
            Viewport::bottom_right(),
        ];

        let area: f64 = quadrants.iter().map(|v| v.width() * v.height()).sum();
        assert!((area - 1.0).abs() < 1e-12);

        for viewport in &quadrants {
            assert!((viewport.width() - 0.5).abs() < 1e-12);
            assert!((viewport.height() - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn scene_actor_lookup() {
        let view = View::new(
            Viewport::top_left(),
            Color::WHITE,
            vec![Actor::new(
                "outline",
                crate::actor::Geometry::Lines(Vec::new()),
                crate::actor::Appearance::flat(Color::BLACK),
            )],
        );
        let scene = Scene::new((800, 800), vec![view]);

        assert_eq!(scene.actor_count(), 1);
        assert!(scene.find_actor("outline").is_some());
        assert!(scene.find_actor("absent").is_none());
    }
}
