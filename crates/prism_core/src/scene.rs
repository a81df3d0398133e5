//! Scene types for Prism.
//!
//! A scene is an ordered list of flat-colored triangles plus the color used
//! for pixels whose ray hits nothing. Triangle order only matters for ties:
//! when two triangles are hit at the same distance, the earlier one wins.

use prism_math::Vec3;

use crate::{Color, Triangle};

/// A complete scene: triangles in scan order and a background color.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    /// Scene name (usually from filename)
    pub name: String,

    /// Triangles in scan order
    pub triangles: Vec<Triangle>,

    /// Color of pixels whose ray hits nothing
    pub background: Color,
}

impl Scene {
    /// Create an empty scene with a black background.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Append a triangle and return its index.
    pub fn push(&mut self, triangle: Triangle) -> usize {
        self.triangles.push(triangle);
        self.triangles.len() - 1
    }

    /// Triangles in scan order.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Get a triangle by index.
    pub fn get(&self, index: usize) -> Option<&Triangle> {
        self.triangles.get(index)
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Number of zero-area triangles (these never intersect).
    pub fn degenerate_count(&self) -> usize {
        self.triangles.iter().filter(|t| t.is_degenerate()).count()
    }

    /// The three-triangle demo scene.
    ///
    /// A zero-area default triangle, a red triangle at z = -5 and a larger
    /// green triangle behind it at z = -8.
    pub fn demo() -> Self {
        let mut scene = Scene::new("demo");

        scene.push(Triangle::default());
        scene.push(Triangle::new(
            Vec3::new(1.0, -1.0, -5.0),
            Vec3::new(-1.0, -1.0, -5.0),
            Vec3::new(0.0, 0.3, -5.0),
            Color::RED,
        ));
        scene.push(Triangle::new(
            Vec3::new(2.0, -0.3, -8.0),
            Vec3::new(-2.0, -0.3, -8.0),
            Vec3::new(0.0, 4.0, -8.0),
            Color::GREEN,
        ));

        scene
    }
}
