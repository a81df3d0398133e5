//! Flat-colored triangle primitive.

use prism_math::Vec3;

use crate::Color;

/// A triangle with three vertices and a flat color.
///
/// The default triangle has every vertex at the origin, so it has zero area
/// and is never hit by a ray.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Triangle {
    /// Vertices in winding order
    pub vertices: [Vec3; 3],
    /// Flat color of the whole face
    pub color: Color,
}

impl Triangle {
    /// Create a new triangle from three vertices and a color.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, color: Color) -> Self {
        Self {
            vertices: [v0, v1, v2],
            color,
        }
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        self.vertices
    }

    pub fn set_vertices(&mut self, vertices: [Vec3; 3]) {
        self.vertices = vertices;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Edge vectors `v1 - v0` and `v2 - v0`.
    #[inline]
    pub fn edges(&self) -> (Vec3, Vec3) {
        let [v0, v1, v2] = self.vertices;
        (v1 - v0, v2 - v0)
    }

    /// Unnormalized face normal, `(v1 - v0) x (v2 - v0)`.
    pub fn area_normal(&self) -> Vec3 {
        let (edge1, edge2) = self.edges();
        edge1.cross(edge2)
    }

    /// Area of the triangle.
    pub fn area(&self) -> f32 {
        0.5 * self.area_normal().length()
    }

    /// True when the vertices are collinear (or coincide).
    pub fn is_degenerate(&self) -> bool {
        self.area_normal().length_squared() <= f32::EPSILON * f32::EPSILON
    }

    /// True when every vertex coordinate is finite.
    pub fn is_finite(&self) -> bool {
        self.vertices.iter().all(|v| v.is_finite())
    }

    /// Point with barycentric weights `(1 - u - v, u, v)`.
    pub fn point_at(&self, u: f32, v: f32) -> Vec3 {
        let [v0, v1, v2] = self.vertices;
        v0 * (1.0 - u - v) + v1 * u + v2 * v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_degenerate() {
        let tri = Triangle::default();
        assert!(tri.is_degenerate());
        assert_eq!(tri.color(), Color::BLACK);
    }

    #[test]
    fn test_collinear_is_degenerate() {
        let tri = Triangle::new(
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(1.0, 1.0, -1.0),
            Vec3::new(2.0, 2.0, -1.0),
            Color::RED,
        );
        assert!(tri.is_degenerate());
        assert_eq!(tri.area(), 0.0);
    }

    #[test]
    fn test_area_and_normal() {
        let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y, Color::WHITE);
        assert!(!tri.is_degenerate());
        assert_eq!(tri.area_normal(), Vec3::Z);
        assert!((tri.area() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_point_at_corners() {
        let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y, Color::WHITE);
        assert_eq!(tri.point_at(0.0, 0.0), Vec3::ZERO);
        assert_eq!(tri.point_at(1.0, 0.0), Vec3::X);
        assert_eq!(tri.point_at(0.0, 1.0), Vec3::Y);
    }

    #[test]
    fn test_setters() {
        let mut tri = Triangle::default();
        tri.set_vertices([Vec3::X, Vec3::Y, Vec3::Z]);
        tri.set_color(Color::GREEN);
        assert_eq!(tri.vertices(), [Vec3::X, Vec3::Y, Vec3::Z]);
        assert_eq!(tri.color(), Color::GREEN);
        assert!(tri.is_finite());
    }
}
