//! Hittable trait and nearest-hit scene resolution.

use prism_core::Triangle;
use prism_math::{Interval, Ray};

/// Record of a ray-triangle intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Barycentric weight of the second vertex
    pub u: f32,
    /// Barycentric weight of the third vertex
    pub v: f32,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object strictly inside the interval `ray_t`.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<TriangleHit>;
}

/// The nearest triangle along a ray and where it was hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneHit {
    /// Index of the triangle in scan order
    pub index: usize,
    pub hit: TriangleHit,
}

impl SceneHit {
    pub fn t(&self) -> f32 {
        self.hit.t
    }
}

/// Find the nearest triangle hit by `ray`.
///
/// Triangles are scanned in order and a hit only replaces the current best
/// when its `t` is strictly smaller, so on equal distances the earliest
/// triangle wins. Returns `None` for an empty scene or a miss.
pub fn nearest_hit(ray: &Ray, triangles: &[Triangle]) -> Option<SceneHit> {
    let mut closest = None;
    let mut closest_so_far = f32::INFINITY;

    for (index, triangle) in triangles.iter().enumerate() {
        if let Some(hit) = triangle.hit(ray, Interval::FORWARD.with_max(closest_so_far)) {
            closest_so_far = hit.t;
            closest = Some(SceneHit { index, hit });
        }
    }

    closest
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::Color;
    use prism_math::Vec3;

    fn quad_at(z: f32, color: Color) -> Triangle {
        Triangle::new(
            Vec3::new(-1.0, -1.0, z),
            Vec3::new(1.0, -1.0, z),
            Vec3::new(0.0, 1.0, z),
            color,
        )
    }

    #[test]
    fn test_empty_scene_misses() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(nearest_hit(&ray, &[]), None);
    }

    #[test]
    fn test_nearest_wins_regardless_of_order() {
        let far = quad_at(-8.0, Color::GREEN);
        let near = quad_at(-5.0, Color::RED);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let hit = nearest_hit(&ray, &[far, near]).unwrap();
        assert_eq!(hit.index, 1);
        assert!((hit.t() - 5.0).abs() < 1e-5);

        let hit = nearest_hit(&ray, &[near, far]).unwrap();
        assert_eq!(hit.index, 0);
    }

    #[test]
    fn test_equal_t_keeps_first() {
        let first = quad_at(-5.0, Color::RED);
        let second = quad_at(-5.0, Color::BLUE);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let hit = nearest_hit(&ray, &[first, second]).unwrap();
        assert_eq!(hit.index, 0);

        let hit = nearest_hit(&ray, &[second, first]).unwrap();
        assert_eq!(hit.index, 0);
    }

    #[test]
    fn test_ray_pointing_away_misses() {
        let scene = [quad_at(-5.0, Color::RED), quad_at(-8.0, Color::GREEN)];
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert_eq!(nearest_hit(&ray, &scene), None);
    }

    #[test]
    fn test_degenerate_triangles_are_skipped() {
        let scene = [Triangle::default(), quad_at(-5.0, Color::RED)];
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(nearest_hit(&ray, &scene).map(|h| h.index), Some(1));
    }
}
