//! Ray-triangle intersection.
//!
//! Uses the Möller-Trumbore algorithm. Triangles are closed: hits exactly on
//! an edge or a vertex count.

use crate::hittable::{Hittable, TriangleHit};
use prism_core::Triangle;
use prism_math::{Interval, Ray};

/// Below this determinant the ray is treated as parallel to the triangle.
/// Also rejects zero-area triangles, whose determinant is always zero.
pub const PARALLEL_EPSILON: f32 = 1e-6;

impl Hittable for Triangle {
    /// Möller-Trumbore ray-triangle intersection algorithm.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<TriangleHit> {
        let (edge1, edge2) = self.edges();

        let h = ray.direction().cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to triangle
        if a.abs() < PARALLEL_EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin() - self.vertices[0];
        let u = f * s.dot(h);

        // Check if intersection is outside triangle (u parameter)
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction().dot(q);

        // Check if intersection is outside triangle (v parameter)
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(q);

        if !ray_t.surrounds(t) {
            return None;
        }

        Some(TriangleHit { t, u, v })
    }
}

/// Intersect a ray with a single triangle, accepting any `t > 0`.
pub fn intersect_triangle(ray: &Ray, triangle: &Triangle) -> Option<TriangleHit> {
    triangle.hit(ray, Interval::FORWARD)
}
