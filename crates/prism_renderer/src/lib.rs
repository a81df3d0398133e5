//! Prism Renderer - CPU triangle ray casting
//!
//! Casts one primary ray per pixel from a pinhole camera, finds the nearest
//! flat-colored triangle by exhaustive scan and writes its color into a
//! framebuffer. No shading, shadows or secondary rays.

mod bucket;
mod camera;
mod framebuffer;
mod hittable;
mod renderer;
mod triangle;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::{Camera, CameraError, CameraResult, RayGenerator};
pub use framebuffer::Framebuffer;
pub use hittable::{nearest_hit, Hittable, SceneHit, TriangleHit};
pub use renderer::{
    render, render_buckets, render_parallel, render_pixel, render_with_config, render_with_stats,
    RenderConfig, RenderError, RenderMode, RenderResult, RenderStats,
};
pub use triangle::{intersect_triangle, PARALLEL_EPSILON};

/// Re-export scene and math types used in the public API
pub use prism_core::{Color, Scene, Triangle};
pub use prism_math::{Interval, Ray, Vec3};
