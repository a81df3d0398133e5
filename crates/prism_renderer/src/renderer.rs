//! Image synthesis.
//!
//! Casts one primary ray through the center of every pixel, finds the
//! nearest triangle and writes its flat color, or the background on a miss.
//! Pixels are independent, so rows or buckets can be rendered in parallel
//! with rayon; every mode produces bit-identical framebuffers.

use std::fmt;
use std::time::{Duration, Instant};

use prism_core::{Color, Scene, Triangle};
use rayon::prelude::*;
use thiserror::Error;

use crate::bucket::{generate_buckets, render_bucket, DEFAULT_BUCKET_SIZE};
use crate::camera::{Camera, CameraError, RayGenerator};
use crate::framebuffer::Framebuffer;
use crate::hittable::nearest_hit;

/// Errors that stop a render before any pixel is written.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid camera: {0}")]
    Camera(#[from] CameraError),

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Bucket size must be non-zero")]
    EmptyBucket,
}

pub type RenderResult<T> = Result<T, RenderError>;

/// How the pixel loop is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// One thread, row by row
    Serial,
    /// Rows distributed over the thread pool
    #[default]
    Rows,
    /// Square tiles distributed over the thread pool, center first
    Buckets,
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub mode: RenderMode,
    /// Overrides the scene's background color when set
    pub background: Option<Color>,
    /// Worker threads; 0 uses the global rayon pool
    pub threads: usize,
    /// Tile edge length in pixels for `RenderMode::Buckets`
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mode: RenderMode::default(),
            background: None,
            threads: 0,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderConfig {
    /// Single-threaded configuration.
    pub fn serial() -> Self {
        Self {
            mode: RenderMode::Serial,
            ..Default::default()
        }
    }

    fn with_mode(&self, mode: RenderMode) -> Self {
        Self {
            mode,
            ..self.clone()
        }
    }
}

/// Summary of a finished render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStats {
    pub width: u32,
    pub height: u32,
    /// Primary rays that hit a triangle
    pub hits: u64,
    pub elapsed: Duration,
}

impl RenderStats {
    /// One ray per pixel.
    pub fn rays(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl fmt::Display for RenderStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rendered {}x{} ({} rays, {} hits) in {:?}",
            self.width,
            self.height,
            self.rays(),
            self.hits,
            self.elapsed
        )
    }
}

/// Color of the nearest triangle through pixel (x, y), `None` on a miss.
#[inline]
pub fn render_pixel(rays: &RayGenerator, triangles: &[Triangle], x: u32, y: u32) -> Option<Color> {
    let ray = rays.ray(x, y);
    nearest_hit(&ray, triangles).map(|hit| triangles[hit.index].color)
}

/// Fill one framebuffer row; returns the number of hits.
pub(crate) fn render_span(
    rays: &RayGenerator,
    triangles: &[Triangle],
    background: Color,
    x0: u32,
    y: u32,
    span: &mut [Color],
) -> u64 {
    let mut hits = 0;
    for (offset, pixel) in span.iter_mut().enumerate() {
        *pixel = match render_pixel(rays, triangles, x0 + offset as u32, y) {
            Some(color) => {
                hits += 1;
                color
            }
            None => background,
        };
    }
    hits
}

/// Render the scene single-threaded.
///
/// This is the reference path; the parallel modes must match it exactly.
pub fn render(camera: &Camera, scene: &Scene) -> RenderResult<Framebuffer> {
    render_with_config(camera, scene, &RenderConfig::serial())
}

/// Render the scene with rows spread over the thread pool.
pub fn render_parallel(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
) -> RenderResult<Framebuffer> {
    render_with_config(camera, scene, &config.with_mode(RenderMode::Rows))
}

/// Render the scene as center-out buckets spread over the thread pool.
pub fn render_buckets(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
) -> RenderResult<Framebuffer> {
    render_with_config(camera, scene, &config.with_mode(RenderMode::Buckets))
}

/// Render the entire scene to a framebuffer using `config.mode`.
///
/// The camera is validated first; an invalid camera fails before any pixel
/// is computed. The framebuffer is always fully overwritten.
pub fn render_with_config(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
) -> RenderResult<Framebuffer> {
    render_with_stats(camera, scene, config).map(|(framebuffer, _)| framebuffer)
}

/// Like [`render_with_config`], also returning hit counts and timing.
pub fn render_with_stats(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
) -> RenderResult<(Framebuffer, RenderStats)> {
    camera.validate()?;
    if config.mode == RenderMode::Buckets && config.bucket_size == 0 {
        return Err(RenderError::EmptyBucket);
    }

    let start = Instant::now();
    let (width, height) = (camera.width(), camera.height());
    let rays = camera.ray_generator();
    let triangles = scene.triangles();
    let background = config.background.unwrap_or(scene.background);

    log::debug!(
        "Rendering '{}': {} triangles, {}x{}, mode {:?}, threads {}",
        scene.name,
        triangles.len(),
        width,
        height,
        config.mode,
        config.threads
    );

    let mut framebuffer = Framebuffer::new(width, height);
    let row_len = width as usize;

    let hits = match config.mode {
        RenderMode::Serial => framebuffer
            .pixels_mut()
            .chunks_mut(row_len)
            .enumerate()
            .map(|(y, row)| render_span(&rays, triangles, background, 0, y as u32, row))
            .sum::<u64>(),
        RenderMode::Rows => with_thread_pool(config.threads, || {
            framebuffer
                .pixels_mut()
                .par_chunks_mut(row_len)
                .enumerate()
                .map(|(y, row)| render_span(&rays, triangles, background, 0, y as u32, row))
                .sum::<u64>()
        })?,
        RenderMode::Buckets => {
            let buckets = generate_buckets(width, height, config.bucket_size);
            let results = with_thread_pool(config.threads, || {
                buckets
                    .par_iter()
                    .map(|bucket| render_bucket(bucket, &rays, triangles, background))
                    .collect::<Vec<_>>()
            })?;

            let mut hits = 0;
            for result in &results {
                framebuffer.write_bucket(result);
                hits += result.hits;
            }
            hits
        }
    };

    let stats = RenderStats {
        width,
        height,
        hits,
        elapsed: start.elapsed(),
    };
    log::info!("{}", stats);

    Ok((framebuffer, stats))
}

/// Run `f` on a dedicated pool of `threads` workers, or on the global pool
/// when `threads` is 0.
fn with_thread_pool<T: Send>(threads: usize, f: impl FnOnce() -> T + Send) -> RenderResult<T> {
    if threads == 0 {
        Ok(f())
    } else {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
        Ok(pool.install(f))
    }
}
