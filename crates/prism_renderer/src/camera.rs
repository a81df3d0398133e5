//! Pinhole camera and primary ray generation.

use prism_core::CameraDesc;
use prism_math::{Mat4, Ray, Vec3};
use thiserror::Error;

/// Minimum length of `forward x up` (on unit vectors) for a usable basis.
const BASIS_EPSILON: f32 = 1e-6;

/// Camera configuration errors, caught before any ray is generated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CameraError {
    #[error("Image resolution must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Field of view must be within (0, 180) degrees, got {0}")]
    FieldOfView(f32),

    #[error("Camera parameters must be finite")]
    NonFinite,

    #[error("Forward direction has zero length")]
    DegenerateForward,

    #[error("Up direction is zero or parallel to the forward direction")]
    DegenerateBasis,
}

pub type CameraResult<T> = Result<T, CameraError>;

/// Perspective camera looking along `forward` with a vertical field of view.
///
/// Setters do not validate; call [`Camera::validate`] (every render entry
/// point does) before generating rays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    forward: Vec3,
    up: Vec3,
    /// Vertical field of view in degrees
    fov: f32,
    width: u32,
    height: u32,
}

impl Camera {
    /// Camera at the origin looking down -Z with +Y up, 90 degree vertical
    /// field of view and an 800x600 image.
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            forward: Vec3::NEG_Z,
            up: Vec3::Y,
            fov: 90.0,
            width: 800,
            height: 600,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set camera placement.
    pub fn with_position(mut self, position: Vec3, forward: Vec3, up: Vec3) -> Self {
        self.position = position;
        self.forward = forward;
        self.up = up;
        self
    }

    /// Set the vertical field of view in degrees.
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    /// Build a camera from scene file settings on top of the defaults.
    pub fn from_desc(desc: &CameraDesc) -> Self {
        let mut camera = Self::new();
        camera.apply(desc);
        camera
    }

    /// Override the fields present in `desc`.
    pub fn apply(&mut self, desc: &CameraDesc) {
        if let Some(position) = desc.position {
            self.position = Vec3::from_array(position);
        }
        if let Some(forward) = desc.forward {
            self.forward = Vec3::from_array(forward);
        }
        if let Some(up) = desc.up {
            self.up = Vec3::from_array(up);
        }
        if let Some(fov) = desc.fov {
            self.fov = fov;
        }
        if let Some(width) = desc.width {
            self.width = width;
        }
        if let Some(height) = desc.height {
            self.height = height;
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn set_forward(&mut self, forward: Vec3) {
        self.forward = forward;
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn set_up(&mut self, up: Vec3) {
        self.up = up;
    }

    /// Vertical field of view in degrees.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_height(&mut self, height: u32) {
        self.height = height;
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Camera-to-world transform: the inverse of the view matrix.
    ///
    /// Built from the normalized forward direction rather than a look-at
    /// target, so a short `forward` far from the origin still yields a
    /// proper basis.
    pub fn inverse_view_transform(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward.normalize(), self.up).inverse()
    }

    /// Check the camera can produce well-defined rays.
    pub fn validate(&self) -> CameraResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CameraError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }

        if !self.fov.is_finite() || self.fov <= 0.0 || self.fov >= 180.0 {
            return Err(CameraError::FieldOfView(self.fov));
        }

        if !(self.position.is_finite() && self.forward.is_finite() && self.up.is_finite()) {
            return Err(CameraError::NonFinite);
        }

        let Some(forward) = self.forward.try_normalize() else {
            return Err(CameraError::DegenerateForward);
        };
        let Some(up) = self.up.try_normalize() else {
            return Err(CameraError::DegenerateBasis);
        };
        if forward.cross(up).length() < BASIS_EPSILON {
            return Err(CameraError::DegenerateBasis);
        }

        Ok(())
    }

    /// Snapshot the camera for generating many rays.
    pub fn ray_generator(&self) -> RayGenerator {
        RayGenerator {
            inverse_view: self.inverse_view_transform(),
            origin: self.position,
            width: self.width as f32,
            height: self.height as f32,
            aspect: self.aspect_ratio(),
            tan_half_fov: (self.fov.to_radians() / 2.0).tan(),
        }
    }

    /// World-space ray through the center of pixel (x, y).
    ///
    /// Builds a fresh [`RayGenerator`]; prefer that when casting many rays.
    pub fn ray_through_pixel(&self, x: u32, y: u32) -> Ray {
        self.ray_generator().ray(x, y)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-render snapshot of a camera with the inverse view transform and
/// projection scale precomputed.
#[derive(Debug, Clone, Copy)]
pub struct RayGenerator {
    inverse_view: Mat4,
    origin: Vec3,
    width: f32,
    height: f32,
    aspect: f32,
    tan_half_fov: f32,
}

impl RayGenerator {
    /// Map a pixel center to screen space in [-1, 1], +Y up.
    ///
    /// `x` is the column and `y` the row, counted from the top-left corner.
    #[inline]
    pub fn screen_coords(&self, x: u32, y: u32) -> (f32, f32) {
        let x_ndc = (x as f32 + 0.5) / self.width;
        let y_ndc = (y as f32 + 0.5) / self.height;
        (2.0 * x_ndc - 1.0, 1.0 - 2.0 * y_ndc)
    }

    /// World-space ray through the center of pixel (x, y), unit direction.
    pub fn ray(&self, x: u32, y: u32) -> Ray {
        let (screen_x, screen_y) = self.screen_coords(x, y);
        let camera_x = screen_x * self.aspect * self.tan_half_fov;
        let camera_y = screen_y * self.tan_half_fov;

        // Camera looks down -Z in its own space
        let direction = self
            .inverse_view
            .transform_vector3(Vec3::new(camera_x, camera_y, -1.0))
            .normalize();

        Ray::new(self.origin, direction)
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }
}
