//! Prism Core - Scene description for the triangle ray caster.
//!
//! This crate provides:
//!
//! - **Scene types**: `Color`, `Triangle`, `Scene`
//! - **Scene files**: JSON loading and saving via `SceneFile`
//!
//! # Example
//!
//! ```ignore
//! use prism_core::SceneFile;
//!
//! let file = SceneFile::load("scene.json")?;
//! let scene = file.to_scene("scene");
//! println!("Loaded {} triangles", scene.len());
//! ```

pub mod color;
pub mod scene;
pub mod scene_file;
pub mod triangle;

// Re-export commonly used types
pub use color::Color;
pub use scene::Scene;
pub use scene_file::{CameraDesc, SceneError, SceneFile, SceneResult, TriangleDesc};
pub use triangle::Triangle;
