//! JSON scene files.
//!
//! A scene file carries the triangles, an optional background color and
//! optional camera settings:
//!
//! ```json
//! {
//!   "camera": { "position": [1, 0, 2], "fov": 90.0, "width": 800, "height": 600 },
//!   "background": [0, 0, 0],
//!   "triangles": [
//!     { "vertices": [[1, -1, -5], [-1, -1, -5], [0, 0.3, -5]], "color": [255, 0, 0] }
//!   ]
//! }
//! ```
//!
//! Camera fields that are left out keep the renderer's defaults.

use std::fs;
use std::path::Path;

use prism_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Color, Scene, Triangle};

/// Errors that can occur while reading or writing scene files.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Triangle {index} has a non-finite vertex")]
    NonFiniteVertex { index: usize },
}

/// Result type for scene file operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Camera settings stored in a scene file. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraDesc {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<[f32; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward: Option<[f32; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up: Option<[f32; 3]>,
    /// Vertical field of view in degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fov: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// A triangle as stored in a scene file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TriangleDesc {
    pub vertices: [[f32; 3]; 3],
    #[serde(default)]
    pub color: Color,
}

impl From<&Triangle> for TriangleDesc {
    fn from(triangle: &Triangle) -> Self {
        Self {
            vertices: triangle.vertices.map(|v| v.to_array()),
            color: triangle.color,
        }
    }
}

impl From<&TriangleDesc> for Triangle {
    fn from(desc: &TriangleDesc) -> Self {
        let [a, b, c] = desc.vertices.map(Vec3::from_array);
        Triangle::new(a, b, c, desc.color)
    }
}

/// On-disk representation of a scene.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<CameraDesc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(default)]
    pub triangles: Vec<TriangleDesc>,
}

impl SceneFile {
    /// Read and parse a scene file.
    pub fn load(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let file = Self::from_json_str(&text)?;
        log::info!(
            "Loaded {} triangles from {}",
            file.triangles.len(),
            path.display()
        );
        Ok(file)
    }

    /// Parse a scene file from JSON text and check its vertices.
    pub fn from_json_str(text: &str) -> SceneResult<Self> {
        let file: SceneFile = serde_json::from_str(text)?;
        file.check()?;
        Ok(file)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_string(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the scene file as JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> SceneResult<()> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    /// Build a scene file from a scene and optional camera settings.
    pub fn from_scene(scene: &Scene, camera: Option<CameraDesc>) -> Self {
        Self {
            camera,
            background: Some(scene.background),
            triangles: scene.triangles.iter().map(TriangleDesc::from).collect(),
        }
    }

    /// Convert into a renderable scene.
    ///
    /// Zero-area triangles are kept (they never intersect) but reported.
    pub fn to_scene(&self, name: impl Into<String>) -> Scene {
        let mut scene = Scene::new(name).with_background(self.background.unwrap_or_default());
        for (index, desc) in self.triangles.iter().enumerate() {
            let triangle = Triangle::from(desc);
            if triangle.is_degenerate() {
                log::warn!("Triangle {} is degenerate and will never be hit", index);
            }
            scene.push(triangle);
        }
        scene
    }

    /// The demo scene with its camera one unit right of and two units
    /// behind the origin.
    pub fn demo() -> Self {
        let camera = CameraDesc {
            position: Some([1.0, 0.0, 2.0]),
            ..Default::default()
        };
        Self::from_scene(&Scene::demo(), Some(camera))
    }

    fn check(&self) -> SceneResult<()> {
        for (index, desc) in self.triangles.iter().enumerate() {
            if !desc.vertices.iter().flatten().all(|c| c.is_finite()) {
                return Err(SceneError::NonFiniteVertex { index });
            }
        }
        Ok(())
    }
}
