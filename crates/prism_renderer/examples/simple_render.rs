//! Simple ray casting example.
//!
//! Renders the demo scene and saves it in PPM format.

use prism_core::SceneFile;
use prism_renderer::{render_parallel, Camera, RenderConfig};

fn main() {
    env_logger::init();

    println!("Prism Ray Caster - Simple Example");
    println!("=================================");

    let file = SceneFile::demo();
    let scene = file.to_scene("demo");
    let camera = file.camera.as_ref().map(Camera::from_desc).unwrap_or_default();

    println!(
        "Rendering {} triangles at {}x{}...",
        scene.len(),
        camera.width(),
        camera.height()
    );

    let start = std::time::Instant::now();
    let image = render_parallel(&camera, &scene, &RenderConfig::default()).expect("Render failed");
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    image.save(filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}
