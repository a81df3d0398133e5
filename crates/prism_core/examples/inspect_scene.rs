//! Example: Load and inspect a JSON scene file.
//!
//! Run with: cargo run --example inspect_scene -- scene.json

use std::env;

use prism_core::SceneFile;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <path-to-scene.json>");
        println!("\nWith no argument the built-in demo scene is printed as JSON:\n");
        match SceneFile::demo().to_json_string() {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("Failed to serialize demo scene: {}", e),
        }
        return;
    }

    let path = &args[1];
    println!("Loading scene file: {}", path);

    match SceneFile::load(path) {
        Ok(file) => {
            let scene = file.to_scene(path.as_str());
            println!("\n=== Scene: {} ===", scene.name);
            println!("Triangles: {}", scene.len());
            println!("Degenerate: {}", scene.degenerate_count());
            println!("Background: {:?}", scene.background.to_array());
            if let Some(camera) = &file.camera {
                println!("Camera: {:?}", camera);
            }

            for (i, tri) in scene.triangles.iter().enumerate() {
                println!(
                    "  [{}] {:?} {:?} {:?} color {:?} area {:.4}",
                    i,
                    tri.vertices[0],
                    tri.vertices[1],
                    tri.vertices[2],
                    tri.color.to_array(),
                    tri.area()
                );
            }
        }
        Err(e) => {
            eprintln!("Failed to load scene: {}", e);
            std::process::exit(1);
        }
    }
}
