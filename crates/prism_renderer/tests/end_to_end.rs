use prism_core::{Color, Scene, SceneFile, Triangle};
use prism_renderer::{
    render, render_buckets, render_parallel, Camera, RenderConfig, RenderMode, Vec3,
};

fn red_triangle_scene() -> Scene {
    let mut scene = Scene::new("red");
    scene.push(Triangle::new(
        Vec3::new(1.0, -1.0, -5.0),
        Vec3::new(-1.0, -1.0, -5.0),
        Vec3::new(0.0, 0.3, -5.0),
        Color::new(255, 0, 0),
    ));
    scene
}

#[test]
fn center_is_red_and_corners_are_background() {
    let camera = Camera::new()
        .with_resolution(800, 600)
        .with_position(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y)
        .with_fov(90.0);

    let fb = render(&camera, &red_triangle_scene()).unwrap();

    assert_eq!(fb.width(), 800);
    assert_eq!(fb.height(), 600);
    assert_eq!(fb.get(400, 300), Color::new(255, 0, 0));
    for (x, y) in [(0, 0), (799, 0), (0, 599), (799, 599)] {
        assert_eq!(fb.get(x, y), Color::BLACK, "corner ({}, {})", x, y);
    }
}

#[test]
fn render_is_idempotent() {
    let camera = Camera::new().with_resolution(160, 120);
    let scene = Scene::demo();

    let first = render(&camera, &scene).unwrap();
    let second = render(&camera, &scene).unwrap();
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn every_mode_is_bit_identical() {
    let file = SceneFile::demo();
    let camera = Camera::from_desc(file.camera.as_ref().unwrap()).with_resolution(203, 117);
    let scene = file.to_scene("demo");

    let reference = render(&camera, &scene).unwrap();

    for threads in [0, 1, 4] {
        let config = RenderConfig {
            threads,
            bucket_size: 32,
            mode: RenderMode::Serial,
            ..Default::default()
        };
        let rows = render_parallel(&camera, &scene, &config).unwrap();
        let buckets = render_buckets(&camera, &scene, &config).unwrap();
        assert_eq!(rows.as_bytes(), reference.as_bytes());
        assert_eq!(buckets.as_bytes(), reference.as_bytes());
    }
}

#[test]
fn demo_scene_shows_both_triangles() {
    let file = SceneFile::demo();
    let camera = Camera::from_desc(file.camera.as_ref().unwrap());
    assert_eq!(camera.position(), Vec3::new(1.0, 0.0, 2.0));

    let fb = render(&camera, &file.to_scene("demo")).unwrap();

    // Red triangle centroid, in front of the green one
    assert_eq!(fb.get(357, 324), Color::RED);
    // Green triangle centroid, above the red one
    assert_eq!(fb.get(369, 265), Color::GREEN);
    // Nothing in the top-left corner
    assert_eq!(fb.get(0, 0), Color::BLACK);
}

#[test]
fn triangle_order_breaks_ties() {
    let front = Triangle::new(
        Vec3::new(-30.0, -30.0, -3.0),
        Vec3::new(30.0, -30.0, -3.0),
        Vec3::new(0.0, 30.0, -3.0),
        Color::BLUE,
    );
    let mut same_plane = front;
    same_plane.set_color(Color::GREEN);

    let mut scene = Scene::new("ties");
    scene.push(front);
    scene.push(same_plane);

    let camera = Camera::new().with_resolution(32, 24);
    let fb = render(&camera, &scene).unwrap();
    assert!(fb.pixels().iter().all(|&p| p == Color::BLUE));
}

#[test]
fn scene_file_renders_after_reload() {
    let path = std::env::temp_dir().join(format!("prism_e2e_{}.json", std::process::id()));
    SceneFile::from_scene(&red_triangle_scene(), None).save(&path).unwrap();

    let loaded = SceneFile::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let camera = Camera::new().with_resolution(80, 60);
    let from_file = render(&camera, &loaded.to_scene("red")).unwrap();
    let direct = render(&camera, &red_triangle_scene()).unwrap();
    assert_eq!(from_file, direct);
}

#[test]
fn short_forward_far_from_origin_still_renders() {
    let mut scene = Scene::new("wall");
    scene.push(Triangle::new(
        Vec3::new(-1000.0, -1000.0, 900.0),
        Vec3::new(1000.0, -1000.0, 900.0),
        Vec3::new(0.0, 1000.0, 900.0),
        Color::RED,
    ));

    let position = Vec3::new(0.0, 0.0, 1000.0);
    let camera = Camera::new()
        .with_resolution(8, 6)
        .with_position(position, Vec3::new(0.0, 0.0, -1e-5), Vec3::Y);

    let fb = render(&camera, &scene).unwrap();
    assert!(fb.pixels().iter().all(|&p| p == Color::RED));

    let unit = camera.with_position(position, Vec3::NEG_Z, Vec3::Y);
    assert_eq!(fb, render(&unit, &scene).unwrap());
}
