use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use prism_core::{CameraDesc, Color, SceneFile};
use prism_renderer::{render_with_stats, Camera, RenderConfig, RenderMode, Vec3};

/// Render a triangle scene to an image file.
#[derive(Parser, Debug)]
#[command(name = "prism", version, about)]
struct Args {
    /// JSON scene file; renders the built-in demo scene when omitted
    scene: Option<PathBuf>,

    /// Output image (format from extension)
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// Image width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Vertical field of view in degrees
    #[arg(long)]
    fov: Option<f32>,

    /// Camera position as X,Y,Z
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    position: Option<Vec3>,

    /// Camera forward direction as X,Y,Z
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    forward: Option<Vec3>,

    /// Camera up direction as X,Y,Z
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    up: Option<Vec3>,

    /// Background color as R,G,B
    #[arg(long, value_parser = parse_color)]
    background: Option<Color>,

    /// Worker threads (0 = one per core)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Pixel scheduling
    #[arg(long, value_enum, default_value_t = Mode::Rows)]
    mode: Mode,

    /// Bucket edge length for --mode buckets
    #[arg(long, default_value_t = prism_renderer::DEFAULT_BUCKET_SIZE)]
    bucket_size: u32,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    Serial,
    Rows,
    Buckets,
}

impl From<Mode> for RenderMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Serial => RenderMode::Serial,
            Mode::Rows => RenderMode::Rows,
            Mode::Buckets => RenderMode::Buckets,
        }
    }
}

impl Args {
    /// Camera overrides from the command line.
    fn camera_desc(&self) -> CameraDesc {
        CameraDesc {
            position: self.position.map(|v| v.to_array()),
            forward: self.forward.map(|v| v.to_array()),
            up: self.up.map(|v| v.to_array()),
            fov: self.fov,
            width: self.width,
            height: self.height,
        }
    }

    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            mode: self.mode.into(),
            background: self.background,
            threads: self.threads,
            bucket_size: self.bucket_size,
        }
    }
}

fn parse_components<const N: usize>(s: &str) -> Result<[f32; N], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {} comma-separated values, got {}", N, parts.len()));
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f32>()
            .map_err(|e| format!("invalid number '{}': {}", part, e))?;
    }
    Ok(out)
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    parse_components::<3>(s).map(Vec3::from_array)
}

fn parse_color(s: &str) -> Result<Color, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [r, g, b] = parts.as_slice() else {
        return Err(format!("expected R,G,B, got '{}'", s));
    };
    let channel = |c: &str| {
        c.parse::<u8>()
            .map_err(|e| format!("invalid channel '{}': {}", c, e))
    };
    Ok(Color::new(channel(r)?, channel(g)?, channel(b)?))
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    let (file, name) = match &args.scene {
        Some(path) => {
            let file = SceneFile::load(path)
                .with_context(|| format!("Failed to load scene {}", path.display()))?;
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            (file, name)
        }
        None => {
            log::info!("No scene file given, rendering the demo scene");
            (SceneFile::demo(), "demo".to_string())
        }
    };

    let scene = file.to_scene(name);

    let mut camera = file.camera.as_ref().map(Camera::from_desc).unwrap_or_default();
    camera.apply(&args.camera_desc());
    camera.validate().context("Invalid camera")?;

    let config = args.render_config();

    log::info!(
        "Rendering '{}' ({} triangles) at {}x{}",
        scene.name,
        scene.len(),
        camera.width(),
        camera.height()
    );

    let (framebuffer, stats) =
        render_with_stats(&camera, &scene, &config).context("Render failed")?;

    framebuffer
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!(
        "Saved {} ({} of {} pixels hit geometry)",
        args.output.display(),
        stats.hits,
        stats.rays()
    );

    Ok(())
}
