use std::path::PathBuf;

use clap::Parser;
use flatshade::controls::apply_command;
use flatshade::window::{FrameLimiter, Window, WindowEvent};
use flatshade::{config, load_scene, snapshot, Color, RenderConfig, Renderer, Scene};

/// Flat-shaded polygon renderer.
/// Renders a scene file (text scene or .obj) to an image or an interactive window.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// The scene file to render
    scene_file: PathBuf,

    /// Write a single frame to this image instead of opening a window
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Canvas width in pixels
    #[clap(long, default_value_t = config::DEFAULT_WIDTH)]
    width: u32,

    /// Canvas height in pixels
    #[clap(long, default_value_t = config::DEFAULT_HEIGHT)]
    height: u32,

    /// Ambient light as R,G,B (0-255 each)
    #[clap(long, value_parser = parse_rgb)]
    ambient: Option<Color>,
}

fn parse_rgb(text: &str) -> Result<Color, String> {
    let channels = text
        .split(',')
        .map(|c| c.trim().parse::<u8>().map_err(|e| format!("{:?}: {}", c, e)))
        .collect::<Result<Vec<_>, _>>()?;
    match channels[..] {
        [r, g, b] => Ok(Color::new(r, g, b)),
        _ => Err(format!("expected R,G,B, found {:?}", text)),
    }
}

fn run_viewer(mut scene: Scene, mut renderer: Renderer) -> Result<(), String> {
    let mut window = Window::new("flatshade", renderer.width(), renderer.height())?;
    let mut limiter = FrameLimiter::new(&window);
    let mut dirty = true;

    loop {
        for event in window.poll_events() {
            match event {
                WindowEvent::Quit => return Ok(()),
                WindowEvent::Resize(w, h) => {
                    window.resize(w, h)?;
                    renderer.resize(w, h);
                    dirty = true;
                }
                WindowEvent::Command(command) => {
                    scene = apply_command(&scene, command);
                    dirty = true;
                }
            }
        }

        if dirty {
            let stats = renderer.render(&scene);
            log::debug!("{} lights, {}", scene.lights().len(), stats);
            window.present(&renderer.as_argb_bytes())?;
            dirty = false;
        }
        limiter.wait_and_get_delta(&window);
    }
}

fn main() -> Result<(), String> {
    // RUST_LOG overrides; warnings (skipped polygons, dropped lights) show by default.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let scene = load_scene(&args.scene_file)
        .map_err(|e| format!("Failed to load {}: {}", args.scene_file.display(), e))?;

    let mut render_config = RenderConfig::new(args.width, args.height);
    if let Some(ambient) = args.ambient {
        render_config = render_config.with_ambient(ambient);
    }
    let mut renderer = Renderer::new(render_config);

    match args.output {
        Some(path) => {
            let stats = renderer.render(&scene);
            snapshot::save_image(&renderer, &path)
                .map_err(|e| format!("Failed to save image: {}", e))?;
            log::info!("rendered {}", stats);
            println!("Image saved to {:?}", path);
            Ok(())
        }
        None => run_viewer(scene, renderer),
    }
}
