//! A CPU-based flat-shaded polygon renderer.
//!
//! Scenes of triangles and directional lights are fitted to the canvas,
//! back-face culled, Lambert shaded and scan-converted through per-triangle
//! edge lists into a depth-buffered color buffer. SDL2 is used only by the
//! optional viewer window; the pipeline itself never touches a display.
//!
//! # Quick Start
//!
//! ```ignore
//! use flatshade::prelude::*;
//!
//! let scene = load_scene("monkey.txt")?;
//! let mut renderer = Renderer::new(RenderConfig::new(600, 600));
//! let stats = renderer.render(&scene);
//! save_image(&renderer, "monkey.png")?;
//! ```

pub mod color;
pub mod config;
pub mod controls;
pub mod light;
pub mod loader;
pub mod math;
pub mod render;
pub mod scene;
pub mod snapshot;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use color::Color;
pub use config::RenderConfig;
pub use light::Light;
pub use loader::{load_scene, LoadError};
pub use math::{GeometryError, Transform, Vec3};
pub use render::{FrameStats, Renderer};
pub use scene::{Polygon, Scene, SceneError};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use flatshade::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::config::RenderConfig;
    pub use crate::controls::{apply_command, Command};
    pub use crate::light::Light;
    pub use crate::loader::{load_scene, parse_scene};
    pub use crate::math::{Transform, Vec3};
    pub use crate::render::{render_frame, FrameStats, Renderer};
    pub use crate::scene::{add_light, remove_light, rotate_scene, Polygon, Scene};
    pub use crate::snapshot::save_image;
}
