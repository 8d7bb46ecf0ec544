//! Frame rendering.
//!
//! Provides the [`Renderer`] struct which owns the color and depth buffers
//! and runs the per-frame pipeline:
//!
//! ```text
//! scene -> view-fit -> for each polygon { cull? -> shade -> edge list -> composite }
//! ```
//!
//! Triangles are processed strictly in scene order on the calling thread.

use super::compositor::composite;
use super::edge_list::compute_clipped_edge_list;
use super::framebuffer::FrameBuffer;
use super::shading::shade;
use super::viewfit::fit_to_canvas;
use super::visibility::is_hidden;
use crate::color::Color;
use crate::config::RenderConfig;
use crate::scene::Scene;

/// What happened to the polygons of one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Polygons shaded and composited.
    pub drawn: usize,
    /// Polygons facing away from the viewer.
    pub culled: usize,
    /// Polygons skipped because they have no normal.
    pub degenerate: usize,
    /// Pixels that passed the depth test.
    pub pixels_written: usize,
}

impl std::fmt::Display for FrameStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} drawn, {} culled, {} degenerate, {} pixels",
            self.drawn, self.culled, self.degenerate, self.pixels_written
        )
    }
}

pub struct Renderer {
    config: RenderConfig,
    color_buffer: Vec<Color>,
    depth_buffer: Vec<f32>,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        let size = config.pixel_count();
        Self {
            config,
            color_buffer: vec![config.background; size],
            depth_buffer: vec![f32::INFINITY; size],
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn width(&self) -> u32 {
        self.config.width
    }

    pub fn height(&self) -> u32 {
        self.config.height
    }

    pub fn set_ambient(&mut self, ambient: Color) {
        self.config.ambient = ambient;
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.config.width = width;
        self.config.height = height;
        let size = self.config.pixel_count();
        self.color_buffer = vec![self.config.background; size];
        self.depth_buffer = vec![f32::INFINITY; size];
    }

    /// Reset color to the background and depth to infinitely far.
    pub fn clear(&mut self) {
        self.color_buffer.fill(self.config.background);
        self.depth_buffer.fill(f32::INFINITY);
    }

    /// Renders one frame of `scene` into the owned buffers.
    ///
    /// The scene itself is not modified; view-fit works on a copy.
    /// Polygons without a normal are logged and left out of the image.
    pub fn render(&mut self, scene: &Scene) -> FrameStats {
        self.clear();

        let fitted = fit_to_canvas(scene, &self.config);
        let ambient = self.config.ambient;
        let height = self.config.height;
        let mut stats = FrameStats::default();
        let mut fb = self.as_framebuffer();

        for (index, polygon) in fitted.polygons().iter().enumerate() {
            match is_hidden(polygon) {
                Ok(true) => {
                    stats.culled += 1;
                    continue;
                }
                Ok(false) => {}
                Err(err) => {
                    log::warn!("skipping polygon {}: {}", index, err);
                    stats.degenerate += 1;
                    continue;
                }
            }

            let color = match shade(polygon, fitted.lights(), ambient) {
                Ok(color) => color,
                Err(err) => {
                    log::warn!("skipping polygon {}: {}", index, err);
                    stats.degenerate += 1;
                    continue;
                }
            };

            let edges = compute_clipped_edge_list(polygon, height);
            stats.pixels_written += composite(&mut fb, &edges, color);
            stats.drawn += 1;
        }

        log::debug!("frame rendered: {}", stats);
        stats
    }

    pub fn color_buffer(&self) -> &[Color] {
        &self.color_buffer
    }

    pub fn depth_buffer(&self) -> &[f32] {
        &self.depth_buffer
    }

    /// Color at (x, y), or None if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width() && y < self.height() {
            Some(self.color_buffer[(y * self.width() + x) as usize])
        } else {
            None
        }
    }

    /// Depth at (x, y), or None if out of bounds.
    pub fn depth(&self, x: u32, y: u32) -> Option<f32> {
        if x < self.width() && y < self.height() {
            Some(self.depth_buffer[(y * self.width() + x) as usize])
        } else {
            None
        }
    }

    /// The frame as ARGB8888 words in native byte order, ready for a
    /// streaming texture.
    pub fn as_argb_bytes(&self) -> Vec<u8> {
        self.color_buffer
            .iter()
            .flat_map(|c| c.to_argb().to_ne_bytes())
            .collect()
    }

    /// Get a mutable FrameBuffer view into the color and depth buffers.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(
            &mut self.color_buffer,
            &mut self.depth_buffer,
            self.config.width,
            self.config.height,
        )
    }
}

/// Renders a single frame with a fresh renderer.
pub fn render_frame(scene: &Scene, config: RenderConfig) -> Renderer {
    let mut renderer = Renderer::new(config);
    renderer.render(scene);
    renderer
}
