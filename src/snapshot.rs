//! Writing rendered frames to image files.

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::render::Renderer;

/// Copies the renderer's color buffer into an RGB image.
pub fn to_rgb_image(renderer: &Renderer) -> RgbImage {
    let width = renderer.width();
    let colors = renderer.color_buffer();
    RgbImage::from_fn(width, renderer.height(), |x, y| {
        let c = colors[(y * width + x) as usize];
        Rgb([c.r, c.g, c.b])
    })
}

/// Saves the current frame; the format follows the file extension.
pub fn save_image<P: AsRef<Path>>(renderer: &Renderer, path: P) -> Result<(), image::ImageError> {
    to_rgb_image(renderer).save(path)
}
