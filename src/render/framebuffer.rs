//! Frame buffer abstraction for 2D pixel access.
//!
//! Provides a view into color and depth buffers with bounds-checked access.
//! Both buffers are row-major: pixel `(x, y)` lives at `y * width + x`.

use crate::color::Color;

/// A view into color and depth buffers.
///
/// Wraps 1D slices with width/height metadata to enable safe 2D pixel access.
/// This is a borrowed view, not an owning type - it's meant to be created
/// temporarily when you need to pass buffers + dimensions together.
///
/// # Depth Buffer
///
/// The depth buffer stores scene-space z. Smaller values are nearer the
/// viewer, and a pristine buffer holds `+inf` everywhere.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [Color],
    depth_buffer: &'a mut [f32],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view from buffer slices and dimensions.
    ///
    /// # Panics
    /// Panics if buffer lengths don't match width * height
    pub fn new(
        color_buffer: &'a mut [Color],
        depth_buffer: &'a mut [f32],
        width: u32,
        height: u32,
    ) -> Self {
        let size = width as usize * height as usize;
        assert_eq!(
            color_buffer.len(),
            size,
            "Color buffer size doesn't match dimensions"
        );
        assert_eq!(
            depth_buffer.len(),
            size,
            "Depth buffer size doesn't match dimensions"
        );
        Self {
            color_buffer,
            depth_buffer,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Set a pixel at (x, y) with depth testing.
    ///
    /// The pixel is only written if `depth` is strictly less than the stored
    /// depth, so on a tie the earlier write is kept. Out-of-bounds
    /// coordinates are dropped. Returns whether the pixel was written.
    #[inline]
    pub fn set_pixel_with_depth(&mut self, x: i32, y: i32, depth: f32, color: Color) -> bool {
        match self.index(x, y) {
            Some(idx) if depth < self.depth_buffer[idx] => {
                self.depth_buffer[idx] = depth;
                self.color_buffer[idx] = color;
                true
            }
            _ => false,
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|idx| self.color_buffer[idx])
    }

    /// Get the depth at (x, y), or None if out of bounds.
    #[inline]
    pub fn depth(&self, x: i32, y: i32) -> Option<f32> {
        self.index(x, y).map(|idx| self.depth_buffer[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_test_is_strict() {
        let mut colors = vec![Color::WHITE; 4];
        let mut depths = vec![f32::INFINITY; 4];
        let mut fb = FrameBuffer::new(&mut colors, &mut depths, 2, 2);

        assert!(fb.set_pixel_with_depth(1, 0, 5.0, Color::new(1, 0, 0)));
        // Same depth: first writer keeps the pixel.
        assert!(!fb.set_pixel_with_depth(1, 0, 5.0, Color::new(2, 0, 0)));
        assert!(!fb.set_pixel_with_depth(1, 0, 6.0, Color::new(3, 0, 0)));
        assert!(fb.set_pixel_with_depth(1, 0, -1.0, Color::new(4, 0, 0)));

        assert_eq!(fb.pixel(1, 0), Some(Color::new(4, 0, 0)));
        assert_eq!(fb.depth(1, 0), Some(-1.0));
        assert_eq!(colors[1], Color::new(4, 0, 0));
    }

    #[test]
    fn test_out_of_bounds_is_dropped() {
        let mut colors = vec![Color::WHITE; 6];
        let mut depths = vec![f32::INFINITY; 6];
        let mut fb = FrameBuffer::new(&mut colors, &mut depths, 3, 2);

        for (x, y) in [(-1, 0), (3, 0), (0, -1), (0, 2), (i32::MAX, i32::MIN)] {
            assert!(!fb.set_pixel_with_depth(x, y, 0.0, Color::BLACK));
            assert_eq!(fb.pixel(x, y), None);
        }
        assert!(colors.iter().all(|&c| c == Color::WHITE));
    }

    #[test]
    fn test_row_major_layout() {
        let mut colors = vec![Color::WHITE; 6];
        let mut depths = vec![f32::INFINITY; 6];
        let mut fb = FrameBuffer::new(&mut colors, &mut depths, 3, 2);
        fb.set_pixel_with_depth(2, 1, 0.0, Color::BLACK);
        assert_eq!(colors[5], Color::BLACK);
    }
}
