//! Depth-buffered compositing of edge lists.

use super::edge_list::{round_to_pixel, EdgeList};
use super::framebuffer::FrameBuffer;
use crate::color::Color;

/// Fills one triangle's edge list into the frame buffer with a z-test.
///
/// Scanlines run from `start_y` up to but not including `end_y`, and each
/// span covers `round(left_x)..round(right_x)`, also end-exclusive, so
/// triangles sharing an edge never paint the same pixel twice. Depth is
/// interpolated linearly across the span starting from `left_z`.
///
/// Rows with a missing side or zero width contribute nothing. A row whose
/// boundaries arrive swapped is filled from the smaller x. Returns the
/// number of pixels written.
pub fn composite(buffer: &mut FrameBuffer, edges: &EdgeList, color: Color) -> usize {
    let width = buffer.width() as i32;
    let height = buffer.height() as i32;
    let mut written = 0;

    for y in edges.start_y()..edges.end_y() {
        if y < 0 || y >= height {
            continue;
        }
        let Some(row) = edges.row(y) else {
            continue;
        };
        if !row.is_complete() {
            continue;
        }

        let (left_x, left_z, right_x, right_z) = if row.left_x <= row.right_x {
            (row.left_x, row.left_z, row.right_x, row.right_z)
        } else {
            (row.right_x, row.right_z, row.left_x, row.left_z)
        };

        let span = right_x - left_x;
        if span < f32::EPSILON {
            continue;
        }
        let z_slope = (right_z - left_z) / span;

        let first_x = round_to_pixel(left_x);
        let end_x = round_to_pixel(right_x).min(width);
        let start_x = first_x.max(0);

        // i64: `first_x` saturates to i32::MIN for far-off-canvas boundaries.
        let skipped = i64::from(start_x) - i64::from(first_x);
        let mut z = left_z + skipped as f32 * z_slope;
        for x in start_x..end_x {
            if buffer.set_pixel_with_depth(x, y, z, color) {
                written += 1;
            }
            z += z_slope;
        }
    }

    written
}
