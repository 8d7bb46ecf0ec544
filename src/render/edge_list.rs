//! Edge-list scan conversion.
//!
//! An [`EdgeList`] records, for every integer scanline a triangle spans, the
//! x position and depth where the triangle's left and right boundaries cross
//! that scanline. It is built by walking each of the triangle's three edges
//! one scanline at a time:
//!
//! ```text
//!          v0
//!          |\          edges going down (y0 < y1) write the LEFT column
//!          | \         edges going up   (y0 > y1) write the RIGHT column
//!   left → |  \ ← right
//!          |   \
//!          v1---v2     horizontal edges are skipped
//! ```
//!
//! Assigning sides by edge direction rather than by comparing x values only
//! works when the triangle arrives in a consistent winding. For the winding
//! that survives back-face culling every row ends up with `left_x <= right_x`.
//!
//! Rows are addressed relative to `start_y`: index 0 is scanline `start_y`.

use crate::scene::Polygon;

/// Rounds half up to the nearest pixel coordinate.
#[inline]
pub fn round_to_pixel(v: f32) -> i32 {
    pixel_row(v) as i32
}

/// Round-half-up without saturating. f64 keeps `v + 0.5` exact, so values
/// just below .5 round down.
#[inline]
fn pixel_row(v: f32) -> f64 {
    (f64::from(v) + 0.5).floor()
}

/// Boundaries of one scanline. A side that no edge wrote is `NaN`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeRow {
    pub left_x: f32,
    pub left_z: f32,
    pub right_x: f32,
    pub right_z: f32,
}

impl EdgeRow {
    const UNSET: Self = Self {
        left_x: f32::NAN,
        left_z: f32::NAN,
        right_x: f32::NAN,
        right_z: f32::NAN,
    };

    /// Both sides have been written with finite values.
    pub fn is_complete(&self) -> bool {
        self.left_x.is_finite()
            && self.left_z.is_finite()
            && self.right_x.is_finite()
            && self.right_z.is_finite()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EdgeList {
    start_y: i32,
    end_y: i32,
    rows: Vec<EdgeRow>,
}

impl EdgeList {
    /// Creates an empty table for scanlines `start_y..=end_y`.
    pub fn new(start_y: i32, end_y: i32) -> Self {
        let len = (i64::from(end_y) - i64::from(start_y) + 1).max(0) as usize;
        Self {
            start_y,
            end_y,
            rows: vec![EdgeRow::UNSET; len],
        }
    }

    pub fn start_y(&self) -> i32 {
        self.start_y
    }

    /// Last scanline covered (inclusive).
    pub fn end_y(&self) -> i32 {
        self.end_y
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[EdgeRow] {
        &self.rows
    }

    /// Row for absolute scanline `y`.
    pub fn row(&self, y: i32) -> Option<&EdgeRow> {
        self.index(y).map(|i| &self.rows[i])
    }

    pub fn set_left(&mut self, y: i32, x: f32, z: f32) {
        if let Some(i) = self.index(y) {
            self.rows[i].left_x = x;
            self.rows[i].left_z = z;
        }
    }

    pub fn set_right(&mut self, y: i32, x: f32, z: f32) {
        if let Some(i) = self.index(y) {
            self.rows[i].right_x = x;
            self.rows[i].right_z = z;
        }
    }

    #[inline]
    fn index(&self, y: i32) -> Option<usize> {
        let offset = y.checked_sub(self.start_y)?;
        usize::try_from(offset).ok().filter(|&i| i < self.rows.len())
    }
}

/// Builds the edge list of a triangle.
///
/// Each non-horizontal edge `a -> b` is walked from `round(a.y)` to
/// `round(b.y)` inclusive, starting at `(a.x, a.z)` and stepping by the
/// inverse slopes `dx/dy` and `dz/dy` per scanline. Where two edges meet at
/// a vertex the shared row is written twice; the later write wins.
///
/// One row is allocated per scanline the triangle covers, so vertices are
/// expected in canvas space. Use [`compute_clipped_edge_list`] for geometry
/// that may reach far outside the canvas.
pub fn compute_edge_list(polygon: &Polygon) -> EdgeList {
    let (start_y, end_y) = scanline_bounds(polygon);
    let mut edges = EdgeList::new(start_y, end_y);
    walk_edges(polygon, &mut edges);
    edges
}

/// Like [`compute_edge_list`], but only keeps scanlines `0..=height`.
///
/// Row `height` is kept so the end-exclusive compositor sees the same rows
/// inside the canvas as it would for the unclipped list.
pub fn compute_clipped_edge_list(polygon: &Polygon, height: u32) -> EdgeList {
    let (start_y, end_y) = scanline_bounds(polygon);
    let limit = i32::try_from(height).unwrap_or(i32::MAX);
    let mut edges = EdgeList::new(start_y.max(0), end_y.min(limit));
    walk_edges(polygon, &mut edges);
    edges
}

fn scanline_bounds(polygon: &Polygon) -> (i32, i32) {
    let ys = polygon.vertices.map(|v| v.y);
    let min_y = ys.iter().copied().fold(f32::INFINITY, f32::min);
    let max_y = ys.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    (round_to_pixel(min_y), round_to_pixel(max_y))
}

/// Walks the three edges, writing only the rows `edges` holds. Rows outside
/// that range are stepped over in one jump rather than one by one.
fn walk_edges(polygon: &Polygon, edges: &mut EdgeList) {
    let vertices = polygon.vertices;
    let (low, high) = (edges.start_y(), edges.end_y());

    for i in 0..3 {
        let a = vertices[i];
        let b = vertices[(i + 1) % 3];

        let dy = b.y - a.y;
        if dy.abs() < f32::EPSILON {
            continue; // Horizontal edge: the other two bound every row
        }
        let slope_x = (b.x - a.x) / dy;
        let slope_z = (b.z - a.z) / dy;

        let from_y = round_to_pixel(a.y);
        let to_y = round_to_pixel(b.y);

        if a.y < b.y {
            let first = from_y.max(low);
            let last = to_y.min(high);
            let steps = f64::from(first) - pixel_row(a.y);
            let (mut x, mut z) = advance(a.x, a.z, slope_x, slope_z, steps);
            for y in first..=last {
                edges.set_left(y, x, z);
                x += slope_x;
                z += slope_z;
            }
        } else {
            let first = from_y.min(high);
            let last = to_y.max(low);
            let steps = pixel_row(a.y) - f64::from(first);
            let (mut x, mut z) = advance(a.x, a.z, -slope_x, -slope_z, steps);
            for y in (last..=first).rev() {
                edges.set_right(y, x, z);
                x -= slope_x;
                z -= slope_z;
            }
        }
    }
}

/// Position after `steps` scanlines along an edge.
fn advance(x: f32, z: f32, slope_x: f32, slope_z: f32, steps: f64) -> (f32, f32) {
    if steps <= 0.0 {
        return (x, z);
    }
    (
        (f64::from(x) + f64::from(slope_x) * steps) as f32,
        (f64::from(z) + f64::from(slope_z) * steps) as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::math::Vec3;
    use approx::assert_relative_eq;

    fn polygon(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> Polygon {
        Polygon::new(
            [
                Vec3::new(a[0], a[1], a[2]),
                Vec3::new(b[0], b[1], b[2]),
                Vec3::new(c[0], c[1], c[2]),
            ],
            Color::WHITE,
        )
    }

    #[test]
    fn test_round_to_pixel_rounds_half_up() {
        assert_eq!(round_to_pixel(0.5), 1);
        assert_eq!(round_to_pixel(0.49), 0);
        assert_eq!(round_to_pixel(-0.5), 0);
        assert_eq!(round_to_pixel(-0.51), -1);
        assert_eq!(round_to_pixel(0.49999997), 0);
        assert_eq!(round_to_pixel(2.4999998), 2);
    }

    #[test]
    fn test_huge_bounds_do_not_overflow() {
        let list = EdgeList::new(i32::MAX - 2, i32::MAX);
        assert_eq!(list.len(), 3);
        assert!(list.row(i32::MAX).is_some());
        let empty = EdgeList::new(i32::MAX, i32::MIN);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_clipped_list_keeps_only_canvas_rows() {
        let p = polygon([0.0, -3.0e9, 0.0], [0.0, 3.0e9, 0.0], [50.0, 0.0, 0.0]);
        let list = compute_clipped_edge_list(&p, 10);
        assert_eq!((list.start_y(), list.end_y()), (0, 10));
        assert_eq!(list.len(), 11);
        for row in list.rows() {
            assert!(row.is_complete());
            assert_relative_eq!(row.left_x, 0.0);
            assert_relative_eq!(row.right_x, 50.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_clipped_list_matches_unclipped_inside_canvas() {
        let p = polygon([2.0, -4.0, 0.0], [1.0, 12.0, 6.0], [9.0, 3.0, 2.0]);
        let full = compute_edge_list(&p);
        let clipped = compute_clipped_edge_list(&p, 8);
        for y in 0..=8 {
            let (a, b) = (full.row(y).unwrap(), clipped.row(y).unwrap());
            assert_relative_eq!(a.left_x, b.left_x, epsilon = 1e-4);
            assert_relative_eq!(a.left_z, b.left_z, epsilon = 1e-4);
            assert_relative_eq!(a.right_x, b.right_x, epsilon = 1e-4);
            assert_relative_eq!(a.right_z, b.right_z, epsilon = 1e-4);
        }
        assert!(clipped.row(-1).is_none());
        assert!(clipped.row(9).is_none());
    }

    #[test]
    fn test_rows_are_relative_to_start_y() {
        let mut list = EdgeList::new(10, 12);
        assert_eq!(list.len(), 3);
        list.set_left(10, 1.0, 2.0);
        list.set_right(12, 5.0, 6.0);
        assert_eq!(list.rows()[0].left_x, 1.0);
        assert_eq!(list.rows()[2].right_z, 6.0);
        assert_eq!(list.row(12).unwrap().right_x, 5.0);
        assert!(list.row(9).is_none());
        assert!(list.row(13).is_none());
        // Out of range writes are dropped.
        list.set_left(13, 0.0, 0.0);
        assert!(list.row(13).is_none());
    }

    #[test]
    fn test_right_triangle_boundaries() {
        let list = compute_edge_list(&polygon(
            [0.0, 0.0, 0.0],
            [0.0, 4.0, 0.0],
            [4.0, 0.0, 0.0],
        ));
        assert_eq!((list.start_y(), list.end_y()), (0, 4));
        for y in 0..=4 {
            let row = list.row(y).unwrap();
            assert!(row.is_complete());
            assert_relative_eq!(row.left_x, 0.0);
            assert_relative_eq!(row.right_x, (4 - y) as f32);
            assert!(row.left_x <= row.right_x);
        }
    }

    #[test]
    fn test_depth_is_interpolated_along_edges() {
        // Left edge runs z 0 -> 8 over 4 rows, right edge stays at 0 -> 8 too.
        let list = compute_edge_list(&polygon(
            [0.0, 0.0, 0.0],
            [0.0, 4.0, 8.0],
            [4.0, 4.0, 8.0],
        ));
        for y in 0..=4 {
            let row = list.row(y).unwrap();
            assert_relative_eq!(row.left_z, 2.0 * y as f32, epsilon = 1e-5);
            assert_relative_eq!(row.right_z, 2.0 * y as f32, epsilon = 1e-5);
            assert_relative_eq!(row.right_x, y as f32, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_negative_coordinates_index_correctly() {
        let list = compute_edge_list(&polygon(
            [-3.0, -10.0, 1.0],
            [-3.0, -6.0, 1.0],
            [1.0, -10.0, 1.0],
        ));
        assert_eq!((list.start_y(), list.end_y()), (-10, -6));
        assert_relative_eq!(list.row(-10).unwrap().right_x, 1.0);
        assert_relative_eq!(list.row(-6).unwrap().right_x, -3.0);
        assert!(list.rows().iter().all(EdgeRow::is_complete));
    }

    #[test]
    fn test_zero_height_triangle_has_single_unset_row() {
        let list = compute_edge_list(&polygon(
            [0.0, 3.0, 0.0],
            [5.0, 3.0, 0.0],
            [9.0, 3.0, 0.0],
        ));
        assert_eq!(list.len(), 1);
        assert!(!list.rows()[0].is_complete());
    }
}
