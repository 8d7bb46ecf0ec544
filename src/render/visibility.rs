//! Back-face culling.

use crate::math::{GeometryError, Vec3};
use crate::scene::Polygon;

/// Unit normal of a polygon from its stored winding:
/// `normalize((v1 - v0) x (v2 - v1))`.
///
/// Collinear or duplicate vertices give a zero cross product and fail.
pub fn unit_normal(polygon: &Polygon) -> Result<Vec3, GeometryError> {
    let [a, b, c] = polygon.vertices;
    (b - a).cross(c - b).normalize()
}

/// Whether the polygon faces away from the viewer and should be culled.
///
/// A polygon is hidden iff its unit normal has a strictly positive z
/// component; a normal lying exactly in the view plane counts as visible.
pub fn is_hidden(polygon: &Polygon) -> Result<bool, GeometryError> {
    Ok(unit_normal(polygon)?.z > 0.0)
}
