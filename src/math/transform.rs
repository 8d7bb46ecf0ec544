//! 4x4 homogeneous transformation matrix using column-vector convention.
//!
//! # Convention
//! - Vectors are **column vectors** on the right: `Transform * Vec3`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A
//! - Rotations are right-handed: a positive X rotation turns +Y towards +Z
//!
//! Rotation and scale factories are linear (they fix the origin). Translation
//! is its own factory and the view-fit stage applies it as a separate step.

use std::ops::Mul;

use super::vec3::Vec3;

/// 4x4 matrix stored as `data[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    data: [[f32; 4]; 4],
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn new(data: [[f32; 4]; 4]) -> Self {
        Transform { data }
    }

    pub fn identity() -> Self {
        Transform::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a translation by `offset`.
    pub fn translation(offset: Vec3) -> Self {
        Transform::new([
            [1.0, 0.0, 0.0, offset.x],
            [0.0, 1.0, 0.0, offset.y],
            [0.0, 0.0, 1.0, offset.z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a uniform scale about the origin.
    pub fn scale(factor: f32) -> Self {
        Transform::new([
            [factor, 0.0, 0.0, 0.0],
            [0.0, factor, 0.0, 0.0],
            [0.0, 0.0, factor, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation around the X axis (radians).
    pub fn rotation_x(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Transform::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation around the Y axis (radians).
    pub fn rotation_y(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Transform::new([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Applies the transform to a point (w = 1), so translation takes effect.
    pub fn apply(&self, p: Vec3) -> Vec3 {
        let d = &self.data;
        Vec3::new(
            d[0][0] * p.x + d[0][1] * p.y + d[0][2] * p.z + d[0][3],
            d[1][0] * p.x + d[1][1] * p.y + d[1][2] * p.z + d[1][3],
            d[2][0] * p.x + d[2][1] * p.y + d[2][2] * p.z + d[2][3],
        )
    }

    /// Applies the transform to a direction (w = 0), ignoring translation.
    pub fn apply_direction(&self, v: Vec3) -> Vec3 {
        let d = &self.data;
        Vec3::new(
            d[0][0] * v.x + d[0][1] * v.y + d[0][2] * v.z,
            d[1][0] * v.x + d[1][1] * v.y + d[1][2] * v.z,
            d[2][0] * v.x + d[2][1] * v.y + d[2][2] * v.z,
        )
    }
}

/// Matrix multiplication: `self * rhs` applies `rhs` first.
impl Mul<Transform> for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];

        for (row, out) in result.iter_mut().enumerate() {
            for (col, cell) in out.iter_mut().enumerate() {
                *cell = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col]
                    + self.data[row][2] * rhs.data[2][col]
                    + self.data[row][3] * rhs.data[3][col];
            }
        }

        Transform::new(result)
    }
}

/// Transform a point: `Transform * Vec3`.
impl Mul<Vec3> for Transform {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Self::Output {
        self.apply(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-5);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-5);
        assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-5);
    }

    #[test]
    fn test_identity_leaves_point_alone() {
        let p = Vec3::new(1.0, -2.0, 3.5);
        assert_eq!(Transform::identity() * p, p);
    }

    #[test]
    fn test_rotation_x_turns_up_into_forward() {
        let p = Transform::rotation_x(FRAC_PI_2).apply(Vec3::UP);
        assert_vec_eq(p, Vec3::FORWARD);
    }

    #[test]
    fn test_rotation_y_turns_forward_into_right() {
        let p = Transform::rotation_y(FRAC_PI_2).apply(Vec3::FORWARD);
        assert_vec_eq(p, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_composition_order_matters() {
        let rx = Transform::rotation_x(FRAC_PI_2);
        let ry = Transform::rotation_y(FRAC_PI_2);
        let p = Vec3::UP;
        // X first then Y: up -> forward -> right
        assert_vec_eq((ry * rx).apply(p), Vec3::new(1.0, 0.0, 0.0));
        // Y first then X: up stays up under Y, then -> forward
        assert_vec_eq((rx * ry).apply(p), Vec3::FORWARD);
    }

    #[test]
    fn test_translation_moves_points_not_directions() {
        let t = Transform::translation(Vec3::new(5.0, -2.0, 0.0));
        assert_eq!(t.apply(Vec3::ONE), Vec3::new(6.0, -1.0, 1.0));
        assert_eq!(t.apply_direction(Vec3::ONE), Vec3::ONE);
    }

    #[test]
    fn test_scale_is_uniform() {
        let p = Transform::scale(0.5).apply(Vec3::new(2.0, 4.0, -8.0));
        assert_eq!(p, Vec3::new(1.0, 2.0, -4.0));
    }
}
