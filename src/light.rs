//! Directional lights.

use crate::color::Color;
use crate::math::{GeometryError, Transform, Vec3};

/// A light that illuminates the scene uniformly from one direction.
///
/// `direction` points from the surface towards the light; it is stored as
/// given and normalized when shading, so its magnitude is irrelevant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub direction: Vec3,
    pub color: Color,
}

impl Light {
    pub fn new(direction: Vec3, color: Color) -> Self {
        Light { direction, color }
    }

    /// White light from `direction`.
    pub fn white(direction: Vec3) -> Self {
        Light::new(direction, Color::WHITE)
    }

    /// Cosine of the angle between a unit surface normal and this light,
    /// clamped at zero so light behind the surface contributes nothing.
    pub fn incidence(&self, unit_normal: Vec3) -> Result<f32, GeometryError> {
        let d = self.direction.normalize()?;
        Ok(unit_normal.dot(d).clamp(-1.0, 1.0).max(0.0))
    }

    pub fn transformed(&self, transform: &Transform) -> Self {
        Light {
            direction: transform.apply_direction(self.direction),
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_direct_illumination() {
        let light = Light::white(Vec3::new(0.0, 0.0, -3.0));
        let normal = Vec3::new(0.0, 0.0, -1.0);
        assert_relative_eq!(light.incidence(normal).unwrap(), 1.0);
    }

    #[test]
    fn test_no_illumination_from_behind() {
        let light = Light::white(Vec3::new(0.0, 0.0, -1.0));
        let normal = Vec3::new(0.0, 0.0, 1.0);
        assert_eq!(light.incidence(normal).unwrap(), 0.0);
    }

    #[test]
    fn test_angled_illumination() {
        let light = Light::white(Vec3::new(0.0, 1.0, 0.0));
        let normal = Vec3::new(0.0, 1.0, 1.0).normalize().unwrap();
        // cos(45) ≈ 0.707
        assert!((light.incidence(normal).unwrap() - 0.707).abs() < 0.01);
    }

    #[test]
    fn test_zero_direction_is_degenerate() {
        let light = Light::white(Vec3::ZERO);
        assert!(light.incidence(Vec3::FORWARD).is_err());
    }
}
