//! Lambertian flat shading.
//!
//! The color of a polygon is its reflectance modulated by the ambient light
//! plus every directional light weighted by the cosine of its incidence:
//!
//! ```text
//! out_c = (ambient_c + Σ light_c * max(0, n · d)) * reflectance_c
//! ```
//!
//! Light and ambient channels are intensities in `[0, 1]`; reflectance stays
//! in `0..=255`. Each output channel is rounded and clamped on its own, since
//! several bright lights can push the sum past 255.

use super::visibility::unit_normal;
use crate::color::Color;
use crate::light::Light;
use crate::math::GeometryError;
use crate::scene::Polygon;

/// Shades a polygon under `lights` and `ambient`.
///
/// Fails only when the polygon has no normal. A light with a zero direction
/// is dropped from the sum and logged.
pub fn shade(polygon: &Polygon, lights: &[Light], ambient: Color) -> Result<Color, GeometryError> {
    let normal = unit_normal(polygon)?;
    let mut intensity = ambient.intensities();

    for light in lights {
        let cos_theta = match light.incidence(normal) {
            Ok(cos_theta) => cos_theta,
            Err(err) => {
                log::warn!("skipping light: {}", err);
                continue;
            }
        };
        for (total, channel) in intensity.iter_mut().zip(light.color.intensities()) {
            *total += channel * cos_theta;
        }
    }

    let reflectance = polygon.reflectance.channels();
    Ok(Color::from_channels([
        intensity[0] * reflectance[0] as f32,
        intensity[1] * reflectance[1] as f32,
        intensity[2] * reflectance[2] as f32,
    ]))
}
