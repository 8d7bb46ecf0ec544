//! Scene model: flat-shaded triangles plus directional lights.
//!
//! A [`Scene`] is an immutable value for the duration of a frame. Every stage
//! that "changes" the scene (rotation, view-fit, light edits) returns a new
//! `Scene` and leaves its input untouched.

use crate::color::Color;
use crate::light::Light;
use crate::math::{Transform, Vec3};

/// A scene that violates the invariants the pipeline relies on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneError {
    /// Scenes must carry at least one light.
    NoLights,
    /// A vertex coordinate is NaN or infinite.
    NonFiniteVertex { polygon: usize },
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::NoLights => write!(f, "scene has no light sources"),
            SceneError::NonFiniteVertex { polygon } => {
                write!(f, "polygon {} has a non-finite vertex coordinate", polygon)
            }
        }
    }
}

impl std::error::Error for SceneError {}

/// A triangle with a single reflectance color.
///
/// Vertex order is significant: it decides the normal direction used for
/// back-face culling and which edges bound the left and right of each
/// scanline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polygon {
    pub vertices: [Vec3; 3],
    pub reflectance: Color,
}

impl Polygon {
    pub fn new(vertices: [Vec3; 3], reflectance: Color) -> Self {
        Self {
            vertices,
            reflectance,
        }
    }

    /// Returns a copy with every vertex moved by `transform`.
    pub fn transformed(&self, transform: &Transform) -> Self {
        Self {
            vertices: self.vertices.map(|v| transform.apply(v)),
            reflectance: self.reflectance,
        }
    }

    /// Same geometry with the opposite winding.
    pub fn reversed(&self) -> Self {
        let [a, b, c] = self.vertices;
        Self {
            vertices: [a, c, b],
            reflectance: self.reflectance,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    polygons: Vec<Polygon>,
    lights: Vec<Light>,
}

impl Scene {
    /// Creates a scene, rejecting one without lights or with non-finite
    /// vertices.
    pub fn new(polygons: Vec<Polygon>, lights: Vec<Light>) -> Result<Self, SceneError> {
        if lights.is_empty() {
            return Err(SceneError::NoLights);
        }
        if let Some(polygon) = polygons
            .iter()
            .position(|p| p.vertices.iter().any(|v| !v.is_finite()))
        {
            return Err(SceneError::NonFiniteVertex { polygon });
        }
        Ok(Self { polygons, lights })
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Applies `transform` to every vertex. Lights are left alone.
    pub fn map_vertices(&self, transform: &Transform) -> Self {
        Self {
            polygons: self
                .polygons
                .iter()
                .map(|p| p.transformed(transform))
                .collect(),
            lights: self.lights.clone(),
        }
    }

    /// Applies `transform` to every vertex and every light direction.
    pub fn map_all(&self, transform: &Transform) -> Self {
        Self {
            polygons: self
                .polygons
                .iter()
                .map(|p| p.transformed(transform))
                .collect(),
            lights: self.lights.iter().map(|l| l.transformed(transform)).collect(),
        }
    }

    /// Returns a copy with `light` appended.
    pub fn with_light(&self, light: Light) -> Self {
        let mut lights = self.lights.clone();
        lights.push(light);
        Self {
            polygons: self.polygons.clone(),
            lights,
        }
    }

    /// Returns a copy without the most recently added light, or `None` if
    /// that would leave the scene unlit.
    pub fn without_last_light(&self) -> Option<Self> {
        if self.lights.len() <= 1 {
            return None;
        }
        let mut lights = self.lights.clone();
        lights.pop();
        Some(Self {
            polygons: self.polygons.clone(),
            lights,
        })
    }
}

/// Rotates the whole scene to simulate the viewer moving around it.
///
/// The X rotation is applied before the Y rotation. Light directions turn
/// with the geometry so lighting stays fixed relative to the model.
pub fn rotate_scene(scene: &Scene, x_angle: f32, y_angle: f32) -> Scene {
    let rotation = Transform::rotation_y(y_angle) * Transform::rotation_x(x_angle);
    scene.map_all(&rotation)
}

/// Adds a directional light.
pub fn add_light(scene: &Scene, direction: Vec3, color: Color) -> Scene {
    scene.with_light(Light::new(direction, color))
}

/// Removes the most recently added light. The last remaining light is kept.
pub fn remove_light(scene: &Scene) -> Scene {
    match scene.without_last_light() {
        Some(scene) => scene,
        None => {
            log::warn!("refusing to remove the only light in the scene");
            scene.clone()
        }
    }
}
