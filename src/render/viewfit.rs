//! View-fit: move the scene so its bounding box touches the canvas origin,
//! then shrink it uniformly if it is larger than the canvas.

use crate::config::RenderConfig;
use crate::math::{Transform, Vec3};
use crate::scene::{Polygon, Scene};

/// Axis-aligned rectangle in the x/y plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }
}

/// Rectangle covering every vertex's x and y (z is ignored), or `None` for
/// a scene without polygons.
pub fn bounding_box(polygons: &[Polygon]) -> Option<BoundingBox> {
    let mut vertices = polygons.iter().flat_map(|p| p.vertices.iter());
    let first = vertices.next()?;

    let (mut min_x, mut max_x) = (first.x, first.x);
    let (mut min_y, mut max_y) = (first.y, first.y);
    for v in vertices {
        min_x = min_x.min(v.x);
        max_x = max_x.max(v.x);
        min_y = min_y.min(v.y);
        max_y = max_y.max(v.y);
    }

    Some(BoundingBox {
        x: min_x,
        y: min_y,
        width: max_x - min_x,
        height: max_y - min_y,
    })
}

/// Shifts every vertex so the bounding box's top-left corner lands on the
/// origin. Lights are directions and are not translated.
pub fn translate_scene(scene: &Scene) -> Scene {
    let Some(bounds) = bounding_box(scene.polygons()) else {
        return scene.clone();
    };
    let offset = Vec3::new(-bounds.x, -bounds.y, 0.0);
    scene.map_vertices(&Transform::translation(offset))
}

/// Shrinks the scene uniformly until it fits the canvas.
///
/// Scenes that already fit are returned unchanged, so small models keep
/// their size. Light directions are left unscaled: shading only uses their
/// direction, and shrinking a short one could make it look degenerate.
pub fn scale_scene(scene: &Scene, config: &RenderConfig) -> Scene {
    let Some(bounds) = bounding_box(scene.polygons()) else {
        return scene.clone();
    };
    let overflow = (bounds.width / config.width as f32).max(bounds.height / config.height as f32);
    if overflow <= 1.0 {
        return scene.clone();
    }

    let factor = 1.0 / overflow;
    log::debug!(
        "scene is {}x{}, scaling by {} to fit {}x{} canvas",
        bounds.width,
        bounds.height,
        factor,
        config.width,
        config.height
    );
    scene.map_vertices(&Transform::scale(factor))
}

/// Translate then scale: maps scene coordinates into canvas space.
pub fn fit_to_canvas(scene: &Scene, config: &RenderConfig) -> Scene {
    scale_scene(&translate_scene(scene), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::light::Light;
    use approx::assert_relative_eq;

    fn spread_scene() -> Scene {
        Scene::new(
            vec![
                Polygon::new(
                    [
                        Vec3::new(-5.0, 2.0, 1.0),
                        Vec3::new(0.0, 10.0, 0.0),
                        Vec3::new(3.0, 4.0, -2.0),
                    ],
                    Color::WHITE,
                ),
                Polygon::new(
                    [
                        Vec3::new(10.0, 20.0, 0.0),
                        Vec3::new(4.0, 3.0, 0.0),
                        Vec3::new(1.0, 15.0, 5.0),
                    ],
                    Color::WHITE,
                ),
            ],
            vec![Light::white(Vec3::new(0.0, 0.0, -2.0))],
        )
        .unwrap()
    }

    #[test]
    fn test_bounding_box() {
        let b = bounding_box(spread_scene().polygons()).unwrap();
        assert_eq!(
            b,
            BoundingBox {
                x: -5.0,
                y: 2.0,
                width: 15.0,
                height: 18.0
            }
        );
    }

    #[test]
    fn test_bounding_box_empty() {
        assert_eq!(bounding_box(&[]), None);
    }

    #[test]
    fn test_translate_moves_box_to_origin() {
        let scene = spread_scene();
        let moved = translate_scene(&scene);
        let b = bounding_box(moved.polygons()).unwrap();
        assert_eq!((b.x, b.y), (0.0, 0.0));
        assert_eq!((b.width, b.height), (15.0, 18.0));
        // z and lights untouched
        assert_eq!(moved.polygons()[0].vertices[2].z, -2.0);
        assert_eq!(moved.lights(), scene.lights());
    }

    #[test]
    fn test_small_scene_is_not_scaled() {
        let scene = translate_scene(&spread_scene());
        let config = RenderConfig::new(100, 100);
        assert_eq!(scale_scene(&scene, &config), scene);
    }

    #[test]
    fn test_large_scene_is_scaled_to_fit() {
        let scene = translate_scene(&spread_scene());
        // 15 wide fits, 18 tall does not: factor 9 / 18
        let config = RenderConfig::new(20, 9);
        let scaled = scale_scene(&scene, &config);
        let b = bounding_box(scaled.polygons()).unwrap();
        assert_relative_eq!(b.height, 9.0, epsilon = 1e-5);
        assert_relative_eq!(b.width, 7.5, epsilon = 1e-5);
        assert!(b.max_x() <= config.width as f32);
        assert_eq!(scaled.lights(), scene.lights());
    }

    #[test]
    fn test_short_light_survives_large_downscale() {
        let scene = Scene::new(
            vec![Polygon::new(
                [Vec3::ZERO, Vec3::new(0.0, 6.0e6, 0.0), Vec3::new(6.0e6, 0.0, 0.0)],
                Color::WHITE,
            )],
            vec![Light::white(Vec3::new(0.0, 0.0, -0.01))],
        )
        .unwrap();
        let scaled = scale_scene(&scene, &RenderConfig::new(600, 600));
        let light = scaled.lights()[0];
        assert_eq!(light.direction, Vec3::new(0.0, 0.0, -0.01));
        assert!(light.direction.normalize().is_ok());
    }

    #[test]
    fn test_fit_to_canvas_keeps_input() {
        let scene = spread_scene();
        let before = scene.clone();
        let fitted = fit_to_canvas(&scene, &RenderConfig::new(10, 10));
        assert_eq!(scene, before);
        let b = bounding_box(fitted.polygons()).unwrap();
        assert!(b.max_x() <= 10.0 + 1e-4 && b.max_y() <= 10.0 + 1e-4);
    }
}
