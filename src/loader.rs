//! Scene loading.
//!
//! Two sources are supported:
//!
//! - **Scene text files.** The first non-empty line is the light:
//!   `dx dy dz [r g b]` (white if the color is omitted). Every following
//!   non-empty line is one triangle: nine vertex coordinates followed by
//!   three reflectance channels in `0..=255`. Lines starting with `#` are
//!   ignored.
//! - **Wavefront OBJ files** via `tobj`, triangulated on load. The model is
//!   turned half a revolution about X so OBJ's y-up, camera-on-+z convention
//!   maps onto screen space (y down, nearer = smaller z).

use std::path::Path;

use crate::color::Color;
use crate::light::Light;
use crate::math::Vec3;
use crate::scene::{Polygon, Scene, SceneError};

/// Light used for OBJ models, which carry no lighting of their own.
pub const DEFAULT_OBJ_LIGHT: Vec3 = Vec3::new(0.0, 0.0, -1.0);

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    /// A line of a scene text file could not be understood (1-based line).
    Parse { line: usize, message: String },
    Obj(tobj::LoadError),
    Scene(SceneError),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "failed to read scene: {}", err),
            LoadError::Parse { line, message } => write!(f, "line {}: {}", line, message),
            LoadError::Obj(err) => write!(f, "failed to load OBJ: {}", err),
            LoadError::Scene(err) => write!(f, "invalid scene: {}", err),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::Obj(err) => Some(err),
            LoadError::Scene(err) => Some(err),
            LoadError::Parse { .. } => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<tobj::LoadError> for LoadError {
    fn from(err: tobj::LoadError) -> Self {
        LoadError::Obj(err)
    }
}

impl From<SceneError> for LoadError {
    fn from(err: SceneError) -> Self {
        LoadError::Scene(err)
    }
}

/// Loads a scene, choosing the format from the file extension.
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene, LoadError> {
    let path = path.as_ref();
    let is_obj = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("obj"));

    if is_obj {
        load_obj_scene(path)
    } else {
        let source = std::fs::read_to_string(path)?;
        parse_scene(&source)
    }
}

/// Parses the scene text format.
pub fn parse_scene(source: &str) -> Result<Scene, LoadError> {
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let (line_no, light_line) = lines.next().ok_or(LoadError::Parse {
        line: 1,
        message: "missing light line".to_string(),
    })?;
    let light = parse_light(line_no, light_line)?;

    let polygons = lines
        .map(|(line_no, line)| parse_polygon(line_no, line))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Scene::new(polygons, vec![light])?)
}

fn parse_light(line: usize, text: &str) -> Result<Light, LoadError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    match fields.len() {
        3 => Ok(Light::white(parse_vec3(line, &fields)?)),
        6 => Ok(Light::new(
            parse_vec3(line, &fields[..3])?,
            parse_color(line, &fields[3..])?,
        )),
        n => Err(LoadError::Parse {
            line,
            message: format!("light needs 3 or 6 fields, found {}", n),
        }),
    }
}

fn parse_polygon(line: usize, text: &str) -> Result<Polygon, LoadError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != 12 {
        return Err(LoadError::Parse {
            line,
            message: format!("polygon needs 12 fields, found {}", fields.len()),
        });
    }
    let vertices = [
        parse_vec3(line, &fields[0..3])?,
        parse_vec3(line, &fields[3..6])?,
        parse_vec3(line, &fields[6..9])?,
    ];
    Ok(Polygon::new(vertices, parse_color(line, &fields[9..12])?))
}

fn parse_vec3(line: usize, fields: &[&str]) -> Result<Vec3, LoadError> {
    let mut xyz = [0.0f32; 3];
    for (out, field) in xyz.iter_mut().zip(fields) {
        *out = field.parse().map_err(|_| LoadError::Parse {
            line,
            message: format!("expected a number, found {:?}", field),
        })?;
    }
    Ok(Vec3::new(xyz[0], xyz[1], xyz[2]))
}

fn parse_color(line: usize, fields: &[&str]) -> Result<Color, LoadError> {
    let mut rgb = [0u8; 3];
    for (out, field) in rgb.iter_mut().zip(fields) {
        *out = field.parse().map_err(|_| LoadError::Parse {
            line,
            message: format!("expected a color channel 0-255, found {:?}", field),
        })?;
    }
    Ok(Color::new(rgb[0], rgb[1], rgb[2]))
}

/// Loads every mesh of an OBJ file as one scene lit by [`DEFAULT_OBJ_LIGHT`].
///
/// Reflectance comes from each mesh's material diffuse color, or light grey
/// when the mesh has none.
pub fn load_obj_scene<P: AsRef<Path>>(path: P) -> Result<Scene, LoadError> {
    let (models, materials) = tobj::load_obj(
        path.as_ref(),
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
    )?;
    let materials = materials.unwrap_or_else(|err| {
        log::warn!("ignoring OBJ materials: {}", err);
        Vec::new()
    });

    let mut polygons = Vec::new();
    for model in &models {
        let mesh = &model.mesh;
        let reflectance = mesh
            .material_id
            .and_then(|id| materials.get(id))
            .and_then(|m| m.diffuse)
            .map(|d| Color::from_channels(d.map(|c| c * 255.0)))
            .unwrap_or(Color::LIGHT_GREY);

        let vertex = |index: u32| {
            let i = index as usize * 3;
            Vec3::new(
                mesh.positions[i],
                -mesh.positions[i + 1],
                -mesh.positions[i + 2],
            )
        };
        for face in mesh.indices.chunks_exact(3) {
            polygons.push(Polygon::new(
                [vertex(face[0]), vertex(face[1]), vertex(face[2])],
                reflectance,
            ));
        }
    }
    log::debug!(
        "loaded {} triangles from {} OBJ meshes",
        polygons.len(),
        models.len()
    );

    Ok(Scene::new(polygons, vec![Light::white(DEFAULT_OBJ_LIGHT)])?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scene() {
        let source = "\
# a lone triangle
0 0 -1

0 0 0  0 4 0  4 0 0  255 128 0
";
        let scene = parse_scene(source).unwrap();
        assert_eq!(scene.lights(), &[Light::white(Vec3::BACK)]);
        assert_eq!(scene.polygons().len(), 1);
        let p = scene.polygons()[0];
        assert_eq!(p.vertices[1], Vec3::new(0.0, 4.0, 0.0));
        assert_eq!(p.reflectance, Color::new(255, 128, 0));
    }

    #[test]
    fn test_parse_colored_light() {
        let scene = parse_scene("1 -1 -1 255 0 0\n").unwrap();
        assert_eq!(scene.lights()[0].color, Color::new(255, 0, 0));
        assert!(scene.polygons().is_empty());
    }

    #[test]
    fn test_parse_reports_line_number() {
        let source = "0 0 -1\n0 0 0 1 1 1 2 2 2 10 10 10\n0 0 0 1 1 1 2 2 2 10 10\n";
        match parse_scene(source) {
            Err(LoadError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_bad_channel() {
        let source = "0 0 -1\n0 0 0 1 1 1 2 2 2 10 300 10\n";
        assert!(matches!(
            parse_scene(source),
            Err(LoadError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn test_parse_empty_source() {
        assert!(matches!(
            parse_scene("\n# nothing\n"),
            Err(LoadError::Parse { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_non_finite_vertex() {
        let source = "0 0 -1\n0 0 0 inf 1 1 2 2 2 10 10 10\n";
        assert!(matches!(
            parse_scene(source),
            Err(LoadError::Scene(SceneError::NonFiniteVertex { polygon: 0 }))
        ));
    }

    #[test]
    fn test_load_obj_flips_into_screen_space() {
        let path = std::env::temp_dir().join(format!("flatshade-{}.obj", std::process::id()));
        std::fs::write(&path, "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
        let scene = load_scene(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(scene.polygons().len(), 1);
        let p = scene.polygons()[0];
        assert_eq!(p.vertices[2], Vec3::new(0.0, -1.0, -0.0));
        assert_eq!(p.reflectance, Color::LIGHT_GREY);
        // A counter-clockwise OBJ face toward +z stays front-facing.
        assert!(!crate::render::is_hidden(&p).unwrap());
    }
}
