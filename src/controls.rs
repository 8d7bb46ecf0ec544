//! Viewer commands and how they change the scene.
//!
//! Front ends translate their own input (key presses, scripted steps) into
//! [`Command`]s; applying one is a pure function from scene to scene.

use std::f32::consts::PI;

use crate::color::Color;
use crate::math::Vec3;
use crate::scene::{add_light, remove_light, rotate_scene, Scene};

/// Angle the scene turns per rotate command (radians).
pub const ROTATION_STEP: f32 = 0.1 * PI;

/// Lights handed out by successive [`Command::AddLight`]s, cycling.
pub const LIGHT_PALETTE: [(Vec3, Color); 4] = [
    (Vec3::new(1.0, 0.0, -1.0), Color::new(255, 80, 80)),
    (Vec3::new(-1.0, 0.0, -1.0), Color::new(80, 255, 80)),
    (Vec3::new(0.0, -1.0, -1.0), Color::new(80, 80, 255)),
    (Vec3::new(0.0, 1.0, -1.0), Color::new(255, 255, 160)),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    RotateLeft,
    RotateRight,
    RotateUp,
    RotateDown,
    AddLight,
    RemoveLight,
    Quit,
}

/// Applies `command` to `scene`. `Quit` leaves the scene as it is.
pub fn apply_command(scene: &Scene, command: Command) -> Scene {
    match command {
        Command::RotateLeft => rotate_scene(scene, 0.0, -ROTATION_STEP),
        Command::RotateRight => rotate_scene(scene, 0.0, ROTATION_STEP),
        Command::RotateUp => rotate_scene(scene, ROTATION_STEP, 0.0),
        Command::RotateDown => rotate_scene(scene, -ROTATION_STEP, 0.0),
        Command::AddLight => {
            // The first light belongs to the scene itself.
            let slot = (scene.lights().len() - 1) % LIGHT_PALETTE.len();
            let (direction, color) = LIGHT_PALETTE[slot];
            add_light(scene, direction, color)
        }
        Command::RemoveLight => remove_light(scene),
        Command::Quit => scene.clone(),
    }
}
