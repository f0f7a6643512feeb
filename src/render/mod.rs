//! Render step: background clear, ball circles, status line

mod balls;
mod hud;

pub use balls::*;
pub use hud::*;

use bevy::prelude::*;

/// Orthographic 2D camera; one world unit per pixel
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
