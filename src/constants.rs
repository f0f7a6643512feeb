//! Compiled-in constants for ballpit
//!
//! Every tunable value of the windowed program lives here.

use bevy::prelude::*;

// =============================================================================
// WINDOW
// =============================================================================

pub const SCREEN_WIDTH: u32 = 800;
pub const SCREEN_HEIGHT: u32 = 450;
pub const WINDOW_TITLE: &str = "Ballpit - Bouncing Balls";
pub const TARGET_FPS: f64 = 60.0;

// =============================================================================
// POPULATION
// =============================================================================

pub const NUM_BALLS: usize = 2500;
pub const BALL_RADIUS: f32 = 20.0;
pub const BALL_MIN_SPEED: f32 = 2.0; // Pixels per frame, per axis
pub const BALL_MAX_SPEED: f32 = 8.0;
/// Speeds are sampled as integers in hundredths of a pixel
pub const SPEED_RESOLUTION: f32 = 100.0;

// =============================================================================
// DRAWING
// =============================================================================

/// Depth step between consecutive balls so later balls draw on top
pub const DRAW_ORDER_STEP: f32 = 0.0001;

pub const BACKGROUND_COLOR: Color = Color::srgb(0.961, 0.961, 0.961); // Ray white
pub const TEXT_COLOR: Color = Color::srgb(0.314, 0.314, 0.314); // Dark gray

// =============================================================================
// STATUS LINE
// =============================================================================

pub const STATUS_TEXT: &str = "Rust Version - Entity Component System";
pub const STATUS_TEXT_POS: Vec2 = Vec2::new(10.0, 10.0);
pub const UI_TEXT_SIZE: f32 = 20.0;
