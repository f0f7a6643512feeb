//! App settings built from the compiled-in constants
//!
//! The windowed program always runs with `PitConfig::default()`. Headless
//! tools start from the same defaults and override individual fields.

use bevy::prelude::*;
use serde::Serialize;

use crate::constants::*;

/// Everything the app builder needs to assemble a ball pit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PitConfig {
    pub width: u32,
    pub height: u32,
    pub ball_count: usize,
    pub ball_radius: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    /// RNG seed (None = seeded from entropy)
    pub seed: Option<u64>,
}

impl Default for PitConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            ball_count: NUM_BALLS,
            ball_radius: BALL_RADIUS,
            min_speed: BALL_MIN_SPEED,
            max_speed: BALL_MAX_SPEED,
            seed: None,
        }
    }
}

impl PitConfig {
    pub fn viewport(&self) -> Viewport {
        Viewport {
            width: self.width,
            height: self.height,
        }
    }

    /// Reject configurations the initializer cannot sample from
    pub fn validate(&self) -> Result<(), String> {
        if self.ball_radius <= 0.0 {
            return Err(format!("Ball radius must be positive, got {}", self.ball_radius));
        }
        // Spawn coordinates are sampled as i32
        let max_side = i32::MAX as u32;
        if self.width > max_side || self.height > max_side {
            return Err(format!(
                "Viewport {}x{} exceeds the {} px limit",
                self.width, self.height, max_side
            ));
        }
        let diameter = (self.ball_radius * 2.0).ceil() as u32;
        if self.width < diameter || self.height < diameter {
            return Err(format!(
                "Viewport {}x{} is too small for radius {}",
                self.width, self.height, self.ball_radius
            ));
        }
        if self.min_speed < 0.0 || self.min_speed > self.max_speed {
            return Err(format!(
                "Invalid speed range {}..={}",
                self.min_speed, self.max_speed
            ));
        }
        Ok(())
    }
}

/// Fixed drawing surface in pixels
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}
