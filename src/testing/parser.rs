//! TOML scenario file parsing

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::{BALL_RADIUS, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Complete scenario definition from TOML file
#[derive(Debug, Deserialize)]
pub struct TestDefinition {
    pub name: String,
    pub description: Option<String>,
    pub setup: TestSetup,
    #[serde(default)]
    pub expect: TestExpectations,
}

/// Scenario setup
#[derive(Debug, Deserialize)]
pub struct TestSetup {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Request a window close at the start of this frame
    pub close_at_frame: Option<u64>,
    #[serde(default)]
    pub balls: Vec<BallDef>,
}

fn default_width() -> u32 {
    SCREEN_WIDTH
}

fn default_height() -> u32 {
    SCREEN_HEIGHT
}

/// Ball definition for spawning
#[derive(Debug, Clone, Deserialize)]
pub struct BallDef {
    pub id: String,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub velocity_x: f32,
    #[serde(default)]
    pub velocity_y: f32,
    #[serde(default = "default_radius")]
    pub radius: f32,
}

fn default_radius() -> f32 {
    BALL_RADIUS
}

/// Expected scenario outcomes
#[derive(Debug, Default, Deserialize)]
pub struct TestExpectations {
    /// State assertions at different frames (uses [[expect.state]] TOML syntax)
    #[serde(default)]
    pub state: Vec<StateAssertion>,
}

/// State assertion after a frame
#[derive(Debug, Clone, Deserialize)]
pub struct StateAssertion {
    pub after_frame: u64,
    #[serde(default)]
    pub checks: Vec<String>,
}

/// Parse a scenario file from path
pub fn parse_test_file(path: &Path) -> Result<TestDefinition, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    toml::from_str(&content).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}
