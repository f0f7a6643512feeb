//! Ballpit - thousands of colored balls bouncing inside a fixed window, built with Bevy
//!
//! This crate provides the ball components, physics, rendering and loop lifecycle,
//! plus headless tooling for simulation runs and scenario tests.

// Core modules
pub mod app_builder;
pub mod constants;
pub mod helpers;
pub mod lifecycle;
pub mod palette;
pub mod settings;
pub mod simulation;
pub mod testing;

// Pit modules
pub mod ball;
pub mod render;

// Re-export commonly used types for convenience
pub use app_builder::{HeadlessAppBuilder, add_simulation};
pub use ball::{
    Ball, BallRng, DrawOrder, PitStats, Reflection, SpawnParams, random_ball, spawn_population,
};
pub use constants::*;
pub use helpers::*;
pub use lifecycle::LoopState;
pub use palette::NamedColor;
pub use settings::{PitConfig, Viewport};
