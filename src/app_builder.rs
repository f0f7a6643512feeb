//! App assembly shared by the windowed program and headless tools
//!
//! `add_simulation` registers the ball state, physics, and main loop state
//! machine. The windowed binary adds `DefaultPlugins` and the render systems
//! on top; `HeadlessAppBuilder` adds `MinimalPlugins` and the stand-ins the
//! close handling needs when there is no window.

use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use bevy::window::WindowCloseRequested;
use std::time::Duration;

use crate::ball::{BallRng, PitStats, SpawnParams, spawn_balls, step_balls};
use crate::constants::TARGET_FPS;
use crate::lifecycle::{LoopState, detect_close_request, release_and_exit};
use crate::settings::PitConfig;

/// Register ball state, physics, and the Running/Closing loop
pub fn add_simulation(app: &mut App, config: &PitConfig, fps: f64) {
    app.insert_resource(config.viewport())
        .insert_resource(SpawnParams::from(config))
        .insert_resource(BallRng::new(config.seed))
        .init_resource::<PitStats>()
        .insert_resource(Time::<Fixed>::from_hz(fps))
        .init_state::<LoopState>()
        .add_systems(Startup, spawn_balls)
        .add_systems(
            FixedUpdate,
            step_balls.run_if(in_state(LoopState::Running)),
        )
        .add_systems(
            Update,
            detect_close_request.run_if(in_state(LoopState::Running)),
        )
        .add_systems(OnEnter(LoopState::Closing), release_and_exit);
}

/// Builder for creating headless Bevy apps
pub struct HeadlessAppBuilder {
    config: PitConfig,
}

impl HeadlessAppBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            config: PitConfig::default(),
        }
    }

    /// Use a complete configuration
    pub fn with_config(mut self, config: PitConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Set how many balls are spawned at startup
    pub fn with_ball_count(mut self, count: usize) -> Self {
        self.config.ball_count = count;
        self
    }

    /// Build the app with minimal plugins and the simulation registered
    ///
    /// Startup has not run yet; call `app.update()` once to spawn the balls.
    /// Virtual time is frozen, so `app.update()` never steps physics on its
    /// own: callers advance one frame with `world.run_schedule(FixedUpdate)`.
    pub fn build(self) -> App {
        let mut app = App::new();

        app.add_plugins((
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / TARGET_FPS,
            ))),
            StatesPlugin,
        ));
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO));

        // Stand-ins for what WindowPlugin and InputPlugin would provide
        app.add_message::<WindowCloseRequested>();
        app.init_resource::<ButtonInput<KeyCode>>();

        add_simulation(&mut app, &self.config, TARGET_FPS);

        app
    }
}

impl Default for HeadlessAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
