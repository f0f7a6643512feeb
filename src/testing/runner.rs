//! Scenario execution engine

use bevy::prelude::*;
use bevy::window::WindowCloseRequested;
use std::collections::HashMap;

use crate::app_builder::HeadlessAppBuilder;
use crate::ball::{Ball, DrawOrder, PitStats};
use crate::lifecycle::LoopState;
use crate::palette::NamedColor;
use crate::settings::PitConfig;

use super::assertions::{AssertionError, BallSnapshot, WorldState, check_state};
use super::parser::TestDefinition;

/// Frames simulated when a scenario has no state assertions
const DEFAULT_FRAMES: u64 = 60;

/// Result of running a scenario
#[derive(Debug)]
pub enum TestResult {
    Pass { frames: u64 },
    Fail { error: AssertionError },
    Error { message: String },
}

/// Run a single scenario and return the result
pub fn run_test(test: &TestDefinition) -> TestResult {
    let pit = PitConfig {
        width: test.setup.width,
        height: test.setup.height,
        ball_count: 0,
        seed: Some(0),
        ..default()
    };
    if let Err(message) = pit.validate() {
        return TestResult::Error { message };
    }

    let mut app = HeadlessAppBuilder::new().with_config(pit).build();
    // Startup
    app.update();

    let mut ids: HashMap<Entity, String> = HashMap::new();
    for (i, def) in test.setup.balls.iter().enumerate() {
        if def.radius <= 0.0 {
            return TestResult::Error {
                message: format!("Ball '{}' has non-positive radius {}", def.id, def.radius),
            };
        }
        let ball = Ball::new(
            Vec2::new(def.x, def.y),
            Vec2::new(def.velocity_x, def.velocity_y),
            def.radius,
            NamedColor::ALL[i % NamedColor::ALL.len()],
        );
        let entity = app.world_mut().spawn((ball, DrawOrder(i as u32))).id();
        ids.insert(entity, def.id.clone());
    }

    let max_frame = test
        .expect
        .state
        .iter()
        .map(|s| s.after_frame)
        .max()
        .unwrap_or(DEFAULT_FRAMES);

    for frame in 0..=max_frame {
        if frame > 0 {
            if test.setup.close_at_frame == Some(frame) {
                request_close(&mut app);
            }
            app.world_mut().run_schedule(FixedUpdate);
        }

        let due: Vec<_> = test
            .expect
            .state
            .iter()
            .filter(|s| s.after_frame == frame)
            .collect();
        if due.is_empty() {
            continue;
        }

        let state = extract_world_state(app.world_mut(), &ids);
        for assertion in due {
            if let Err(error) = check_state(assertion, &state) {
                return TestResult::Fail {
                    error: AssertionError {
                        message: format!("after frame {}: {}", frame, error.message),
                        ..error
                    },
                };
            }
        }
    }

    TestResult::Pass { frames: max_frame }
}

/// Send a window close request and let the loop settle into `Closing`
fn request_close(app: &mut App) {
    app.world_mut().write_message(WindowCloseRequested {
        window: Entity::PLACEHOLDER,
    });
    // One update to observe the request, one to apply the transition
    app.update();
    app.update();
}

fn extract_world_state(world: &mut World, ids: &HashMap<Entity, String>) -> WorldState {
    let mut balls = HashMap::new();
    let mut query = world.query::<(Entity, &Ball)>();
    for (entity, ball) in query.iter(world) {
        if let Some(id) = ids.get(&entity) {
            balls.insert(
                id.clone(),
                BallSnapshot {
                    x: ball.position.x,
                    y: ball.position.y,
                    velocity_x: ball.velocity.x,
                    velocity_y: ball.velocity.y,
                },
            );
        }
    }

    let loop_state = match world.resource::<State<LoopState>>().get() {
        LoopState::Running => "running",
        LoopState::Closing => "closing",
    };

    WorldState {
        balls,
        frames: world.resource::<PitStats>().frames,
        loop_state: loop_state.to_string(),
    }
}
