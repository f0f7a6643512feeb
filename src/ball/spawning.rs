//! Ball population generation and the startup spawn system

use bevy::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::ball::components::*;
use crate::constants::*;
use crate::helpers::random_value;
use crate::palette::NamedColor;
use crate::settings::{PitConfig, Viewport};

/// Random source for ball generation
#[derive(Resource)]
pub struct BallRng(pub StdRng);

impl BallRng {
    /// Seeded for reproducible runs, or from entropy when `seed` is None
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

impl Default for BallRng {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Population parameters for the startup spawn
#[derive(Resource, Clone, Copy, Debug)]
pub struct SpawnParams {
    pub count: usize,
    pub radius: f32,
    pub min_speed: f32,
    pub max_speed: f32,
}

impl Default for SpawnParams {
    fn default() -> Self {
        Self {
            count: NUM_BALLS,
            radius: BALL_RADIUS,
            min_speed: BALL_MIN_SPEED,
            max_speed: BALL_MAX_SPEED,
        }
    }
}

impl From<&PitConfig> for SpawnParams {
    fn from(config: &PitConfig) -> Self {
        Self {
            count: config.ball_count,
            radius: config.ball_radius,
            min_speed: config.min_speed,
            max_speed: config.max_speed,
        }
    }
}

/// Sample one velocity component: magnitude in hundredths, then a coin flip for sign
fn random_speed(rng: &mut impl Rng, min_speed: f32, max_speed: f32) -> f32 {
    let min = (min_speed * SPEED_RESOLUTION) as i32;
    let max = (max_speed * SPEED_RESOLUTION) as i32;
    let speed = random_value(rng, min, max) as f32 / SPEED_RESOLUTION;
    if random_value(rng, 0, 1) == 1 {
        -speed
    } else {
        speed
    }
}

/// Generate one ball fully inside the viewport
pub fn random_ball(
    rng: &mut impl Rng,
    viewport: Viewport,
    radius: f32,
    min_speed: f32,
    max_speed: f32,
) -> Ball {
    let r = radius as i32;
    let x = random_value(rng, r, viewport.width as i32 - r) as f32;
    let y = random_value(rng, r, viewport.height as i32 - r) as f32;

    let velocity = Vec2::new(
        random_speed(rng, min_speed, max_speed),
        random_speed(rng, min_speed, max_speed),
    );

    let color_index = random_value(rng, 0, NamedColor::ALL.len() as i32 - 1) as usize;

    Ball::new(
        Vec2::new(x, y),
        velocity,
        radius,
        NamedColor::ALL[color_index],
    )
}

/// Generate `count` balls in insertion order
pub fn spawn_population(
    rng: &mut impl Rng,
    count: usize,
    viewport: Viewport,
    radius: f32,
    min_speed: f32,
    max_speed: f32,
) -> Vec<Ball> {
    (0..count)
        .map(|_| random_ball(rng, viewport, radius, min_speed, max_speed))
        .collect()
}

/// Startup system: spawn the whole population once
pub fn spawn_balls(
    mut commands: Commands,
    viewport: Res<Viewport>,
    params: Res<SpawnParams>,
    mut rng: ResMut<BallRng>,
) {
    let balls = spawn_population(
        &mut rng.0,
        params.count,
        *viewport,
        params.radius,
        params.min_speed,
        params.max_speed,
    );

    for (i, ball) in balls.into_iter().enumerate() {
        commands.spawn((ball, DrawOrder(i as u32)));
    }

    info!(
        "Spawned {} balls in {}x{} viewport",
        params.count, viewport.width, viewport.height
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_population_within_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let balls = spawn_population(&mut rng, 2500, Viewport::default(), 20.0, 2.0, 8.0);

        assert_eq!(balls.len(), 2500);
        for b in &balls {
            assert!((20.0..=780.0).contains(&b.position.x), "x = {}", b.position.x);
            assert!((20.0..=430.0).contains(&b.position.y), "y = {}", b.position.y);
            assert_eq!(b.radius, 20.0);
        }
    }

    #[test]
    fn test_speeds_in_range_with_both_signs() {
        let mut rng = StdRng::seed_from_u64(2);
        let balls = spawn_population(&mut rng, 1000, Viewport::default(), 20.0, 2.0, 8.0);

        let mut negative = 0;
        for b in &balls {
            for component in [b.velocity.x, b.velocity.y] {
                assert!((2.0..=8.0).contains(&component.abs()), "v = {}", component);
                let hundredths = component.abs() * SPEED_RESOLUTION;
                assert!((hundredths - hundredths.round()).abs() < 1e-3);
                if component < 0.0 {
                    negative += 1;
                }
            }
        }
        // 2000 fair coin flips
        assert!((800..=1200).contains(&negative), "negative = {}", negative);
    }

    #[test]
    fn test_colors_cover_palette() {
        let mut rng = StdRng::seed_from_u64(3);
        let balls = spawn_population(&mut rng, 2500, Viewport::default(), 20.0, 2.0, 8.0);

        for color in NamedColor::ALL {
            assert!(
                balls.iter().any(|b| b.color == color),
                "{} never drawn",
                color.name()
            );
        }
    }

    #[test]
    fn test_same_seed_same_population() {
        let a = spawn_population(
            &mut BallRng::new(Some(9)).0,
            50,
            Viewport::default(),
            20.0,
            2.0,
            8.0,
        );
        let b = spawn_population(
            &mut BallRng::new(Some(9)).0,
            50,
            Viewport::default(),
            20.0,
            2.0,
            8.0,
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_spawn_balls_system_assigns_draw_order() {
        let mut app = App::new();
        app.init_resource::<Viewport>();
        app.insert_resource(SpawnParams {
            count: 10,
            ..default()
        });
        app.insert_resource(BallRng::new(Some(4)));
        app.add_systems(Startup, spawn_balls);

        app.update();

        let mut orders: Vec<u32> = app
            .world_mut()
            .query::<(&Ball, &DrawOrder)>()
            .iter(app.world())
            .map(|(_, order)| order.0)
            .collect();
        orders.sort();
        assert_eq!(orders, (0..10).collect::<Vec<_>>());
    }
}
