//! Ball physics: Euler step plus wall reflection

use bevy::prelude::*;

use crate::ball::components::*;
use crate::settings::Viewport;

impl Ball {
    /// Advance one frame and reflect off the viewport walls.
    ///
    /// Horizontal hits only flip `velocity.x`; the ball may sit past the wall
    /// for a frame. Vertical hits flip `velocity.y` and clamp `position.y`
    /// back inside `[radius, height - radius]`.
    pub fn step(&mut self, width: u32, height: u32) -> Reflection {
        let width = width as f32;
        let height = height as f32;
        let mut reflection = Reflection::default();

        self.position += self.velocity;

        if self.position.x + self.radius >= width || self.position.x - self.radius <= 0.0 {
            self.velocity.x = -self.velocity.x;
            reflection.x = true;
        }

        let hit_bottom = self.position.y + self.radius >= height;
        let hit_top = self.position.y - self.radius <= 0.0;
        if hit_bottom || hit_top {
            self.velocity.y = -self.velocity.y;
            reflection.y = true;
            if hit_bottom {
                self.position.y = height - self.radius;
            } else {
                self.position.y = self.radius;
            }
        }

        reflection
    }
}

/// Advance every ball by one frame
pub fn step_balls(
    viewport: Res<Viewport>,
    mut stats: ResMut<PitStats>,
    mut query: Query<&mut Ball>,
) {
    for mut ball in &mut query {
        let reflection = ball.step(viewport.width, viewport.height);
        stats.record(reflection);
    }
    stats.frames += 1;
}
