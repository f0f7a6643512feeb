//! Invariant tracking for headless runs

use serde::{Deserialize, Serialize};

use crate::ball::Ball;
use crate::settings::Viewport;

/// Allowed float error when comparing speeds
pub const SPEED_TOLERANCE: f32 = 1e-4;

/// Result of a single headless run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimReport {
    /// RFC 3339 start time
    pub started_at: String,
    pub seed: u64,
    pub ball_count: usize,
    pub width: u32,
    pub height: u32,
    pub frames: u64,
    pub reflections_x: u64,
    pub reflections_y: u64,
    /// Ball-frames where the vertical position left `[radius, height - radius]`
    pub containment_violations: u64,
    /// Largest speed change seen for any ball
    pub max_speed_drift: f32,
    /// Largest distance any ball edge sat past a side wall
    pub max_horizontal_overshoot: f32,
}

impl SimReport {
    pub fn new(seed: u64, ball_count: usize, viewport: Viewport) -> Self {
        Self {
            started_at: chrono::Utc::now().to_rfc3339(),
            seed,
            ball_count,
            width: viewport.width,
            height: viewport.height,
            frames: 0,
            reflections_x: 0,
            reflections_y: 0,
            containment_violations: 0,
            max_speed_drift: 0.0,
            max_horizontal_overshoot: 0.0,
        }
    }

    /// Check one ball after a physics step against its starting speed
    pub fn observe(&mut self, ball: &Ball, initial_speed: f32) {
        let height = self.height as f32;
        if ball.position.y < ball.radius || ball.position.y > height - ball.radius {
            self.containment_violations += 1;
        }

        let drift = (ball.speed() - initial_speed).abs();
        self.max_speed_drift = self.max_speed_drift.max(drift);

        let left = ball.radius - ball.position.x;
        let right = ball.position.x + ball.radius - self.width as f32;
        let overshoot = left.max(right).max(0.0);
        self.max_horizontal_overshoot = self.max_horizontal_overshoot.max(overshoot);
    }

    /// True when vertical containment and speed conservation held throughout
    pub fn passed(&self) -> bool {
        self.containment_violations == 0 && self.max_speed_drift <= SPEED_TOLERANCE
    }

    pub fn print_summary(&self) {
        println!(
            "Seed {} | {} balls | {}x{} | {} frames",
            self.seed, self.ball_count, self.width, self.height, self.frames
        );
        println!(
            "  Reflections: {} horizontal, {} vertical",
            self.reflections_x, self.reflections_y
        );
        println!("  Containment violations: {}", self.containment_violations);
        println!("  Max speed drift: {:.6}", self.max_speed_drift);
        println!(
            "  Max horizontal overshoot: {:.2}px",
            self.max_horizontal_overshoot
        );
        println!("  Result: {}", if self.passed() { "PASS" } else { "FAIL" });
    }
}
