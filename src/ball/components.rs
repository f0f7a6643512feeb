//! Ball-related components and resources

use bevy::prelude::*;

use crate::palette::NamedColor;

/// One bouncing ball, in screen space (origin top-left, +y down)
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    pub position: Vec2,
    /// Pixels per frame
    pub velocity: Vec2,
    pub radius: f32,
    pub color: NamedColor,
}

impl Ball {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, color: NamedColor) -> Self {
        Self {
            position,
            velocity,
            radius,
            color,
        }
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// Insertion index of a ball; higher draws on top
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct DrawOrder(pub u32);

/// Which axes reflected during one physics step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reflection {
    pub x: bool,
    pub y: bool,
}

/// Running totals across all physics steps
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct PitStats {
    /// Fixed ticks in which physics ran
    pub frames: u64,
    pub reflections_x: u64,
    pub reflections_y: u64,
}

impl PitStats {
    pub fn record(&mut self, reflection: Reflection) {
        if reflection.x {
            self.reflections_x += 1;
        }
        if reflection.y {
            self.reflections_y += 1;
        }
    }

    pub fn total_reflections(&self) -> u64 {
        self.reflections_x + self.reflections_y
    }
}
