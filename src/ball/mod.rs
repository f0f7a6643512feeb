//! Ball module - components, spawning, and physics systems

mod components;
mod physics;
mod spawning;

pub use components::*;
pub use physics::*;
pub use spawning::*;
