//! Headless simulation - runs the ball pit without a window
//!
//! Drives the physics schedule directly and checks containment and speed
//! conservation on every ball after every tick.

pub mod config;
pub mod metrics;
pub mod runner;

pub use config::SimConfig;
pub use metrics::SimReport;
pub use runner::{output_reports, reports_json, run_pit, run_simulation};
