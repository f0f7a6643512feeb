//! Scenario testing system for deterministic ball pit testing
//!
//! Scenarios place individual balls, step the headless simulation frame by
//! frame, and check ball state at chosen frames.

pub mod assertions;
pub mod parser;
pub mod runner;

pub use assertions::{AssertionError, check_state};
pub use parser::{BallDef, StateAssertion, TestDefinition, TestExpectations, TestSetup};
pub use runner::{TestResult, run_test};

/// Default path for scenarios
pub const SCENARIOS_DIR: &str = "tests/scenarios";
