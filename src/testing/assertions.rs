//! Assertion checking for scenario expectations

use std::collections::HashMap;

use super::parser::StateAssertion;

/// Float equality tolerance for `=` and `!=`
pub const FLOAT_TOLERANCE: f32 = 0.01;

/// Error when an assertion fails
#[derive(Debug)]
pub struct AssertionError {
    pub message: String,
    pub expected: String,
    pub actual: String,
}

impl std::fmt::Display for AssertionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n    Expected: {}\n    Actual: {}", self.message, self.expected, self.actual)
    }
}

/// World state for assertions
pub struct WorldState {
    pub balls: HashMap<String, BallSnapshot>,
    /// Physics frames run so far
    pub frames: u64,
    /// "running" or "closing"
    pub loop_state: String,
}

pub struct BallSnapshot {
    pub x: f32,
    pub y: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
}

impl BallSnapshot {
    pub fn speed(&self) -> f32 {
        (self.velocity_x * self.velocity_x + self.velocity_y * self.velocity_y).sqrt()
    }
}

/// Parse a check string into (path, operator, value)
fn parse_check(check: &str) -> Option<(&str, &str, &str)> {
    // Try operators in order of specificity (>= before >, etc.)
    for op in &[">=", "<=", "!=", "==", "=", ">", "<"] {
        if let Some(idx) = check.find(op) {
            let path = check[..idx].trim();
            let value = check[idx + op.len()..].trim();
            return Some((path, op, value));
        }
    }
    None
}

/// Check state assertions against world state
pub fn check_state(assertion: &StateAssertion, state: &WorldState) -> Result<(), AssertionError> {
    for check in &assertion.checks {
        let (path, operator, expected_value) = parse_check(check).ok_or_else(|| AssertionError {
            message: format!("Invalid check syntax: {}", check),
            expected: "format: 'ball.property = value' or 'ball.property > value'".to_string(),
            actual: check.clone(),
        })?;

        let path_parts: Vec<&str> = path.split('.').collect();

        match path_parts.as_slice() {
            ["frames"] => {
                check_float_comparison(path, state.frames as f32, operator, expected_value)?;
            }
            ["state"] => {
                let expected = expected_value.trim_matches('"');
                let matches = state.loop_state == expected;
                let pass = match operator {
                    "=" | "==" => matches,
                    "!=" => !matches,
                    _ => false,
                };
                if !pass {
                    return Err(AssertionError {
                        message: format!("Loop state check failed: {}", check),
                        expected: format!("state {} {}", operator, expected),
                        actual: state.loop_state.clone(),
                    });
                }
            }
            [ball_id, property] => {
                let ball = state.balls.get(*ball_id).ok_or_else(|| AssertionError {
                    message: format!("Ball '{}' not found", ball_id),
                    expected: format!("ball '{}'", ball_id),
                    actual: format!("available: {:?}", state.balls.keys().collect::<Vec<_>>()),
                })?;

                let actual = match *property {
                    "x" => ball.x,
                    "y" => ball.y,
                    "velocity_x" => ball.velocity_x,
                    "velocity_y" => ball.velocity_y,
                    "speed" => ball.speed(),
                    other => {
                        return Err(AssertionError {
                            message: format!("Unknown ball property '{}'", other),
                            expected: "x, y, velocity_x, velocity_y, or speed".to_string(),
                            actual: other.to_string(),
                        });
                    }
                };
                check_float_comparison(path, actual, operator, expected_value)?;
            }
            _ => {
                return Err(AssertionError {
                    message: format!("Invalid check path: {}", path),
                    expected: "frames, state, or <ball>.<property>".to_string(),
                    actual: path.to_string(),
                });
            }
        }
    }

    Ok(())
}

/// Check float comparison with operator
fn check_float_comparison(
    path: &str,
    actual: f32,
    operator: &str,
    expected_str: &str,
) -> Result<(), AssertionError> {
    let value: f32 = expected_str.trim().parse().map_err(|_| AssertionError {
        message: format!("Invalid value for {}", path),
        expected: "number".to_string(),
        actual: expected_str.to_string(),
    })?;

    let pass = match operator {
        ">=" => actual >= value,
        "<=" => actual <= value,
        ">" => actual > value,
        "<" => actual < value,
        "=" | "==" => (actual - value).abs() < FLOAT_TOLERANCE,
        "!=" => (actual - value).abs() >= FLOAT_TOLERANCE,
        _ => false,
    };

    if !pass {
        return Err(AssertionError {
            message: format!(
                "Check failed: {} {} {} (actual: {:.2})",
                path, operator, expected_str, actual
            ),
            expected: format!("{} {} {}", path, operator, value),
            actual: format!("{:.2}", actual),
        });
    }

    Ok(())
}
