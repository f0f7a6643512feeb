//! Utility functions for ballpit

use rand::Rng;

/// Uniform random integer in `min..=max`.
/// Bounds are swapped if given in the wrong order.
pub fn random_value(rng: &mut impl Rng, min: i32, max: i32) -> i32 {
    if min > max {
        return rng.gen_range(max..=min);
    }
    rng.gen_range(min..=max)
}
