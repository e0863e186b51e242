//! Built-in screensavers.

pub mod color_wheel;
pub mod matrix;
pub mod quotes;
pub mod snowfall;
pub mod starfield;

use rand::{SeedableRng, rngs::StdRng};

/// RNG for a screensaver instance: seeded when a seed is configured,
/// from entropy otherwise.
pub(crate) fn rng_from(seed: Option<u64>) -> StdRng {
    seed.map(StdRng::seed_from_u64)
        .unwrap_or_else(StdRng::from_entropy)
}
