//! Random source seam for the race.
//!
//! Actors draw two kinds of integers per tick: the advance bonus and the
//! fatigue roll. Both go through [`RandomSource`] so tests can substitute a
//! deterministic stub. Each actor owns its own boxed source; nothing is
//! shared across tasks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Produces uniformly distributed integers in a closed range on demand.
pub trait RandomSource: Send {
    /// Uniform integer in the inclusive range `[low, high]`.
    fn uniform(&mut self, low: u32, high: u32) -> u32;
}

impl RandomSource for StdRng {
    fn uniform(&mut self, low: u32, high: u32) -> u32 {
        self.random_range(low..=high)
    }
}

impl RandomSource for ChaCha8Rng {
    fn uniform(&mut self, low: u32, high: u32) -> u32 {
        self.random_range(low..=high)
    }
}

/// Stub source that always returns the low bound.
///
/// Used by determinism tests: with this source and no fatigue, a competitor
/// with base speed `b` covers exactly `b + 1` units per tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimumRandom;

impl RandomSource for MinimumRandom {
    fn uniform(&mut self, low: u32, _high: u32) -> u32 {
        low
    }
}

/// Build a source from an optional master seed.
///
/// Seeded sources use ChaCha streams: one master seed with a distinct
/// `stream` per actor yields independent, reproducible sequences. Unseeded
/// sources draw from OS entropy.
pub fn source_for(seed: Option<u64>, stream: u64) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.set_stream(stream);
            Box::new(rng)
        }
        None => Box::new(StdRng::from_os_rng()),
    }
}
