//! Per-competitor fatigue policy.
//!
//! Fatigue is configuration attached when the roster is built, never a
//! runtime branch on a competitor's name. A profile of `None` means the
//! competitor always advances.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::rng::RandomSource;

/// Probabilistic rest rule for one competitor.
///
/// Each tick draws `uniform(0, draw_max)`; if the draw equals `trigger` the
/// competitor rests for `rest_ms` and skips that tick's advance. Trigger
/// probability is therefore `1 / (draw_max + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FatigueProfile {
    /// Upper bound (inclusive) of the fatigue roll.
    pub draw_max: u32,
    /// Roll value that triggers a rest.
    pub trigger: u32,
    /// Rest duration in milliseconds.
    pub rest_ms: u64,
}

impl FatigueProfile {
    /// Roll for fatigue with the given source.
    pub fn triggers(&self, rng: &mut dyn RandomSource) -> bool {
        rng.uniform(0, self.draw_max) == self.trigger
    }

    /// Rest duration as a [`Duration`].
    pub fn rest(&self) -> Duration {
        Duration::from_millis(self.rest_ms)
    }
}
