//! Competitor state and roster specs.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use serde::{Deserialize, Serialize};

use crate::fatigue::FatigueProfile;
use crate::resolver::FinalStanding;
use crate::rng::RandomSource;

/// How a competitor's base speed is chosen when the roster is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaseSpeed {
    /// Constant speed.
    Fixed(u32),
    /// Drawn once, uniformly from `[min, max]`, before the race starts.
    Drawn { min: u32, max: u32 },
}

impl BaseSpeed {
    /// Resolve to a concrete speed. Draws happen sequentially before any
    /// concurrency begins, so this needs no synchronization.
    pub fn resolve(self, rng: &mut dyn RandomSource) -> u32 {
        match self {
            BaseSpeed::Fixed(speed) => speed,
            BaseSpeed::Drawn { min, max } => rng.uniform(min, max),
        }
    }
}

/// Roster entry: everything needed to build one competitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorSpec {
    pub name: String,
    pub base_speed: BaseSpeed,
    pub fatigue: Option<FatigueProfile>,
}

impl CompetitorSpec {
    pub fn new(name: impl Into<String>, base_speed: BaseSpeed) -> Self {
        Self {
            name: name.into(),
            base_speed,
            fatigue: None,
        }
    }

    pub fn with_fatigue(mut self, profile: FatigueProfile) -> Self {
        self.fatigue = Some(profile);
        self
    }
}

/// Live state for one racer.
///
/// `position` and `finished` are written by exactly one actor and read by
/// the observer and resolver. Relaxed atomics are deliberate: position only
/// moves forward, so any value a reader sees is a valid past-or-present
/// position. Locking here would only reduce display liveness.
#[derive(Debug)]
pub struct Competitor {
    name: String,
    base_speed: u32,
    position: AtomicU32,
    finished: AtomicBool,
}

impl Competitor {
    /// Create a competitor at the start line.
    pub fn new(name: impl Into<String>, base_speed: u32) -> Self {
        Self {
            name: name.into(),
            base_speed,
            position: AtomicU32::new(0),
            finished: AtomicBool::new(false),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_speed(&self) -> u32 {
        self.base_speed
    }

    /// Current position (best-effort read).
    pub fn position(&self) -> u32 {
        self.position.load(Ordering::Relaxed)
    }

    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Relaxed)
    }

    /// Advance by `amount`, clamped to `finish_line`. Sets `finished` when
    /// the line is reached. Returns true if this call crossed the line.
    ///
    /// Single-writer: only the competitor's own actor may call this.
    pub fn advance(&self, amount: u32, finish_line: u32) -> bool {
        let next = self
            .position
            .load(Ordering::Relaxed)
            .saturating_add(amount)
            .min(finish_line);
        self.position.store(next, Ordering::Relaxed);
        if next >= finish_line {
            self.finished.store(true, Ordering::Relaxed);
            true
        } else {
            false
        }
    }

    /// Point-in-time copy for the resolver and reports.
    pub fn snapshot(&self) -> FinalStanding {
        FinalStanding {
            name: self.name.clone(),
            base_speed: self.base_speed,
            position: self.position(),
            finished: self.is_finished(),
        }
    }
}
