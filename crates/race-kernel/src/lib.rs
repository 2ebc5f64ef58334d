//! Race kernel: a concurrent race simulation engine.
//!
//! One async actor per competitor advances a privately-owned position at a
//! randomized pace; a shared write-once flag stops every actor once the first
//! competitor crosses the line; an observer polls positions for a live
//! display without synchronizing on race completion.

pub mod actor;
pub mod competitor;
pub mod fatigue;
pub mod observer;
pub mod render;
pub mod resolver;
pub mod rng;
pub mod runner;
pub mod state;

pub use actor::{ActorStats, drive_competitor};
pub use competitor::{BaseSpeed, Competitor, CompetitorSpec};
pub use fatigue::FatigueProfile;
pub use observer::observe;
pub use render::{MemoryRenderer, RaceRenderer, track_line};
pub use resolver::{FinalStanding, RaceOutcome, resolve};
pub use rng::{MinimumRandom, RandomSource, source_for};
pub use runner::{RaceConfig, RaceRunner, RaceSummary, RaceTiming};
pub use state::RaceState;
