//! Race orchestration: build competitors, spawn actors, join, resolve.

use std::sync::Arc;

use futures::future::join_all;
use tracing::info;

use crate::actor::{ActorStats, drive_competitor};
use crate::competitor::{Competitor, CompetitorSpec};
use crate::observer::observe;
use crate::render::{FINAL_FILL, RaceRenderer, track_line};
use crate::resolver::{FinalStanding, RaceOutcome, resolve};
use crate::rng::source_for;
use crate::state::RaceState;

/// Sleep intervals for one race, in milliseconds. Tests set both to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaceTiming {
    /// Pacing interval between actor ticks.
    pub pacing_ms: u64,
    /// Observer refresh interval.
    pub refresh_ms: u64,
}

impl Default for RaceTiming {
    fn default() -> Self {
        Self {
            pacing_ms: 300,
            refresh_ms: 200,
        }
    }
}

/// Configuration for a single race run.
#[derive(Debug, Clone)]
pub struct RaceConfig {
    pub finish_line: u32,
    pub timing: RaceTiming,
    /// Master seed; `None` draws from OS entropy. Each actor gets its own
    /// ChaCha stream derived from this seed.
    pub seed: Option<u64>,
    pub roster: Vec<CompetitorSpec>,
}

impl RaceConfig {
    pub fn new(roster: Vec<CompetitorSpec>) -> Self {
        Self {
            finish_line: 100,
            timing: RaceTiming::default(),
            seed: None,
            roster,
        }
    }
}

/// Everything known once a race has completed.
#[derive(Debug, Clone)]
pub struct RaceSummary {
    /// Final snapshot of each competitor, in roster order.
    pub standings: Vec<FinalStanding>,
    pub outcome: RaceOutcome,
    /// Per-actor counters, in roster order.
    pub stats: Vec<ActorStats>,
}

impl RaceSummary {
    /// Total ticks across all actors.
    pub fn total_ticks(&self) -> usize {
        self.stats.iter().map(|s| s.ticks).sum()
    }
}

/// Owns one race run from roster to final frame.
pub struct RaceRunner {
    config: RaceConfig,
}

impl RaceRunner {
    pub fn new(config: RaceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RaceConfig {
        &self.config
    }

    /// Run the race to completion.
    ///
    /// Spawns one actor task per competitor and drives the observer
    /// concurrently, waits for every actor to reach its terminal state and
    /// for the observer's graceful exit, then performs the final
    /// authoritative render and resolves the outcome.
    pub async fn run<R: RaceRenderer>(&self, renderer: R) -> RaceSummary {
        let state = Arc::new(RaceState::new(self.config.finish_line));

        // One-time speed draws, sequential, before any concurrency. Stream 0
        // is reserved for the roster; actors use streams 1..=n.
        let mut roster_rng = source_for(self.config.seed, 0);
        let competitors: Vec<Arc<Competitor>> = self
            .config
            .roster
            .iter()
            .map(|spec| {
                let speed = spec.base_speed.resolve(roster_rng.as_mut());
                Arc::new(Competitor::new(spec.name.clone(), speed))
            })
            .collect();
        let competitors = Arc::new(competitors);

        info!(
            finish_line = self.config.finish_line,
            competitors = competitors.len(),
            seed = ?self.config.seed,
            "starting race"
        );

        // An empty roster would leave the flag unset and the observer
        // spinning; close the race out before it starts.
        if competitors.is_empty() {
            state.signal_finish();
        }

        let handles: Vec<_> = self
            .config
            .roster
            .iter()
            .zip(competitors.iter())
            .enumerate()
            .map(|(idx, (spec, competitor))| {
                tokio::spawn(drive_competitor(
                    Arc::clone(competitor),
                    Arc::clone(&state),
                    spec.fatigue,
                    self.config.timing,
                    source_for(self.config.seed, idx as u64 + 1),
                ))
            })
            .collect();

        // Actors are independent tasks; the observer runs here and exits
        // within one refresh interval of the finish signal.
        let observer = observe(
            Arc::clone(&competitors),
            Arc::clone(&state),
            self.config.timing.refresh_ms,
            renderer,
        );
        let (actor_results, mut renderer) = tokio::join!(join_all(handles), observer);
        let stats: Vec<ActorStats> = actor_results
            .into_iter()
            .map(|result| result.unwrap_or_default())
            .collect();

        let standings: Vec<FinalStanding> =
            competitors.iter().map(|c| c.snapshot()).collect();
        let outcome = resolve(&standings);

        // Final authoritative frame, after every actor has joined.
        renderer.clear_screen();
        for standing in &standings {
            renderer.write_line(&track_line(&standing.name, standing.position, FINAL_FILL));
        }
        renderer.write_line("");
        renderer.write_line(&outcome.summary_line());

        info!(
            winners = ?outcome.winners,
            max_position = outcome.max_position,
            "race finished"
        );

        RaceSummary {
            standings,
            outcome,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::competitor::BaseSpeed;
    use crate::fatigue::FatigueProfile;
    use crate::render::MemoryRenderer;

    fn fast_config(seed: u64) -> RaceConfig {
        RaceConfig {
            finish_line: 100,
            timing: RaceTiming {
                pacing_ms: 0,
                refresh_ms: 0,
            },
            seed: Some(seed),
            roster: vec![
                CompetitorSpec::new("Hare", BaseSpeed::Drawn { min: 3, max: 5 }).with_fatigue(
                    FatigueProfile {
                        draw_max: 4,
                        trigger: 1,
                        rest_ms: 0,
                    },
                ),
                CompetitorSpec::new("Tortoise", BaseSpeed::Fixed(3)),
                CompetitorSpec::new("Hound", BaseSpeed::Fixed(5)).with_fatigue(FatigueProfile {
                    draw_max: 4,
                    trigger: 0,
                    rest_ms: 0,
                }),
            ],
        }
    }

    #[tokio::test]
    async fn race_completes_and_holds_invariants() {
        let runner = RaceRunner::new(fast_config(7));
        let summary = runner.run(MemoryRenderer::new()).await;

        assert_eq!(summary.standings.len(), 3);
        for standing in &summary.standings {
            assert!(standing.position <= 100);
            if standing.finished {
                assert_eq!(standing.position, 100);
            }
        }
        // Someone crossed the line, so the max is exactly the finish line.
        assert_eq!(summary.outcome.max_position, 100);
        assert!(!summary.outcome.winners.is_empty());
        assert!(summary.total_ticks() > 0);
    }

    #[tokio::test]
    async fn final_frame_uses_final_fill_and_summary() {
        let runner = RaceRunner::new(fast_config(11));
        let mut renderer = MemoryRenderer::new();
        let summary = runner.run(&mut renderer).await;

        let last = renderer.last_frame();
        // Three track lines, a blank separator, and the summary.
        assert_eq!(last.len(), 5);
        for (line, standing) in last.iter().zip(&summary.standings) {
            assert!(line.starts_with("||:"));
            assert!(line.ends_with(&standing.name));
            assert!(!line.contains('.'));
        }
        assert_eq!(last[3], "");
        assert_eq!(last[4], summary.outcome.summary_line());
    }

    #[tokio::test]
    async fn seeded_speed_draws_are_reproducible() {
        // Outcomes stay scheduling-dependent even when seeded, but the
        // pre-race speed draws happen sequentially and must not vary.
        let first = RaceRunner::new(fast_config(42)).run(MemoryRenderer::new()).await;
        let second = RaceRunner::new(fast_config(42)).run(MemoryRenderer::new()).await;
        let speeds = |s: &RaceSummary| -> Vec<u32> {
            s.standings.iter().map(|st| st.base_speed).collect()
        };
        assert_eq!(speeds(&first), speeds(&second));
        assert!((3..=5).contains(&first.standings[0].base_speed));
    }

    #[tokio::test]
    async fn empty_roster_resolves_to_no_winners() {
        let config = RaceConfig {
            roster: Vec::new(),
            ..fast_config(0)
        };
        let summary = RaceRunner::new(config).run(MemoryRenderer::new()).await;
        assert!(summary.standings.is_empty());
        assert!(summary.outcome.winners.is_empty());
        assert_eq!(summary.outcome.max_position, 0);
    }
}
