//! The per-competitor race actor.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

use crate::competitor::Competitor;
use crate::fatigue::FatigueProfile;
use crate::rng::RandomSource;
use crate::runner::RaceTiming;
use crate::state::RaceState;

/// Per-actor counters, reported when the actor's loop exits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActorStats {
    /// Iterations of the drive loop (a fatigued tick still counts).
    pub ticks: usize,
    /// Ticks skipped due to a fatigue rest.
    pub rests: usize,
}

/// Drive one competitor until it finishes or the race is over.
///
/// Each iteration: pace, draw an advance of `base_speed + uniform(1, 3)`,
/// roll for fatigue (rest and skip the advance on a trigger), otherwise
/// advance with clamping. Crossing the line sets the competitor's own
/// `finished` and then the shared flag; both exit conditions are re-checked
/// before every pacing sleep, so the loop is bounded.
pub async fn drive_competitor(
    competitor: Arc<Competitor>,
    state: Arc<RaceState>,
    fatigue: Option<FatigueProfile>,
    timing: RaceTiming,
    mut rng: Box<dyn RandomSource>,
) -> ActorStats {
    let mut stats = ActorStats::default();

    while !competitor.is_finished() && !state.is_over() {
        sleep(Duration::from_millis(timing.pacing_ms)).await;
        stats.ticks += 1;

        let advance = competitor.base_speed() + rng.uniform(1, 3);

        if let Some(profile) = fatigue
            && profile.triggers(rng.as_mut())
        {
            stats.rests += 1;
            debug!(name = competitor.name(), tick = stats.ticks, "resting");
            sleep(profile.rest()).await;
            continue;
        }

        if competitor.advance(advance, state.finish_line()) {
            state.signal_finish();
            debug!(
                name = competitor.name(),
                ticks = stats.ticks,
                "crossed the finish line"
            );
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::MinimumRandom;

    fn zero_timing() -> RaceTiming {
        RaceTiming {
            pacing_ms: 0,
            refresh_ms: 0,
        }
    }

    #[tokio::test]
    async fn stops_immediately_when_race_is_over() {
        let competitor = Arc::new(Competitor::new("Tortoise", 3));
        let state = Arc::new(RaceState::new(100));
        state.signal_finish();

        let stats = drive_competitor(
            competitor.clone(),
            state,
            None,
            zero_timing(),
            Box::new(MinimumRandom),
        )
        .await;

        assert_eq!(stats.ticks, 0);
        assert_eq!(competitor.position(), 0);
    }

    #[tokio::test]
    async fn minimum_draws_reach_the_line_in_exact_ticks() {
        // base 4 + minimum bonus 1 = 5 units per tick; 100 / 5 = 20 ticks.
        let competitor = Arc::new(Competitor::new("Hound", 4));
        let state = Arc::new(RaceState::new(100));

        let stats = drive_competitor(
            competitor.clone(),
            state.clone(),
            None,
            zero_timing(),
            Box::new(MinimumRandom),
        )
        .await;

        assert_eq!(stats.ticks, 20);
        assert_eq!(competitor.position(), 100);
        assert!(competitor.is_finished());
        assert!(state.is_over());
    }

    #[tokio::test]
    async fn always_triggering_fatigue_never_advances() {
        // MinimumRandom rolls 0, which is this profile's trigger, so the
        // actor rests forever; the shared flag is its only way out.
        let competitor = Arc::new(Competitor::new("Hound", 5));
        let state = Arc::new(RaceState::new(100));
        let profile = FatigueProfile {
            draw_max: 4,
            trigger: 0,
            rest_ms: 0,
        };

        let driver = tokio::spawn(drive_competitor(
            competitor.clone(),
            state.clone(),
            Some(profile),
            zero_timing(),
            Box::new(MinimumRandom),
        ));

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(competitor.position(), 0);

        state.signal_finish();
        let stats = driver.await.expect("actor task panicked");
        assert_eq!(stats.rests, stats.ticks);
    }
}
