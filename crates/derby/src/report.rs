//! Per-race reports: what happened, saved as JSON.

use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use race_kernel::{RaceConfig, RaceSummary};

/// Record of one completed race.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceReport {
    /// Unique id for this run.
    pub race_id: String,
    /// Start time
    pub started_at: DateTime<Utc>,
    /// End time
    pub ended_at: DateTime<Utc>,
    pub finish_line: u32,
    /// Master seed, if the run was seeded.
    pub seed: Option<u64>,
    /// Final snapshot of each competitor, in roster order.
    pub standings: Vec<race_kernel::FinalStanding>,
    /// Competitor(s) at the maximal position.
    pub winners: Vec<String>,
    pub max_position: u32,
    pub tie: bool,
    /// Total actor ticks across the field.
    pub total_ticks: usize,
    /// Wall-clock duration of the run.
    pub duration_ms: u64,
}

impl RaceReport {
    /// Build a report from a completed run.
    pub fn from_summary(
        config: &RaceConfig,
        summary: &RaceSummary,
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
    ) -> Self {
        let duration_ms = (ended_at - started_at).num_milliseconds().max(0) as u64;
        Self {
            race_id: Uuid::new_v4().to_string(),
            started_at,
            ended_at,
            finish_line: config.finish_line,
            seed: config.seed,
            standings: summary.standings.clone(),
            winners: summary.outcome.winners.clone(),
            max_position: summary.outcome.max_position,
            tie: summary.outcome.is_tie(),
            total_ticks: summary.total_ticks(),
            duration_ms,
        }
    }

    /// Save the report to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let report = serde_json::from_str(&json)?;
        Ok(report)
    }
}

/// Format a duration in milliseconds for display.
pub fn format_duration(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.1}s", ms as f64 / 1000.0)
    } else {
        format!("{:.1}m", ms as f64 / 60_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use race_kernel::{ActorStats, FinalStanding, RaceOutcome};

    fn sample_summary() -> RaceSummary {
        RaceSummary {
            standings: vec![
                FinalStanding {
                    name: "Hare".to_string(),
                    base_speed: 4,
                    position: 100,
                    finished: true,
                },
                FinalStanding {
                    name: "Tortoise".to_string(),
                    base_speed: 3,
                    position: 64,
                    finished: false,
                },
            ],
            outcome: RaceOutcome {
                winners: vec!["Hare".to_string()],
                max_position: 100,
            },
            stats: vec![
                ActorStats { ticks: 20, rests: 3 },
                ActorStats { ticks: 19, rests: 0 },
            ],
        }
    }

    #[test]
    fn report_captures_summary_fields() {
        let config = RaceConfig::new(Vec::new());
        let now = Utc::now();
        let report = RaceReport::from_summary(&config, &sample_summary(), now, now);

        assert_eq!(report.finish_line, 100);
        assert_eq!(report.winners, ["Hare"]);
        assert_eq!(report.max_position, 100);
        assert!(!report.tie);
        assert_eq!(report.total_ticks, 39);
    }

    #[test]
    fn report_round_trips_through_json() {
        let config = RaceConfig::new(Vec::new());
        let now = Utc::now();
        let report = RaceReport::from_summary(&config, &sample_summary(), now, now);

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("race.json");
        report.save(&path).expect("save report");

        let loaded = RaceReport::load(&path).expect("load report");
        assert_eq!(loaded.race_id, report.race_id);
        assert_eq!(loaded.standings, report.standings);
        assert_eq!(loaded.winners, report.winners);
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(250), "250ms");
        assert_eq!(format_duration(1500), "1.5s");
        assert_eq!(format_duration(90_000), "1.5m");
    }
}
