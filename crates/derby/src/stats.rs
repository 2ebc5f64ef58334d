//! Aggregate statistics over repeated races.
//!
//! A batch run repeats the same roster many times and summarizes how often
//! each competitor wins, how far it typically gets, and how many ticks its
//! actor runs.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::report::RaceReport;

/// Per-competitor aggregate over a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorRecord {
    pub name: String,
    /// Races where this competitor was the sole winner.
    pub wins: usize,
    /// Races where this competitor shared the maximal position.
    pub ties: usize,
    /// (wins + ties) / races.
    pub win_rate: f64,
    pub avg_position: f64,
    pub avg_base_speed: f64,
}

/// All reports from a batch plus the computed summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchResults {
    pub races: Vec<RaceReport>,
    pub summary: HashMap<String, CompetitorRecord>,
}

impl BatchResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, report: RaceReport) {
        self.races.push(report);
    }

    /// Compute per-competitor records across all recorded races.
    pub fn compute_summary(&mut self) {
        self.summary.clear();
        let races = self.races.len();
        if races == 0 {
            return;
        }

        let mut wins: HashMap<String, usize> = HashMap::new();
        let mut ties: HashMap<String, usize> = HashMap::new();
        let mut positions: HashMap<String, Vec<u32>> = HashMap::new();
        let mut speeds: HashMap<String, Vec<u32>> = HashMap::new();

        for report in &self.races {
            for standing in &report.standings {
                positions
                    .entry(standing.name.clone())
                    .or_default()
                    .push(standing.position);
                speeds
                    .entry(standing.name.clone())
                    .or_default()
                    .push(standing.base_speed);
            }
            for winner in &report.winners {
                if report.tie {
                    *ties.entry(winner.clone()).or_default() += 1;
                } else {
                    *wins.entry(winner.clone()).or_default() += 1;
                }
            }
        }

        for (name, observed) in positions {
            let n = observed.len() as f64;
            let avg_position = observed.iter().map(|p| *p as f64).sum::<f64>() / n;
            let avg_base_speed = speeds
                .get(&name)
                .map(|s| s.iter().map(|v| *v as f64).sum::<f64>() / s.len() as f64)
                .unwrap_or(0.0);
            let won = wins.get(&name).copied().unwrap_or(0);
            let tied = ties.get(&name).copied().unwrap_or(0);
            self.summary.insert(
                name.clone(),
                CompetitorRecord {
                    name,
                    wins: won,
                    ties: tied,
                    win_rate: (won + tied) as f64 / races as f64,
                    avg_position,
                    avg_base_speed,
                },
            );
        }
    }

    /// Save results to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load results from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let results = serde_json::from_str(&json)?;
        Ok(results)
    }
}
