//! Winner and tie resolution over final standings.
//!
//! Pure functions: resolution runs only after every actor has joined, so it
//! reads plain snapshots with no concurrency concerns.

use serde::{Deserialize, Serialize};

/// Post-race snapshot of one competitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalStanding {
    pub name: String,
    pub base_speed: u32,
    pub position: u32,
    pub finished: bool,
}

/// Winner(s) of a race.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceOutcome {
    /// Every competitor at the maximal position, in roster order.
    pub winners: Vec<String>,
    pub max_position: u32,
}

impl RaceOutcome {
    pub fn is_tie(&self) -> bool {
        self.winners.len() > 1
    }

    /// Final human-readable summary line.
    pub fn summary_line(&self) -> String {
        if self.is_tie() {
            format!(
                "It's a tie between: {} with a position of {}!",
                self.winners.join(" "),
                self.max_position
            )
        } else if let Some(winner) = self.winners.first() {
            format!(
                "The winner is {} with a position of {}!",
                winner, self.max_position
            )
        } else {
            "No competitors ran.".to_string()
        }
    }
}

/// Compute the winner(s): all competitors sharing the maximal position.
///
/// Total over all inputs: all-zero positions tie everyone at 0, and an
/// empty field yields no winners.
pub fn resolve(standings: &[FinalStanding]) -> RaceOutcome {
    let max_position = standings.iter().map(|s| s.position).max().unwrap_or(0);
    let winners = standings
        .iter()
        .filter(|s| s.position == max_position)
        .map(|s| s.name.clone())
        .collect();
    RaceOutcome {
        winners,
        max_position,
    }
}
