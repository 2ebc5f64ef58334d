//! Shared per-race state.

use std::sync::atomic::{AtomicBool, Ordering};

/// State shared by every actor and the observer for one race run.
///
/// Scoped to a single run behind an `Arc` rather than a process-wide
/// singleton, so independent races can coexist in one process (tests run
/// several at once).
#[derive(Debug)]
pub struct RaceState {
    finish_line: u32,
    finished: AtomicBool,
}

impl RaceState {
    pub fn new(finish_line: u32) -> Self {
        Self {
            finish_line,
            finished: AtomicBool::new(false),
        }
    }

    pub fn finish_line(&self) -> u32 {
        self.finish_line
    }

    /// Mark the race as over. Write-once-wins: concurrent callers all store
    /// `true` and the flag never reverts, so ordering between them is
    /// irrelevant.
    pub fn signal_finish(&self) {
        self.finished.store(true, Ordering::SeqCst);
    }

    /// True once some competitor has crossed the line.
    pub fn is_over(&self) -> bool {
        self.finished.load(Ordering::SeqCst)
    }
}
