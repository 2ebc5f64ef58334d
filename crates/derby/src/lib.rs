//! Derby: harness around the race kernel.
//!
//! Provides the default roster, per-race JSON reports, batch statistics
//! over repeated runs, and the terminal renderers used by the CLI.

pub mod render_term;
pub mod report;
pub mod roster;
pub mod stats;
