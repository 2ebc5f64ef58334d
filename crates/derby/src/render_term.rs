//! Console renderers for the CLI.

use std::io::Write;

use race_kernel::RaceRenderer;

/// Renders to stdout, clearing with ANSI escapes between frames.
///
/// Output is fire-and-forget: write failures are ignored, matching the
/// display's best-effort contract.
#[derive(Debug, Default)]
pub struct TerminalRenderer;

impl TerminalRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl RaceRenderer for TerminalRenderer {
    fn clear_screen(&mut self) {
        let mut stdout = std::io::stdout();
        // Clear and move the cursor home.
        let _ = write!(stdout, "\x1b[2J\x1b[1;1H");
        let _ = stdout.flush();
    }

    fn write_line(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Discards all output. Used for `--quiet` runs and batch mode, where the
/// live display would be noise.
#[derive(Debug, Default)]
pub struct SilentRenderer;

impl SilentRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl RaceRenderer for SilentRenderer {
    fn clear_screen(&mut self) {}

    fn write_line(&mut self, _line: &str) {}
}
