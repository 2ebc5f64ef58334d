//! Rendering seam and track-line formatting.
//!
//! The console is a consumed surface: the kernel formats lines and hands
//! them to a [`RaceRenderer`]. Rendering is fire-and-forget; there is no
//! error channel.

/// Fill character for in-progress frames.
pub const LIVE_FILL: char = '.';
/// Fill character for the final authoritative frame.
pub const FINAL_FILL: char = '-';

/// Output surface for the live display and the final frame.
pub trait RaceRenderer: Send {
    fn clear_screen(&mut self);
    fn write_line(&mut self, line: &str);
}

// Lets callers keep ownership of a renderer (tests inspect captured frames
// after the run) while the observer takes its argument by value.
impl<R: RaceRenderer> RaceRenderer for &mut R {
    fn clear_screen(&mut self) {
        (**self).clear_screen();
    }

    fn write_line(&mut self, line: &str) {
        (**self).write_line(line);
    }
}

/// One track line: a fixed marker, one fill character per two units of
/// position, then the competitor's name.
pub fn track_line(name: &str, position: u32, fill: char) -> String {
    let track: String = std::iter::repeat_n(fill, (position / 2) as usize).collect();
    format!("||: {} {}", track, name)
}

/// Frame-capturing renderer for tests.
///
/// `clear_screen` starts a new frame; `write_line` appends to the current
/// one. An initial implicit frame exists so lines written before any clear
/// are not lost.
#[derive(Debug, Default)]
pub struct MemoryRenderer {
    frames: Vec<Vec<String>>,
}

impl MemoryRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured frames, oldest first. Empty frames (a clear with no
    /// lines yet) are included.
    pub fn frames(&self) -> &[Vec<String>] {
        &self.frames
    }

    /// Lines of the most recent frame.
    pub fn last_frame(&self) -> &[String] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl RaceRenderer for MemoryRenderer {
    fn clear_screen(&mut self) {
        self.frames.push(Vec::new());
    }

    fn write_line(&mut self, line: &str) {
        if self.frames.is_empty() {
            self.frames.push(Vec::new());
        }
        self.frames
            .last_mut()
            .expect("frame exists after push")
            .push(line.to_string());
    }
}
