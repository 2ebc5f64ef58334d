//! Live display observer.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;

use crate::competitor::Competitor;
use crate::render::{LIVE_FILL, RaceRenderer, track_line};
use crate::state::RaceState;

/// Poll all competitors and render a frame until the race is over.
///
/// Reads are best-effort and intentionally unlocked: position only moves
/// forward, so a frame may lag an in-flight update but never shows an
/// impossible value. The observer exits within one refresh interval of the
/// finish signal and does not render the finished state itself; the runner
/// performs the final authoritative frame after all actors have joined.
///
/// Takes the renderer by value and returns it so the runner can reuse it
/// for that final frame.
pub async fn observe<R: RaceRenderer>(
    competitors: Arc<Vec<Arc<Competitor>>>,
    state: Arc<RaceState>,
    refresh_ms: u64,
    mut renderer: R,
) -> R {
    while !state.is_over() {
        renderer.clear_screen();
        for competitor in competitors.iter() {
            renderer.write_line(&track_line(
                competitor.name(),
                competitor.position(),
                LIVE_FILL,
            ));
        }
        sleep(Duration::from_millis(refresh_ms)).await;
    }
    renderer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::MemoryRenderer;

    #[tokio::test]
    async fn exits_without_rendering_when_already_over() {
        let competitors = Arc::new(vec![Arc::new(Competitor::new("Hare", 5))]);
        let state = Arc::new(RaceState::new(100));
        state.signal_finish();

        let renderer = observe(competitors, state, 0, MemoryRenderer::new()).await;
        assert!(renderer.frames().is_empty());
    }

    #[tokio::test]
    async fn renders_one_line_per_competitor_until_signalled() {
        let competitors: Vec<Arc<Competitor>> = ["Hare", "Tortoise", "Hound"]
            .iter()
            .map(|name| Arc::new(Competitor::new(*name, 3)))
            .collect();
        let competitors = Arc::new(competitors);
        let state = Arc::new(RaceState::new(100));

        let observer = tokio::spawn(observe(
            competitors.clone(),
            state.clone(),
            1,
            MemoryRenderer::new(),
        ));

        tokio::time::sleep(Duration::from_millis(20)).await;
        state.signal_finish();
        let renderer = observer.await.expect("observer task panicked");

        assert!(!renderer.frames().is_empty());
        for frame in renderer.frames() {
            assert_eq!(frame.len(), 3);
            assert!(frame[0].ends_with("Hare"));
            assert!(frame[2].ends_with("Hound"));
        }
    }
}
