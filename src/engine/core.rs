use std::sync::Arc;

use crate::analysis::build_frame;
use crate::config::{DF, GapDays};
use crate::models::{Datasets, DateWindow, SelectionState, TimelineFrame};

use super::refresh::RefreshQueue;

/// Owns the loaded datasets and the most recent frame.
///
/// Selection edits go in through `request`; `update` (once per UI frame)
/// rebuilds from the newest snapshot only.
pub struct TimelineEngine {
    /// Shared immutable data
    datasets: Arc<Datasets>,
    queue: RefreshQueue,
    frame: Option<TimelineFrame>,
    frame_generation: u64,
    min_gap: GapDays,
}

impl TimelineEngine {
    pub fn new(datasets: Datasets, min_gap: GapDays) -> Self {
        Self {
            datasets: Arc::new(datasets),
            queue: RefreshQueue::new(),
            frame: None,
            frame_generation: 0,
            min_gap,
        }
    }

    pub fn datasets(&self) -> &Datasets {
        &self.datasets
    }

    pub fn min_gap(&self) -> GapDays {
        self.min_gap
    }

    /// Window spanning every loaded series, or the trailing fallback when there is no data.
    pub fn initial_window(&self, now_ms: i64) -> DateWindow {
        DateWindow::from_series_bounds(self.datasets.all_timestamps(), now_ms)
    }

    pub fn request(&mut self, selection: SelectionState) -> u64 {
        self.queue.request(selection)
    }

    /// Rebuilds the frame if a request is pending. Returns true when it did.
    pub fn update(&mut self) -> bool {
        let Some(request) = self.queue.take() else {
            return false;
        };

        #[cfg(debug_assertions)]
        if DF.log_engine_core {
            log::info!(
                "🔄 Refresh gen {} ({} superseded so far)",
                request.generation,
                self.queue.superseded()
            );
        }

        self.frame = Some(build_frame(&self.datasets, &request.selection, self.min_gap));
        self.frame_generation = request.generation;
        true
    }

    pub fn frame(&self) -> Option<&TimelineFrame> {
        self.frame.as_ref()
    }

    pub fn frame_generation(&self) -> u64 {
        self.frame_generation
    }

    /// Requests replaced by a newer one before they were built.
    pub fn superseded(&self) -> u64 {
        self.queue.superseded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SeriesMap, TimePoint};

    fn engine() -> TimelineEngine {
        let mut prices = SeriesMap::new();
        prices.insert(
            "GLD".into(),
            vec![TimePoint::new(100, Some(10.0)), TimePoint::new(200, Some(20.0))],
        );
        TimelineEngine::new(Datasets::new(prices, SeriesMap::new(), Vec::new()), GapDays::DEFAULT)
    }

    #[test]
    fn update_without_request_is_noop() {
        let mut engine = engine();
        assert!(!engine.update());
        assert!(engine.frame().is_none());
    }

    #[test]
    fn burst_of_requests_builds_newest_only() {
        let mut engine = engine();
        let window = engine.initial_window(0);
        assert_eq!((window.start_ms(), window.end_ms()), (100, 200));

        let mut stale = SelectionState::default().with_window(window);
        stale.rebase = false;
        engine.request(stale);
        let fresh = SelectionState::default().with_window(window);
        let generation = engine.request(fresh);

        assert!(engine.update());
        assert_eq!(engine.frame_generation(), generation);
        let frame = engine.frame().unwrap();
        assert_eq!(frame.market_axis.title, "Markets (rebased = 100)");
        let gld = frame.market_series.iter().find(|s| s.key == "GLD").unwrap();
        assert_eq!(gld.data, vec![(100, Some(100.0)), (200, Some(200.0))]);
        assert_eq!(engine.superseded(), 1);
        assert!(!engine.update());
    }

    #[test]
    fn empty_engine_window_trails_now() {
        let engine = TimelineEngine::new(Datasets::default(), GapDays::DEFAULT);
        let window = engine.initial_window(1_000_000_000_000);
        assert_eq!(window.end_ms(), 1_000_000_000_000);
    }
}
