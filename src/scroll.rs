//! Mouse-wheel debouncing for the preview pane.
//!
//! High-resolution wheel events (trackpads) arrive in bursts; deltas are
//! accumulated over a short window and only emitted once they cross a
//! threshold, so the preview scrolls smoothly instead of jittering.

use std::time::{Duration, Instant};

/// Accumulates wheel deltas and emits them once the threshold is reached.
#[derive(Debug, Clone)]
pub struct ScrollHelper {
    accumulated: i32,
    last_event: Option<Instant>,
    window: Duration,
    threshold: i32,
}

impl Default for ScrollHelper {
    fn default() -> Self {
        Self::new(50, 1)
    }
}

impl ScrollHelper {
    /// Create a helper with the given accumulation window (milliseconds)
    /// and minimum delta before emitting.
    pub fn new(window_ms: u64, threshold: i32) -> Self {
        Self {
            accumulated: 0,
            last_event: None,
            window: Duration::from_millis(window_ms),
            threshold,
        }
    }

    /// Feed one wheel delta; returns the accumulated delta once it crosses
    /// the threshold, `None` while still accumulating.
    pub fn accumulate(&mut self, delta: i32) -> Option<i32> {
        let now = Instant::now();

        let stale = self
            .last_event
            .is_none_or(|last| now.duration_since(last) > self.window);
        if stale {
            self.accumulated = delta;
        } else {
            self.accumulated += delta;
        }
        self.last_event = Some(now);

        if self.accumulated.abs() >= self.threshold {
            Some(std::mem::take(&mut self.accumulated))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_emits_once_threshold_is_reached() {
        let mut helper = ScrollHelper::new(100, 3);

        assert!(helper.accumulate(1).is_none());
        assert!(helper.accumulate(1).is_none());
        assert_eq!(helper.accumulate(1), Some(3));

        // Accumulator resets after emitting.
        assert!(helper.accumulate(1).is_none());
    }

    #[test]
    fn test_stale_window_starts_fresh() {
        let mut helper = ScrollHelper::new(10, 1);

        assert_eq!(helper.accumulate(5), Some(5));

        thread::sleep(Duration::from_millis(20));

        assert_eq!(helper.accumulate(3), Some(3));
    }

    #[test]
    fn test_negative_deltas_accumulate() {
        let mut helper = ScrollHelper::new(100, 2);

        assert!(helper.accumulate(-1).is_none());
        assert_eq!(helper.accumulate(-1), Some(-2));
    }
}
