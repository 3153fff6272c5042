#![forbid(unsafe_code)]

//! Frame-aligned input coalescing.
//!
//! Raw scroll events and per-row measurement reports may arrive many times
//! per frame; committing each one immediately would thrash range resolution
//! and position repair. Both coalescers buffer until the engine's
//! once-per-frame commit and are cleared when the collection is replaced, so
//! a pending commit can never touch a rebuilt table.
//!
//! - [`ScrollCoalescer`]: latest-wins. Intermediate offsets between commits
//!   are discarded, not queued.
//! - [`MeasureBatch`]: accumulates every report of the tick; the drain
//!   processes them in arrival order so the latest report per index wins.

/// Latest-wins slot for raw scroll offsets.
#[derive(Debug, Clone, Default)]
pub struct ScrollCoalescer {
    /// Most recent raw offset since the last drain.
    latest: Option<f32>,
    /// Number of raw events coalesced since the last drain.
    event_count: u32,
}

impl ScrollCoalescer {
    /// Create an empty coalescer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw scroll event; overwrites any uncommitted offset.
    pub fn push(&mut self, offset: f32) {
        self.latest = Some(offset);
        self.event_count = self.event_count.saturating_add(1);
    }

    /// Take the pending offset and reset for the next frame.
    ///
    /// Returns `(latest_offset, coalesced_event_count)`.
    pub fn drain(&mut self) -> (Option<f32>, u32) {
        let result = (self.latest.take(), self.event_count);
        self.event_count = 0;
        result
    }

    /// Whether an uncommitted offset is pending.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.latest.is_some()
    }

    /// Cancel any pending commit (teardown / collection replaced).
    pub fn clear(&mut self) {
        self.latest = None;
        self.event_count = 0;
    }
}

/// Per-tick accumulator for `(index, observed_height)` reports.
#[derive(Debug, Clone, Default)]
pub struct MeasureBatch {
    reports: Vec<(usize, f32)>,
}

impl MeasureBatch {
    /// Create an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a measurement report for the next drain.
    ///
    /// Bounds are not checked here: the collection may legitimately shrink
    /// between scheduling and delivery, so stale indices are filtered at
    /// drain time instead.
    pub fn push(&mut self, index: usize, observed_height: f32) {
        self.reports.push((index, observed_height));
    }

    /// Take all queued reports, in arrival order.
    pub fn drain(&mut self) -> Vec<(usize, f32)> {
        std::mem::take(&mut self.reports)
    }

    /// Number of queued reports.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Whether no reports are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Cancel all queued reports (teardown / collection replaced).
    pub fn clear(&mut self) {
        self.reports.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_keeps_only_the_latest_offset() {
        let mut coalescer = ScrollCoalescer::new();
        coalescer.push(10.0);
        coalescer.push(25.0);
        coalescer.push(17.5);

        assert!(coalescer.has_pending());
        assert_eq!(coalescer.drain(), (Some(17.5), 3));
        // Drained: nothing pending until the next event.
        assert!(!coalescer.has_pending());
        assert_eq!(coalescer.drain(), (None, 0));
    }

    #[test]
    fn scroll_clear_cancels_the_pending_commit() {
        let mut coalescer = ScrollCoalescer::new();
        coalescer.push(99.0);
        coalescer.clear();
        assert_eq!(coalescer.drain(), (None, 0));
    }

    #[test]
    fn batch_preserves_arrival_order() {
        let mut batch = MeasureBatch::new();
        batch.push(4, 120.0);
        batch.push(2, 95.0);
        batch.push(4, 130.0);

        assert_eq!(batch.len(), 3);
        assert_eq!(batch.drain(), vec![(4, 120.0), (2, 95.0), (4, 130.0)]);
        assert!(batch.is_empty());
    }

    #[test]
    fn batch_clear_drops_queued_reports() {
        let mut batch = MeasureBatch::new();
        batch.push(0, 100.0);
        batch.clear();
        assert!(batch.drain().is_empty());
    }
}
