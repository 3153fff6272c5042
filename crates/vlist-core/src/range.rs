#![forbid(unsafe_code)]

//! Visible-range resolution.
//!
//! Two strategies live behind one entry point, selected by an explicit
//! capability flag at engine construction rather than by environment
//! sniffing:
//!
//! - [`RangeStrategy::Interactive`] — the real path. Two binary searches over
//!   the cumulative-offset table find the first and last partially visible
//!   rows in O(log n), then the overscan margin widens both edges.
//! - [`RangeStrategy::Headless`] — a best-effort first screen for hosts that
//!   cannot observe a scroll position (a non-rendering pre-pass). Walks
//!   forward from index 0 accumulating estimated heights until the viewport
//!   is covered, plus one row of slack.
//!
//! Binary-search boundaries are a classic off-by-one source; each search
//! below states the invariant it maintains and is property-tested against a
//! brute-force linear scan in `tests/proptest_range_invariants.rs`.

use serde::{Deserialize, Serialize};

use crate::estimate::HeightEstimator;
use crate::item::ListItem;
use crate::position::PositionTable;

/// Inclusive index range of rows that must be materialized.
///
/// `end == None` signals "nothing to render" (the empty collection); when
/// `end` is `Some(e)`, both `start` and `e` are valid item indices and
/// `start <= e`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleRange {
    /// First index to materialize.
    pub start: usize,
    /// Last index to materialize, inclusive; `None` when there is nothing.
    pub end: Option<usize>,
}

impl VisibleRange {
    /// The empty range.
    pub const EMPTY: Self = Self {
        start: 0,
        end: None,
    };

    /// A non-empty inclusive span.
    #[must_use]
    pub fn span(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self {
            start,
            end: Some(end),
        }
    }

    /// Whether the range contains no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end.is_none()
    }

    /// Number of rows in the range.
    #[must_use]
    pub fn len(&self) -> usize {
        match self.end {
            Some(end) => end - self.start + 1,
            None => 0,
        }
    }

    /// Iterate the contained indices in order.
    #[must_use]
    pub fn indices(&self) -> std::ops::Range<usize> {
        match self.end {
            Some(end) => self.start..end + 1,
            None => 0..0,
        }
    }

    /// Whether `index` falls inside the range.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        matches!(self.end, Some(end) if index >= self.start && index <= end)
    }
}

impl Default for VisibleRange {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Capability flag choosing how ranges are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeStrategy {
    /// Scroll position is observable; resolve by binary search.
    Interactive,
    /// No scroll position exists (non-rendering pre-pass); emit a
    /// best-effort first screen from estimates.
    Headless,
}

/// Resolve the windowed range for a committed scroll position.
///
/// Returns [`VisibleRange::EMPTY`] for an empty table. Otherwise both edges
/// are found in O(log n) and widened by `overscan` rows, floored at 0 and
/// capped at the last index.
#[must_use]
pub fn resolve_windowed(
    table: &PositionTable,
    scroll_offset: f32,
    viewport_height: f32,
    overscan: usize,
) -> VisibleRange {
    let entries = table.entries();
    let last = match entries.len().checked_sub(1) {
        Some(last) => last,
        None => return VisibleRange::EMPTY,
    };

    // First partially visible row: the lowest index whose trailing edge
    // (offset + height) reaches the scroll offset.
    //
    // Invariant: rows below `lo` have `bottom() < scroll_offset`; rows at or
    // above `hi` are candidates. Terminates with lo == hi == the answer.
    let mut lo = 0usize;
    let mut hi = last;
    while lo < hi {
        let mid = (lo + hi) / 2;
        if entries[mid].bottom() < scroll_offset {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    let first_visible = lo;
    let start = first_visible.saturating_sub(overscan);

    // Last partially visible row: the highest index whose leading edge
    // (offset) has not passed the viewport bottom. Searching from `start`
    // is sound because offsets are non-decreasing and `start <= first_visible`.
    //
    // Invariant: rows above `hi` have `offset > bottom_edge`; rows at or
    // below `lo` are candidates. `mid` rounds up so the window always
    // shrinks toward the last match.
    let bottom_edge = scroll_offset + viewport_height;
    let mut lo = start;
    let mut hi = last;
    while lo < hi {
        let mid = (lo + hi + 1) / 2;
        if entries[mid].offset > bottom_edge {
            hi = mid - 1;
        } else {
            lo = mid;
        }
    }
    let end = (lo + overscan).min(last);

    VisibleRange::span(start, end)
}

/// Resolve a best-effort first screen without a scroll position.
///
/// Accumulates estimated heights from index 0 until the running total covers
/// the viewport, then includes one extra row of slack. Not scroll-accurate by
/// construction; measured heights are deliberately ignored because this path
/// runs before anything has rendered.
#[must_use]
pub fn resolve_first_screen<T: ListItem>(
    items: &[T],
    estimator: &HeightEstimator,
    viewport_height: f32,
) -> VisibleRange {
    let last = match items.len().checked_sub(1) {
        Some(last) => last,
        None => return VisibleRange::EMPTY,
    };

    let mut consumed = 0usize;
    let mut total = 0.0_f32;
    while consumed <= last && total < viewport_height {
        total += estimator.estimate(items[consumed].content_len());
        consumed += 1;
    }

    // `consumed` rows cover the viewport; index `consumed` is the slack row.
    VisibleRange::span(0, consumed.min(last))
}
