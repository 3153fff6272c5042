#![forbid(unsafe_code)]

//! Cumulative-offset table over item heights.
//!
//! One entry per item, in item order. The table is rebuilt from scratch only
//! when the collection itself is replaced; within a collection's lifetime it
//! is repaired incrementally from the first changed index forward, which is
//! amortized cheap because measurements arrive for rows near the visible
//! window, not at index 0.
//!
//! # Invariants
//!
//! 1. `entries[i].offset + entries[i].height == entries[i + 1].offset`
//! 2. Offsets are non-decreasing (heights are never negative).
//! 3. `entries.len()` equals the item count the table was last built or
//!    patched against.

use crate::estimate::HeightEstimator;
use crate::heights::HeightTable;
use crate::item::ListItem;

/// Resolved position of a single row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionEntry {
    /// Item index.
    pub index: usize,
    /// Cumulative top coordinate, in pixels.
    pub offset: f32,
    /// Current best-known height: measured if available, estimated otherwise.
    pub height: f32,
}

impl PositionEntry {
    /// Bottom coordinate of the row (`offset + height`).
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.offset + self.height
    }
}

/// The cumulative-offset table.
#[derive(Debug, Clone, Default)]
pub struct PositionTable {
    entries: Vec<PositionEntry>,
}

impl PositionTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table tracks no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for `index`, if within bounds.
    #[must_use = "use the returned entry (if any)"]
    pub fn entry(&self, index: usize) -> Option<&PositionEntry> {
        self.entries.get(index)
    }

    /// All entries, in item order.
    #[must_use]
    pub fn entries(&self) -> &[PositionEntry] {
        &self.entries
    }

    /// Full scrollable extent: `offset[last] + height[last]`, 0 when empty.
    #[must_use]
    pub fn total_height(&self) -> f32 {
        self.entries.last().map_or(0.0, PositionEntry::bottom)
    }

    /// Rebuild the table from scratch for a (new) collection.
    pub fn rebuild<T: ListItem>(
        &mut self,
        items: &[T],
        heights: &HeightTable,
        estimator: &HeightEstimator,
    ) {
        self.entries.clear();
        self.entries.reserve(items.len());
        let mut offset = 0.0_f32;
        for (index, item) in items.iter().enumerate() {
            let height = heights
                .get(index)
                .unwrap_or_else(|| estimator.estimate(item.content_len()));
            self.entries.push(PositionEntry {
                index,
                offset,
                height,
            });
            offset += height;
        }
    }

    /// Recompute offsets for all indices `>= from`, leaving earlier entries
    /// untouched. O(n − from).
    pub fn patch_from<T: ListItem>(
        &mut self,
        from: usize,
        items: &[T],
        heights: &HeightTable,
        estimator: &HeightEstimator,
    ) {
        debug_assert_eq!(self.entries.len(), items.len());
        if from >= self.entries.len() {
            return;
        }
        let mut offset = if from > 0 {
            self.entries[from - 1].bottom()
        } else {
            0.0
        };
        for index in from..self.entries.len() {
            let height = heights
                .get(index)
                .unwrap_or_else(|| estimator.estimate(items[index].content_len()));
            self.entries[index] = PositionEntry {
                index,
                offset,
                height,
            };
            offset += height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(usize);

    impl ListItem for Fixed {
        fn id(&self) -> u64 {
            self.0 as u64
        }

        fn content_len(&self) -> usize {
            // 250 chars -> 5 lines -> 140px with default estimator.
            250
        }
    }

    fn items(n: usize) -> Vec<Fixed> {
        (0..n).map(Fixed).collect()
    }

    fn assert_adjacency(table: &PositionTable) {
        for pair in table.entries().windows(2) {
            assert_eq!(
                pair[0].offset + pair[0].height,
                pair[1].offset,
                "adjacency broken between {} and {}",
                pair[0].index,
                pair[1].index
            );
        }
    }

    #[test]
    fn build_is_sequential_from_zero() {
        let mut table = PositionTable::new();
        let est = HeightEstimator::default();
        table.rebuild(&items(4), &HeightTable::new(), &est);

        assert_eq!(table.len(), 4);
        assert_eq!(table.entry(0).unwrap().offset, 0.0);
        assert_eq!(table.entry(1).unwrap().offset, 140.0);
        assert_eq!(table.entry(3).unwrap().offset, 420.0);
        assert_eq!(table.total_height(), 560.0);
        assert_adjacency(&table);
    }

    #[test]
    fn measured_heights_win_over_estimates() {
        let mut table = PositionTable::new();
        let est = HeightEstimator::default();
        let mut heights = HeightTable::new();
        heights.record(1, 200.0);
        table.rebuild(&items(3), &heights, &est);

        assert_eq!(table.entry(1).unwrap().height, 200.0);
        assert_eq!(table.entry(2).unwrap().offset, 340.0);
        assert_adjacency(&table);
    }

    #[test]
    fn patch_preserves_entries_below_the_index() {
        let mut table = PositionTable::new();
        let est = HeightEstimator::default();
        let mut heights = HeightTable::new();
        let rows = items(5);
        table.rebuild(&rows, &heights, &est);
        let before: Vec<_> = table.entries()[..2].to_vec();

        heights.record(2, 300.0);
        table.patch_from(2, &rows, &heights, &est);

        assert_eq!(&table.entries()[..2], &before[..]);
        assert_eq!(table.entry(2).unwrap().height, 300.0);
        assert_eq!(table.entry(3).unwrap().offset, 280.0 + 300.0);
        assert_adjacency(&table);
    }

    #[test]
    fn patch_from_zero_rebuilds_all_offsets() {
        let mut table = PositionTable::new();
        let est = HeightEstimator::default();
        let mut heights = HeightTable::new();
        let rows = items(3);
        table.rebuild(&rows, &heights, &est);

        heights.record(0, 150.0);
        table.patch_from(0, &rows, &heights, &est);

        assert_eq!(table.entry(0).unwrap().offset, 0.0);
        assert_eq!(table.entry(1).unwrap().offset, 150.0);
        assert_eq!(table.entry(2).unwrap().offset, 290.0);
    }

    #[test]
    fn patch_past_the_end_is_ignored() {
        let mut table = PositionTable::new();
        let est = HeightEstimator::default();
        let rows = items(2);
        table.rebuild(&rows, &HeightTable::new(), &est);
        let before = table.entries().to_vec();

        table.patch_from(2, &rows, &HeightTable::new(), &est);
        assert_eq!(table.entries(), &before[..]);
    }

    #[test]
    fn empty_collection_has_zero_extent() {
        let mut table = PositionTable::new();
        table.rebuild(
            &items(0),
            &HeightTable::new(),
            &HeightEstimator::default(),
        );
        assert!(table.is_empty());
        assert_eq!(table.total_height(), 0.0);
    }
}
