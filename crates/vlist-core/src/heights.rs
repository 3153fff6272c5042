#![forbid(unsafe_code)]

//! Measured row heights, populated lazily as the host reports them.
//!
//! An absent entry means the row has never been measured and its estimated
//! height is still in effect. The table is owned exclusively by the engine;
//! hosts feed it only through [`ListEngine::report_height`](crate::ListEngine::report_height).

/// Sparse `index -> measured height` table.
#[derive(Debug, Clone, Default)]
pub struct HeightTable {
    measured: Vec<Option<f32>>,
}

impl HeightTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Measured height for `index`, or `None` while it is still an estimate.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.measured.get(index).copied().flatten()
    }

    /// Whether `index` has a real measurement.
    #[must_use]
    pub fn is_measured(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Record a measurement, returning `true` if the table changed.
    ///
    /// Recording the exact value an index already holds is a no-op and
    /// returns `false`; the caller uses this to skip position repair.
    /// A first measurement always counts as a change, even when it happens
    /// to match the estimate, because the index graduates from estimated to
    /// measured.
    pub fn record(&mut self, index: usize, height: f32) -> bool {
        if self.get(index) == Some(height) {
            return false;
        }
        if index >= self.measured.len() {
            self.measured.resize(index + 1, None);
        }
        self.measured[index] = Some(height);
        true
    }

    /// Number of indices with a real measurement.
    #[must_use]
    pub fn measured_count(&self) -> usize {
        self.measured.iter().filter(|h| h.is_some()).count()
    }

    /// Drop every measurement (collection replaced).
    pub fn clear(&mut self) {
        self.measured.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_until_recorded() {
        let mut table = HeightTable::new();
        assert_eq!(table.get(3), None);
        assert!(!table.is_measured(3));

        assert!(table.record(3, 120.0));
        assert_eq!(table.get(3), Some(120.0));
        assert!(table.is_measured(3));
        // Neighbors stay unmeasured.
        assert_eq!(table.get(2), None);
        assert_eq!(table.get(4), None);
    }

    #[test]
    fn identical_record_is_a_no_op() {
        let mut table = HeightTable::new();
        assert!(table.record(0, 150.0));
        assert!(!table.record(0, 150.0));
        assert_eq!(table.measured_count(), 1);
    }

    #[test]
    fn changed_record_reports_change() {
        let mut table = HeightTable::new();
        assert!(table.record(0, 150.0));
        assert!(table.record(0, 151.0));
        assert_eq!(table.get(0), Some(151.0));
    }

    #[test]
    fn clear_drops_everything() {
        let mut table = HeightTable::new();
        table.record(0, 90.0);
        table.record(5, 110.0);
        table.clear();
        assert_eq!(table.get(0), None);
        assert_eq!(table.get(5), None);
        assert_eq!(table.measured_count(), 0);
    }
}
