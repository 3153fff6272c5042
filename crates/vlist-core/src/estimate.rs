#![forbid(unsafe_code)]

//! Heuristic height estimation for unmeasured items.
//!
//! Until a row has actually been laid out and reported back, its height is a
//! guess derived from content length: assume a fixed character-per-line wrap
//! width, a fixed line height, and constant vertical padding. The estimate is
//! a lower-bound heuristic only — once a real measurement exists for an index
//! the [`HeightTable`](crate::HeightTable) value always wins.

/// Parameters of the content-length height heuristic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightEstimator {
    /// Minimum height of any row, in pixels.
    pub min_height: f32,
    /// Height of one wrapped text line, in pixels.
    pub line_height: f32,
    /// Assumed characters per wrapped line.
    pub chars_per_line: usize,
    /// Constant vertical padding added to the text block, in pixels.
    pub padding: f32,
}

impl Default for HeightEstimator {
    fn default() -> Self {
        Self {
            min_height: 80.0,
            line_height: 20.0,
            chars_per_line: 50,
            padding: 40.0,
        }
    }
}

impl HeightEstimator {
    /// Estimate a row height from its combined textual length.
    ///
    /// `max(min_height, ceil(len / chars_per_line) * line_height + padding)`.
    #[must_use]
    pub fn estimate(&self, content_len: usize) -> f32 {
        let lines = content_len.div_ceil(self.chars_per_line.max(1));
        let text_height = lines as f32 * self.line_height + self.padding;
        text_height.max(self.min_height)
    }
}
