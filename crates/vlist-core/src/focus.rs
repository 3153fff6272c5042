#![forbid(unsafe_code)]

//! Focus movement and the comfort-band auto-scroll rule.
//!
//! Focus is a single nullable index. Directional moves clamp at the
//! collection edges; entering the list from the unfocused state lands on the
//! first row of the currently resolved range. Every transition into a new
//! focused row asks the comfort band for a scroll correction so the row
//! stays inside the viewport with context around it.

use serde::{Deserialize, Serialize};

/// Directional focus movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One viewport worth of rows up.
    PageUp,
    /// One viewport worth of rows down.
    PageDown,
    /// First row.
    Home,
    /// Last row.
    End,
}

/// Next focused index for a movement request.
///
/// `entry_index` is where focus lands when nothing was focused (the first
/// row of the resolved range); `page` is the current visible-row count used
/// by the paging moves. Returns `None` only for an empty collection.
#[must_use]
pub fn next_index(
    current: Option<usize>,
    movement: FocusMove,
    count: usize,
    entry_index: usize,
    page: usize,
) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    let Some(current) = current else {
        // Entering the list: land on the top of the resolved range.
        return Some(entry_index.min(last));
    };
    let next = match movement {
        FocusMove::Up => current.saturating_sub(1),
        FocusMove::Down => current.saturating_add(1).min(last),
        FocusMove::PageUp => current.saturating_sub(page.max(1)),
        FocusMove::PageDown => current.saturating_add(page.max(1)).min(last),
        FocusMove::Home => 0,
        FocusMove::End => last,
    };
    Some(next)
}

/// Comfort margins keeping the focused row away from the viewport edges.
///
/// Margins are fractions of the viewport height. The defaults are
/// deliberately asymmetric (5% top, 40% bottom) so downward navigation keeps
/// a block of forward context visible below the focused row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComfortBand {
    /// Top margin as a fraction of viewport height.
    pub top_fraction: f32,
    /// Bottom margin as a fraction of viewport height.
    pub bottom_fraction: f32,
}

impl Default for ComfortBand {
    fn default() -> Self {
        Self {
            top_fraction: 0.05,
            bottom_fraction: 0.40,
        }
    }
}

impl ComfortBand {
    /// Fractions must be non-negative and leave room for the row itself.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.top_fraction >= 0.0
            && self.bottom_fraction >= 0.0
            && self.top_fraction + self.bottom_fraction < 1.0
    }

    /// Scroll correction keeping the row `[top, top + height)` inside the
    /// band, or `None` when the row already sits comfortably.
    ///
    /// If the row's top is above `scroll + top_margin`, scroll so the top
    /// sits exactly at the top margin (floored at 0). Else if the row's
    /// bottom extends past `scroll + viewport - bottom_margin`, scroll so
    /// the bottom sits exactly at the bottom margin above the viewport's
    /// bottom edge.
    #[must_use]
    pub fn correction(
        &self,
        row_top: f32,
        row_height: f32,
        scroll_offset: f32,
        viewport_height: f32,
    ) -> Option<f32> {
        let top_margin = viewport_height * self.top_fraction;
        let bottom_margin = viewport_height * self.bottom_fraction;
        let row_bottom = row_top + row_height;

        if row_top < scroll_offset + top_margin {
            Some((row_top - top_margin).max(0.0))
        } else if row_bottom > scroll_offset + viewport_height - bottom_margin {
            Some(row_bottom - viewport_height + bottom_margin)
        } else {
            None
        }
    }
}
