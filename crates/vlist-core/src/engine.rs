#![forbid(unsafe_code)]

//! The windowing engine facade.
//!
//! [`ListEngine`] owns the collection, the position and height tables, the
//! frame coalescers, and the focus state. Hosts feed it raw inputs (scroll
//! offsets, per-row measurements, navigation events) and read back the
//! resolved outputs (visible range, item slice, draw offset, total extent).
//! All recomputation is explicit: range resolution is a pure function of the
//! position table and the committed viewport state, re-run at each frame
//! commit and after every input that changes either.
//!
//! # Frame protocol
//!
//! 1. Deliver raw events as they arrive: [`ListEngine::on_scroll`],
//!    [`ListEngine::report_height`] — both buffer, neither recomputes.
//! 2. Once per rendering frame call [`ListEngine::commit_frame`]: the latest
//!    scroll offset is committed, the measurement batch drains into a single
//!    position patch, and the visible range is re-resolved.
//! 3. Read outputs, render the slice, report new measurements, repeat.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::estimate::HeightEstimator;
use crate::focus::{ComfortBand, FocusMove, next_index};
use crate::heights::HeightTable;
use crate::item::ListItem;
use crate::position::PositionTable;
use crate::range::{RangeStrategy, VisibleRange, resolve_first_screen, resolve_windowed};
use crate::sched::{MeasureBatch, ScrollCoalescer};

/// Engine construction error.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The viewport extent must be a positive number of pixels.
    NonPositiveViewport(f32),
    /// Comfort margins must be non-negative and sum below the viewport.
    InvalidComfortBand(ComfortBand),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveViewport(h) => {
                write!(f, "viewport height must be positive, got {h}")
            }
            Self::InvalidComfortBand(band) => write!(
                f,
                "comfort band fractions invalid: top {}, bottom {}",
                band.top_fraction, band.bottom_fraction
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Engine tuning, validated at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Extra rows materialized beyond each visible edge.
    pub overscan: usize,
    /// Fixed viewport extent in pixels.
    pub viewport_height: f32,
    /// How ranges are resolved (capability flag, not runtime sniffing).
    pub strategy: RangeStrategy,
    /// Height heuristic for unmeasured rows.
    pub estimator: HeightEstimator,
    /// Auto-scroll comfort margins.
    pub comfort: ComfortBand,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            overscan: 3,
            viewport_height: 600.0,
            strategy: RangeStrategy::Interactive,
            estimator: HeightEstimator::default(),
            comfort: ComfortBand::default(),
        }
    }
}

impl EngineConfig {
    /// Check the config for degenerate values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.viewport_height.is_finite() || self.viewport_height <= 0.0 {
            return Err(ConfigError::NonPositiveViewport(self.viewport_height));
        }
        if !self.comfort.is_valid() {
            return Err(ConfigError::InvalidComfortBand(self.comfort));
        }
        Ok(())
    }
}

/// Navigation and selection input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Move focus one row up.
    Up,
    /// Move focus one row down.
    Down,
    /// Move focus one viewport up.
    PageUp,
    /// Move focus one viewport down.
    PageDown,
    /// Move focus to the first row.
    Home,
    /// Move focus to the last row.
    End,
    /// Emit the focused item.
    Select,
    /// Pointer pressed on a specific row.
    PointerDown(usize),
    /// Input focus left the hosting container.
    FocusLost,
}

/// One row of the materialized slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleItem<'a, T> {
    /// The item payload.
    pub item: &'a T,
    /// Its index in the collection.
    pub index: usize,
    /// Whether this row currently holds focus.
    pub is_focused: bool,
}

/// Per-frame commit accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameStats {
    /// Raw scroll events coalesced into this commit.
    pub scroll_events: u32,
    /// Measurement reports drained this commit.
    pub height_reports: u32,
    /// First index the position patch started from, if one ran.
    pub patch_from: Option<usize>,
}

/// Committed outputs of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Committed scroll offset.
    pub scroll_offset: f32,
    /// Resolved visible range (overscan included).
    pub range: VisibleRange,
    /// Top pixel offset at which the slice should be drawn.
    pub offset_y: f32,
    /// Full scrollable extent.
    pub total_height: f32,
    /// Commit accounting.
    pub stats: FrameStats,
}

/// Windowing engine over a collection of [`ListItem`]s.
#[derive(Debug)]
pub struct ListEngine<T> {
    config: EngineConfig,
    items: Vec<T>,
    heights: HeightTable,
    positions: PositionTable,
    scroll: ScrollCoalescer,
    measures: MeasureBatch,
    /// Last committed scroll position.
    scroll_offset: f32,
    /// Last resolved range.
    range: VisibleRange,
    focused: Option<usize>,
}

impl<T: ListItem> ListEngine<T> {
    /// Create an engine with the given configuration and no items.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            items: Vec::new(),
            heights: HeightTable::new(),
            positions: PositionTable::new(),
            scroll: ScrollCoalescer::new(),
            measures: MeasureBatch::new(),
            scroll_offset: 0.0,
            range: VisibleRange::EMPTY,
            focused: None,
        })
    }

    /// Create an engine with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        // The default config is valid by construction.
        Self::new(EngineConfig::default()).expect("default config is valid")
    }

    // ------------------------------------------------------------------
    // Inputs
    // ------------------------------------------------------------------

    /// Replace the collection. Full reset: measurements are dropped, the
    /// position table is re-estimated, focus clears, scroll returns to 0,
    /// and any pending frame work is canceled.
    pub fn set_items(&mut self, items: Vec<T>) {
        debug!(count = items.len(), "collection replaced");
        self.items = items;
        self.heights.clear();
        self.scroll.clear();
        self.measures.clear();
        self.scroll_offset = 0.0;
        self.focused = None;
        self.positions
            .rebuild(&self.items, &self.heights, &self.config.estimator);
        self.resolve();
    }

    /// Record a raw scroll event. Buffered; committed by [`Self::commit_frame`].
    pub fn on_scroll(&mut self, offset: f32) {
        self.scroll.push(offset);
    }

    /// Record an observed row height. Buffered; drained by
    /// [`Self::commit_frame`]. Out-of-bounds indices are tolerated here and
    /// dropped at drain time.
    pub fn report_height(&mut self, index: usize, observed_height: f32) {
        self.measures.push(index, observed_height);
    }

    /// Resize the viewport. Degenerate (non-positive) heights are ignored.
    pub fn set_viewport_height(&mut self, viewport_height: f32) {
        if !viewport_height.is_finite() || viewport_height <= 0.0 {
            debug!(viewport_height, "ignoring degenerate viewport resize");
            return;
        }
        self.config.viewport_height = viewport_height;
        self.resolve();
    }

    /// Handle a navigation/selection event.
    ///
    /// Returns the selected item when the event was [`InputEvent::Select`]
    /// and a row was focused. In [`RangeStrategy::Headless`] mode input is
    /// inert: there is no interactive focus in a non-rendering pre-pass.
    pub fn handle_input(&mut self, event: InputEvent) -> Option<&T> {
        if self.config.strategy == RangeStrategy::Headless {
            return None;
        }
        match event {
            InputEvent::Select => {
                let index = self.focused?;
                trace!(index, "item selected");
                self.items.get(index)
            }
            InputEvent::FocusLost => {
                self.focused = None;
                None
            }
            InputEvent::PointerDown(index) => {
                if index < self.items.len() {
                    self.focus_on(index);
                }
                None
            }
            InputEvent::Up => self.move_focus(FocusMove::Up),
            InputEvent::Down => self.move_focus(FocusMove::Down),
            InputEvent::PageUp => self.move_focus(FocusMove::PageUp),
            InputEvent::PageDown => self.move_focus(FocusMove::PageDown),
            InputEvent::Home => self.move_focus(FocusMove::Home),
            InputEvent::End => self.move_focus(FocusMove::End),
        }
    }

    /// Commit the frame: apply the latest scroll offset, drain the
    /// measurement batch into one position patch, and re-resolve the range.
    pub fn commit_frame(&mut self) -> FrameSnapshot {
        let (committed, scroll_events) = self.scroll.drain();
        if let Some(offset) = committed {
            self.scroll_offset = offset.max(0.0);
        }

        let reports = self.measures.drain();
        let height_reports = reports.len() as u32;
        let mut patch_from: Option<usize> = None;
        for (index, observed) in reports {
            // The collection may have shrunk between scheduling and delivery.
            if index >= self.items.len() {
                continue;
            }
            if self.heights.record(index, observed) {
                patch_from = Some(patch_from.map_or(index, |first| first.min(index)));
            }
        }
        if let Some(from) = patch_from {
            self.positions
                .patch_from(from, &self.items, &self.heights, &self.config.estimator);
        }

        self.resolve();

        let stats = FrameStats {
            scroll_events,
            height_reports,
            patch_from,
        };
        trace!(
            scroll_offset = self.scroll_offset,
            start = self.range.start,
            end = ?self.range.end,
            ?stats,
            "frame committed"
        );
        FrameSnapshot {
            scroll_offset: self.scroll_offset,
            range: self.range,
            offset_y: self.offset_y(),
            total_height: self.total_height(),
            stats,
        }
    }

    // ------------------------------------------------------------------
    // Outputs
    // ------------------------------------------------------------------

    /// Current engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of items in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Last committed scroll offset.
    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Currently focused index, if any.
    #[must_use]
    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    /// Last resolved visible range (overscan included).
    #[must_use]
    pub fn visible_range(&self) -> VisibleRange {
        self.range
    }

    /// Materialized slice for the current range, in order.
    #[must_use]
    pub fn visible_items(&self) -> Vec<VisibleItem<'_, T>> {
        self.range
            .indices()
            .filter_map(|index| {
                self.items.get(index).map(|item| VisibleItem {
                    item,
                    index,
                    is_focused: self.focused == Some(index),
                })
            })
            .collect()
    }

    /// Top pixel offset of the first visible row (0 in headless mode).
    #[must_use]
    pub fn offset_y(&self) -> f32 {
        if self.config.strategy == RangeStrategy::Headless || self.range.is_empty() {
            return 0.0;
        }
        self.positions
            .entry(self.range.start)
            .map_or(0.0, |entry| entry.offset)
    }

    /// Full scrollable extent.
    #[must_use]
    pub fn total_height(&self) -> f32 {
        self.positions.total_height()
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Re-resolve the visible range from current state. Pure recomputation:
    /// triggered on frame commits, collection swaps, viewport resizes, and
    /// focus corrections.
    fn resolve(&mut self) {
        self.range = match self.config.strategy {
            RangeStrategy::Interactive => resolve_windowed(
                &self.positions,
                self.scroll_offset,
                self.config.viewport_height,
                self.config.overscan,
            ),
            RangeStrategy::Headless => resolve_first_screen(
                &self.items,
                &self.config.estimator,
                self.config.viewport_height,
            ),
        };
    }

    fn move_focus(&mut self, movement: FocusMove) -> Option<&T> {
        let next = next_index(
            self.focused,
            movement,
            self.items.len(),
            self.range.start,
            self.range.len(),
        );
        if let Some(index) = next {
            self.focus_on(index);
        }
        None
    }

    /// Transition focus to `index`; a genuinely new focus target triggers
    /// the comfort-band auto-scroll correction.
    fn focus_on(&mut self, index: usize) {
        if self.focused == Some(index) {
            return;
        }
        trace!(from = ?self.focused, to = index, "focus moved");
        self.focused = Some(index);

        let Some(entry) = self.positions.entry(index) else {
            return;
        };
        if let Some(corrected) = self.config.comfort.correction(
            entry.offset,
            entry.height,
            self.scroll_offset,
            self.config.viewport_height,
        ) {
            self.scroll_offset = corrected.max(0.0);
            self.resolve();
        }
    }
}
