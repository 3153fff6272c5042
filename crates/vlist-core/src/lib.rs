#![forbid(unsafe_code)]

//! Windowed rendering engine for large, variable-height item lists.
//!
//! The engine decides which slice of a collection must be materialized for a
//! fixed viewport, without the host instantiating off-screen rows. Four
//! pieces cooperate:
//!
//! - [`PositionTable`] — a cumulative-offset table over estimated and
//!   measured row heights, repaired incrementally as measurements arrive.
//! - [`resolve_windowed`] — O(log n) visible-range resolution with an
//!   overscan margin (plus [`resolve_first_screen`], the headless fallback).
//! - [`HeightTable`] + the engine's measurement batch — the feedback loop
//!   that reconciles estimates with observed heights.
//! - [`ComfortBand`] + focus movement — keyboard navigation that keeps the
//!   focused row inside a comfortable viewport band via auto-scroll.
//!
//! [`ListEngine`] ties them together behind a frame-aligned commit protocol:
//! raw scroll events and height reports buffer between frames and become
//! observable in a single [`ListEngine::commit_frame`] call.
//!
//! # Example
//!
//! ```
//! use vlist_core::{EngineConfig, InputEvent, ListEngine, ListItem};
//!
//! struct Post {
//!     id: u64,
//!     title: String,
//!     body: String,
//! }
//!
//! impl ListItem for Post {
//!     fn id(&self) -> u64 {
//!         self.id
//!     }
//!
//!     fn content_len(&self) -> usize {
//!         self.title.len() + self.body.len()
//!     }
//! }
//!
//! let mut engine = ListEngine::new(EngineConfig::default()).unwrap();
//! engine.set_items(
//!     (0..10_000)
//!         .map(|i| Post {
//!             id: i,
//!             title: format!("post {i}"),
//!             body: "lorem ipsum".repeat(8),
//!         })
//!         .collect(),
//! );
//!
//! // Raw events buffer; the frame commit makes them observable.
//! engine.on_scroll(1_234.0);
//! engine.report_height(0, 96.0);
//! let snapshot = engine.commit_frame();
//! assert!(!snapshot.range.is_empty());
//!
//! // Keyboard navigation with comfort-band auto-scroll.
//! engine.handle_input(InputEvent::Down);
//! assert!(engine.focused_index().is_some());
//! ```

pub mod engine;
pub mod estimate;
pub mod focus;
pub mod heights;
pub mod item;
pub mod position;
pub mod range;
pub mod sched;

pub use engine::{
    ConfigError, EngineConfig, FrameSnapshot, FrameStats, InputEvent, ListEngine, VisibleItem,
};
pub use estimate::HeightEstimator;
pub use focus::{ComfortBand, FocusMove};
pub use heights::HeightTable;
pub use item::ListItem;
pub use position::{PositionEntry, PositionTable};
pub use range::{RangeStrategy, VisibleRange, resolve_first_screen, resolve_windowed};
pub use sched::{MeasureBatch, ScrollCoalescer};
