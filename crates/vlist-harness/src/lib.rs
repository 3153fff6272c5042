#![forbid(unsafe_code)]

//! Deterministic test support for the vlist engine.
//!
//! Two pieces:
//!
//! - [`fixtures`] — seeded synthetic collections with variable-length text,
//!   reproducible run to run.
//! - [`pump`] — a scripted frame driver that batches raw events per frame,
//!   commits, and logs one JSONL snapshot line per frame.
//!
//! Everything here is host-side tooling; nothing feeds back into engine
//! behavior.

pub mod fixtures;
pub mod pump;

pub use fixtures::{FixturePost, SeededRng, filler_text, post_fixtures};
pub use pump::{FramePump, PumpEvent};
