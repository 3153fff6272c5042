#![forbid(unsafe_code)]

//! Scripted frame-by-frame driver for a [`ListEngine`].
//!
//! A test describes each frame as a batch of raw events (scroll offsets,
//! height reports, navigation input); the pump delivers the batch, commits
//! the frame, and records the resulting snapshot. Snapshots serialize to
//! JSONL so failing runs can be diffed line by line.

use vlist_core::{FrameSnapshot, InputEvent, ListEngine, ListItem};

/// One raw event inside a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PumpEvent {
    /// Raw scroll-offset event from the hosting viewport.
    Scroll(f32),
    /// Observed rendered height for a row.
    Measure(usize, f32),
    /// Navigation/selection input.
    Input(InputEvent),
    /// Viewport resize.
    Resize(f32),
}

/// Drives an engine one frame at a time and keeps the committed snapshots.
#[derive(Debug)]
pub struct FramePump<T> {
    engine: ListEngine<T>,
    snapshots: Vec<FrameSnapshot>,
}

impl<T: ListItem> FramePump<T> {
    /// Wrap an engine.
    #[must_use]
    pub fn new(engine: ListEngine<T>) -> Self {
        Self {
            engine,
            snapshots: Vec::new(),
        }
    }

    /// The driven engine.
    #[must_use]
    pub fn engine(&self) -> &ListEngine<T> {
        &self.engine
    }

    /// Mutable access for script steps the event vocabulary does not cover
    /// (collection swaps in particular).
    pub fn engine_mut(&mut self) -> &mut ListEngine<T> {
        &mut self.engine
    }

    /// Deliver one frame's raw events, commit, and record the snapshot.
    pub fn frame(&mut self, events: &[PumpEvent]) -> FrameSnapshot {
        for event in events {
            match *event {
                PumpEvent::Scroll(offset) => self.engine.on_scroll(offset),
                PumpEvent::Measure(index, height) => self.engine.report_height(index, height),
                PumpEvent::Input(input) => {
                    let _ = self.engine.handle_input(input);
                }
                PumpEvent::Resize(height) => self.engine.set_viewport_height(height),
            }
        }
        let snapshot = self.engine.commit_frame();
        self.snapshots.push(snapshot);
        snapshot
    }

    /// Run a whole script, one inner slice per frame.
    pub fn run(&mut self, script: &[Vec<PumpEvent>]) {
        for frame in script {
            self.frame(frame);
        }
    }

    /// An empty frame (commit with no new input).
    pub fn idle_frame(&mut self) -> FrameSnapshot {
        self.frame(&[])
    }

    /// All committed snapshots, in frame order.
    #[must_use]
    pub fn snapshots(&self) -> &[FrameSnapshot] {
        &self.snapshots
    }

    /// Serialize the committed snapshots as JSONL, one frame per line.
    pub fn jsonl(&self) -> Result<String, serde_json::Error> {
        let mut out = String::new();
        for snapshot in &self.snapshots {
            out.push_str(&serde_json::to_string(snapshot)?);
            out.push('\n');
        }
        Ok(out)
    }
}
