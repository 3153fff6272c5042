#![forbid(unsafe_code)]

//! Whole-engine scenarios driven frame by frame: coalescing behavior,
//! measurement batching, and teardown cancellation.

use vlist_core::{EngineConfig, HeightEstimator, InputEvent, ListEngine};
use vlist_harness::{FixturePost, FramePump, PumpEvent, post_fixtures};

fn flat_100px_engine(count: usize) -> ListEngine<FixturePost> {
    let mut engine = ListEngine::new(EngineConfig {
        estimator: HeightEstimator {
            min_height: 100.0,
            line_height: 0.0,
            chars_per_line: 1,
            padding: 0.0,
        },
        ..EngineConfig::default()
    })
    .unwrap();
    engine.set_items(post_fixtures(3, count));
    engine
}

#[test]
fn scroll_burst_commits_once_with_the_latest_offset() {
    let mut pump = FramePump::new(flat_100px_engine(500));

    // Ten raw events inside one frame: one commit, latest offset wins.
    let burst: Vec<PumpEvent> = (1..=10).map(|i| PumpEvent::Scroll(i as f32 * 37.0)).collect();
    let snapshot = pump.frame(&burst);

    assert_eq!(snapshot.stats.scroll_events, 10);
    assert_eq!(snapshot.scroll_offset, 370.0);

    // The next idle frame commits nothing new.
    let idle = pump.idle_frame();
    assert_eq!(idle.stats.scroll_events, 0);
    assert_eq!(idle.scroll_offset, 370.0);
}

#[test]
fn measurement_reports_drain_in_one_batch() {
    let mut pump = FramePump::new(flat_100px_engine(500));
    pump.idle_frame();

    let snapshot = pump.frame(&[
        PumpEvent::Measure(3, 130.0),
        PumpEvent::Measure(1, 110.0),
        PumpEvent::Measure(3, 150.0),
    ]);
    assert_eq!(snapshot.stats.height_reports, 3);
    // One patch pass, starting at the lowest changed index.
    assert_eq!(snapshot.stats.patch_from, Some(1));
    // Latest report per index wins: +10 for row 1, +50 for row 3.
    assert_eq!(snapshot.total_height, 500.0 * 100.0 + 10.0 + 50.0);
}

#[test]
fn teardown_cancels_pending_frame_work() {
    let mut pump = FramePump::new(flat_100px_engine(100));
    pump.idle_frame();

    // Queue raw work, then replace the collection before the commit.
    pump.engine_mut().on_scroll(5_000.0);
    pump.engine_mut().report_height(40, 400.0);
    pump.engine_mut().set_items(post_fixtures(4, 10));

    let snapshot = pump.idle_frame();
    assert_eq!(snapshot.stats.scroll_events, 0);
    assert_eq!(snapshot.stats.height_reports, 0);
    assert_eq!(snapshot.scroll_offset, 0.0);
    assert_eq!(pump.engine().focused_index(), None);
}

#[test]
fn keyboard_walk_keeps_the_focused_row_in_the_band() {
    let mut pump = FramePump::new(flat_100px_engine(300));
    pump.idle_frame();

    // Walk downward through two viewports of rows.
    for _ in 0..12 {
        pump.frame(&[PumpEvent::Input(InputEvent::Down)]);
    }
    let engine = pump.engine();
    let focused = engine.focused_index().unwrap();
    assert_eq!(focused, 11);

    // The comfort band guarantees the focused row is materialized.
    assert!(engine.visible_range().contains(focused));
    let scroll = engine.scroll_offset();
    let viewport = engine.config().viewport_height;
    let row_top = focused as f32 * 100.0;
    let row_bottom = row_top + 100.0;
    assert!(row_top >= scroll);
    assert!(row_bottom <= scroll + viewport);
}

#[test]
fn mixed_script_round_trips_through_jsonl() {
    let mut pump = FramePump::new(flat_100px_engine(200));
    pump.run(&[
        vec![PumpEvent::Scroll(250.0)],
        vec![PumpEvent::Measure(0, 150.0)],
        vec![PumpEvent::Input(InputEvent::Down)],
        vec![PumpEvent::Resize(300.0)],
        vec![],
    ]);

    assert_eq!(pump.snapshots().len(), 5);
    let log = pump.jsonl().unwrap();
    assert_eq!(log.lines().count(), 5);

    // Every line parses and reports a non-negative scroll offset.
    for line in log.lines() {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        let offset = value["scroll_offset"].as_f64().unwrap();
        assert!(offset >= 0.0);
    }
}

#[test]
fn fixture_collections_window_like_real_data() {
    let mut engine = ListEngine::new(EngineConfig::default()).unwrap();
    engine.set_items(post_fixtures(8, 2_000));
    let mut pump = FramePump::new(engine);

    let first = pump.idle_frame();
    assert!(!first.range.is_empty());
    assert_eq!(first.range.start, 0);
    assert!(first.total_height > 0.0);

    // Scroll halfway into the collection; the window follows.
    let halfway = first.total_height / 2.0;
    let scrolled = pump.frame(&[PumpEvent::Scroll(halfway)]);
    assert!(scrolled.range.start > 0);
    assert!(scrolled.offset_y <= halfway);
    // The slice the host would render matches the resolved range.
    assert_eq!(pump.engine().visible_items().len(), scrolled.range.len());
}
