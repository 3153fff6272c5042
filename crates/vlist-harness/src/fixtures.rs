#![forbid(unsafe_code)]

//! Seeded synthetic collections for tests and benches.
//!
//! Fixtures are fully deterministic: the same seed always produces the same
//! items, so scripted runs hash and diff cleanly. No clock, no `rand` — a
//! splitmix64 step is all the variety the fixtures need.

use vlist_core::ListItem;

const FILLER: &str = "lorem ipsum dolor sit amet consectetur adipiscing elit \
sed do eiusmod tempor incididunt ut labore et dolore magna aliqua ";

/// Deterministic pseudo-random stream (splitmix64).
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a stream from a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Next value in `[lo, hi)`.
    pub fn next_range(&mut self, lo: usize, hi: usize) -> usize {
        debug_assert!(lo < hi);
        lo + (self.next_u64() as usize) % (hi - lo)
    }
}

/// A synthetic feed post with variable-length text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixturePost {
    /// Stable identity.
    pub id: u64,
    /// Short title line.
    pub title: String,
    /// Body text of varying length.
    pub body: String,
}

impl ListItem for FixturePost {
    fn id(&self) -> u64 {
        self.id
    }

    fn content_len(&self) -> usize {
        self.title.len() + self.body.len()
    }
}

/// Deterministic filler text of exactly `len` bytes.
#[must_use]
pub fn filler_text(len: usize) -> String {
    FILLER.chars().cycle().take(len).collect()
}

/// Generate `count` posts with seed-determined text lengths.
///
/// Title lengths land in `[8, 40)`, body lengths in `[0, 600)`, which spans
/// single-line rows up to a dozen wrapped lines under the default estimator.
#[must_use]
pub fn post_fixtures(seed: u64, count: usize) -> Vec<FixturePost> {
    let mut rng = SeededRng::new(seed);
    (0..count)
        .map(|i| {
            let title_len = rng.next_range(8, 40);
            let body_len = rng.next_range(0, 600);
            FixturePost {
                id: i as u64,
                title: filler_text(title_len),
                body: filler_text(body_len),
            }
        })
        .collect()
}
