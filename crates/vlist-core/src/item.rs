#![forbid(unsafe_code)]

//! The item seam between the engine and opaque payloads.
//!
//! The engine never inspects item contents beyond two things: a stable
//! identity (so hosts can key rendered rows across range changes) and a
//! textual-length proxy used to estimate the height of rows that have not
//! been measured yet.

/// Trait for items that can be windowed by a [`ListEngine`](crate::ListEngine).
///
/// Implementations must keep `id` stable for the lifetime of a collection;
/// the engine treats a new collection reference as a full reset, but within
/// one collection the id is the host's handle for row reuse.
pub trait ListItem {
    /// Stable unique identifier of this item.
    fn id(&self) -> u64;

    /// Combined length of the item's textual fields.
    ///
    /// Feeds the height heuristic in [`HeightEstimator`](crate::HeightEstimator);
    /// it only has to be a rough proxy, not an exact character count.
    fn content_len(&self) -> usize;
}

impl<I: ListItem> ListItem for &I {
    fn id(&self) -> u64 {
        (**self).id()
    }

    fn content_len(&self) -> usize {
        (**self).content_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        id: u64,
        text: String,
    }

    impl ListItem for Row {
        fn id(&self) -> u64 {
            self.id
        }

        fn content_len(&self) -> usize {
            self.text.len()
        }
    }

    #[test]
    fn reference_delegates() {
        let row = Row {
            id: 7,
            text: "hello".into(),
        };
        let by_ref = &row;
        assert_eq!(by_ref.id(), 7);
        assert_eq!(by_ref.content_len(), 5);
    }
}
