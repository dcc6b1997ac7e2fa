//! Property-based tests for the rating filter.
//!
//! For every threshold in [0,5] and every collection, `filter_bookmarks`
//! returns exactly the subsequence whose rating meets the threshold, in
//! original order, without mutating its input.

use proptest::prelude::*;

use linkmark::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use linkmark::types::bookmark::Bookmark;

/// Strategy for a collection of bookmarks with unique, position-derived ids.
fn arb_bookmarks() -> impl Strategy<Value = Vec<Bookmark>> {
    proptest::collection::vec((1..=5u8, "[a-z]{1,12}"), 0..20).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (rating, title))| {
                Bookmark::new(
                    &format!("bm-{}", i),
                    &format!("https://example.com/{}", i),
                    &title,
                    rating,
                    "",
                )
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn filter_returns_exact_subsequence(
        bookmarks in arb_bookmarks(),
        threshold in 0..=5u8,
    ) {
        let mut store = BookmarkStore::new();
        store.set_filter_threshold(threshold).unwrap();

        let before = bookmarks.clone();
        let surviving: Vec<Bookmark> = store
            .filter_bookmarks(&bookmarks)
            .into_iter()
            .cloned()
            .collect();

        // Input list is untouched
        prop_assert_eq!(&bookmarks, &before);

        // Result is exactly the rating >= threshold subsequence, in order
        let expected: Vec<Bookmark> = before
            .iter()
            .filter(|b| b.rating >= threshold)
            .cloned()
            .collect();
        prop_assert_eq!(surviving, expected);
    }

    #[test]
    fn threshold_zero_returns_input_unchanged(bookmarks in arb_bookmarks()) {
        let store = BookmarkStore::new();
        let surviving: Vec<Bookmark> = store
            .filter_bookmarks(&bookmarks)
            .into_iter()
            .cloned()
            .collect();
        prop_assert_eq!(surviving, bookmarks);
    }
}
