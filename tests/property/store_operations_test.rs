//! Property-based tests for BookmarkStore mutations.
//!
//! Append-only insertion, targeted deletion with silent-no-op on miss, and
//! toggle isolation hold for arbitrary collections.

use proptest::prelude::*;

use linkmark::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use linkmark::types::bookmark::Bookmark;

fn arb_bookmark(id: String) -> impl Strategy<Value = Bookmark> {
    (1..=5u8, "[a-z]{1,12}", "[a-z ]{0,24}", any::<bool>()).prop_map(
        move |(rating, title, description, expanded)| {
            let mut bookmark = Bookmark::new(
                &id,
                &format!("https://example.com/{}", id),
                &title,
                rating,
                &description,
            );
            bookmark.expanded = expanded;
            bookmark
        },
    )
}

fn arb_bookmarks(max: usize) -> impl Strategy<Value = Vec<Bookmark>> {
    proptest::collection::vec((1..=5u8, "[a-z]{1,12}", any::<bool>()), 0..max).prop_map(
        |entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (rating, title, expanded))| {
                    let mut bookmark = Bookmark::new(
                        &format!("bm-{}", i),
                        &format!("https://example.com/{}", i),
                        &title,
                        rating,
                        "",
                    );
                    bookmark.expanded = expanded;
                    bookmark
                })
                .collect()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn add_is_append_only(
        bookmarks in arb_bookmarks(16),
        new_bookmark in arb_bookmark("fresh".to_string()),
    ) {
        let before = bookmarks.clone();
        let mut store = BookmarkStore::with_bookmarks(bookmarks);
        store.add_bookmark(new_bookmark.clone());

        prop_assert_eq!(store.bookmark_count(), before.len() + 1);
        prop_assert_eq!(store.bookmarks().last().unwrap(), &new_bookmark);
        prop_assert_eq!(&store.bookmarks()[..before.len()], &before[..]);
    }

    #[test]
    fn delete_removes_exactly_the_match(
        bookmarks in arb_bookmarks(16),
        selector in any::<proptest::sample::Index>(),
    ) {
        prop_assume!(!bookmarks.is_empty());
        let victim_idx = selector.index(bookmarks.len());
        let victim_id = bookmarks[victim_idx].id.clone();
        let mut expected = bookmarks.clone();
        expected.remove(victim_idx);

        let mut store = BookmarkStore::with_bookmarks(bookmarks);
        prop_assert!(store.find_and_delete(&victim_id));
        prop_assert_eq!(store.bookmarks(), &expected[..]);
    }

    #[test]
    fn delete_miss_leaves_collection_identical(bookmarks in arb_bookmarks(16)) {
        let before = bookmarks.clone();
        let mut store = BookmarkStore::with_bookmarks(bookmarks);

        prop_assert!(!store.find_and_delete("absent-id"));
        prop_assert_eq!(store.bookmarks(), &before[..]);
    }

    #[test]
    fn toggle_flips_only_the_expanded_flag(
        bookmarks in arb_bookmarks(16),
        selector in any::<proptest::sample::Index>(),
    ) {
        prop_assume!(!bookmarks.is_empty());
        let idx = selector.index(bookmarks.len());
        let id = bookmarks[idx].id.clone();
        let before = bookmarks.clone();

        let mut store = BookmarkStore::with_bookmarks(bookmarks);
        store.toggle_expand(&id).unwrap();

        for (i, (was, now)) in before.iter().zip(store.bookmarks()).enumerate() {
            if i == idx {
                prop_assert_eq!(now.expanded, !was.expanded);
                let mut flipped = was.clone();
                flipped.expanded = !flipped.expanded;
                prop_assert_eq!(now, &flipped);
            } else {
                prop_assert_eq!(now, was);
            }
        }
    }
}
