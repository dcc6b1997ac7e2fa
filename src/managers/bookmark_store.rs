//! Bookmark Store for Linkmark.
//!
//! Single authoritative holder of the in-memory bookmark collection and the
//! two UI-mode fields (filter threshold, adding flag). All reads and writes
//! funnel through it; it knows nothing about rendering or networking.

use crate::types::bookmark::Bookmark;
use crate::types::errors::StoreError;

/// Highest selectable rating; the filter threshold shares the same ceiling.
pub const MAX_RATING: u8 = 5;

/// Trait defining the bookmark store interface.
pub trait BookmarkStoreTrait {
    fn add_bookmark(&mut self, bookmark: Bookmark);
    fn find_by_id(&self, id: &str) -> Option<&Bookmark>;
    fn find_and_delete(&mut self, id: &str) -> bool;
    fn toggle_expand(&mut self, id: &str) -> Result<(), StoreError>;
    fn filter_bookmarks<'a>(&self, list: &'a [Bookmark]) -> Vec<&'a Bookmark>;
    fn set_filter_threshold(&mut self, threshold: u8) -> Result<(), StoreError>;
    fn set_adding(&mut self, adding: bool);
    fn bookmarks(&self) -> &[Bookmark];
    fn filter_threshold(&self) -> u8;
    fn adding(&self) -> bool;
    fn bookmark_count(&self) -> usize;
}

/// In-memory bookmark store.
///
/// The store exclusively owns every `Bookmark` record and hands out shared
/// references; in-place mutation happens only through its methods.
pub struct BookmarkStore {
    bookmarks: Vec<Bookmark>,
    filter_threshold: u8,
    adding: bool,
}

impl BookmarkStore {
    /// Creates an empty store with no filter applied and list mode active.
    pub fn new() -> Self {
        Self {
            bookmarks: Vec::new(),
            filter_threshold: 0,
            adding: false,
        }
    }

    /// Creates a store pre-seeded with the given bookmarks, in order.
    pub fn with_bookmarks(bookmarks: Vec<Bookmark>) -> Self {
        Self {
            bookmarks,
            filter_threshold: 0,
            adding: false,
        }
    }

    fn find_index(&self, id: &str) -> Option<usize> {
        self.bookmarks.iter().position(|b| b.id == id)
    }
}

impl Default for BookmarkStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookmarkStoreTrait for BookmarkStore {
    /// Appends a fully-formed bookmark (server-assigned id) to the end of
    /// the collection. Validation happens upstream; this never fails.
    fn add_bookmark(&mut self, bookmark: Bookmark) {
        self.bookmarks.push(bookmark);
    }

    fn find_by_id(&self, id: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.id == id)
    }

    /// Removes the bookmark matching `id`. Returns whether anything was
    /// removed; an unknown id leaves the collection unchanged.
    fn find_and_delete(&mut self, id: &str) -> bool {
        match self.find_index(id) {
            Some(idx) => {
                self.bookmarks.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Flips the `expanded` flag on exactly the bookmark matching `id`.
    fn toggle_expand(&mut self, id: &str) -> Result<(), StoreError> {
        let idx = self
            .find_index(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        self.bookmarks[idx].expanded = !self.bookmarks[idx].expanded;
        Ok(())
    }

    /// Returns the subsequence of `list` whose rating meets the current
    /// threshold, in original order. Threshold 0 means no filter applied.
    fn filter_bookmarks<'a>(&self, list: &'a [Bookmark]) -> Vec<&'a Bookmark> {
        list.iter()
            .filter(|b| b.rating >= self.filter_threshold)
            .collect()
    }

    /// Sets the minimum-rating threshold. No side effect beyond the value
    /// change; re-rendering is the controller's responsibility.
    fn set_filter_threshold(&mut self, threshold: u8) -> Result<(), StoreError> {
        if threshold > MAX_RATING {
            return Err(StoreError::InvalidThreshold(threshold));
        }
        self.filter_threshold = threshold;
        Ok(())
    }

    fn set_adding(&mut self, adding: bool) {
        self.adding = adding;
    }

    fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    fn filter_threshold(&self) -> u8 {
        self.filter_threshold
    }

    fn adding(&self) -> bool {
        self.adding
    }

    fn bookmark_count(&self) -> usize {
        self.bookmarks.len()
    }
}
