use serde::{Deserialize, Serialize};

/// Represents a saved bookmark.
///
/// `expanded` is purely local UI state controlling whether detail fields
/// render; it is never sent to or received from the bookmark service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub url: String,
    pub title: String,
    pub rating: u8,
    #[serde(default)]
    pub description: String,
    #[serde(skip)]
    pub expanded: bool,
}

impl Bookmark {
    /// Creates a collapsed bookmark with the given server-assigned id.
    pub fn new(id: &str, url: &str, title: &str, rating: u8, description: &str) -> Self {
        Self {
            id: id.to_string(),
            url: url.to_string(),
            title: title.to_string(),
            rating,
            description: description.to_string(),
            expanded: false,
        }
    }
}

/// Payload for creating a bookmark against the bookmark service.
///
/// The service assigns the id; the caller supplies everything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBookmark {
    pub url: String,
    pub title: String,
    pub rating: u8,
    #[serde(default)]
    pub description: String,
}

impl NewBookmark {
    pub fn new(url: &str, title: &str, rating: u8, description: &str) -> Self {
        Self {
            url: url.to_string(),
            title: title.to_string(),
            rating,
            description: description.to_string(),
        }
    }
}
