//! Bookmark service clients for Linkmark.
//!
//! The remote bookmark service owns persistence and assigns ids; this crate
//! only talks to it through `BookmarkApiTrait`. Both calls are single-shot:
//! a failure is surfaced once to the caller and never retried here.

use std::cell::RefCell;
use std::collections::HashSet;

use uuid::Uuid;

use crate::types::bookmark::{Bookmark, NewBookmark};
use crate::types::errors::ApiError;

/// Trait defining the bookmark service interface.
pub trait BookmarkApiTrait {
    /// Creates a bookmark; the returned record carries the server-assigned id.
    fn create_bookmark(&self, payload: &NewBookmark) -> Result<Bookmark, ApiError>;
    /// Deletes a bookmark by id. Success carries no payload.
    fn delete_bookmark(&self, id: &str) -> Result<(), ApiError>;
}

/// Bookmark service client over HTTP.
///
/// POSTs the JSON payload to the base URL for create and DELETEs
/// `{base_url}/{id}` for delete.
#[cfg(feature = "network")]
pub struct HttpBookmarkApi {
    client: reqwest::blocking::Client,
    base_url: String,
}

#[cfg(feature = "network")]
impl HttpBookmarkApi {
    /// Creates a client for the service rooted at `base_url` (no trailing
    /// slash expected).
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn remote_error(response: reqwest::blocking::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response.text().unwrap_or_default();
        ApiError::Remote { status, message }
    }
}

#[cfg(feature = "network")]
impl BookmarkApiTrait for HttpBookmarkApi {
    fn create_bookmark(&self, payload: &NewBookmark) -> Result<Bookmark, ApiError> {
        let response = self
            .client
            .post(&self.base_url)
            .json(payload)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::remote_error(response));
        }

        response
            .json::<Bookmark>()
            .map_err(|e| ApiError::Serialization(e.to_string()))
    }

    fn delete_bookmark(&self, id: &str) -> Result<(), ApiError> {
        let url = format!("{}/{}", self.base_url, id);
        let response = self
            .client
            .delete(&url)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::remote_error(response));
        }
        Ok(())
    }
}

/// Local stand-in for the bookmark service.
///
/// Mints v4 UUID ids on create and remembers which ids it issued so that
/// deleting an unknown id fails the way a remote 404 would. Used by the
/// demo binary and as a realistic double in tests.
pub struct InMemoryBookmarkApi {
    issued_ids: RefCell<HashSet<String>>,
}

impl InMemoryBookmarkApi {
    pub fn new() -> Self {
        Self {
            issued_ids: RefCell::new(HashSet::new()),
        }
    }
}

impl Default for InMemoryBookmarkApi {
    fn default() -> Self {
        Self::new()
    }
}

impl BookmarkApiTrait for InMemoryBookmarkApi {
    fn create_bookmark(&self, payload: &NewBookmark) -> Result<Bookmark, ApiError> {
        let id = Uuid::new_v4().to_string();
        self.issued_ids.borrow_mut().insert(id.clone());
        Ok(Bookmark::new(
            &id,
            &payload.url,
            &payload.title,
            payload.rating,
            &payload.description,
        ))
    }

    fn delete_bookmark(&self, id: &str) -> Result<(), ApiError> {
        if !self.issued_ids.borrow_mut().remove(id) {
            return Err(ApiError::Remote {
                status: 404,
                message: format!("no bookmark with id {}", id),
            });
        }
        Ok(())
    }
}
