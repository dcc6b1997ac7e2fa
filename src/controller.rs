//! Event controller for Linkmark.
//!
//! Translates discrete UI events into store mutations followed by a
//! mandatory full re-render. The store is the single source of truth: every
//! successfully handled event ends with exactly one repaint of the render
//! target, even when the mutation has no visible effect. Service-backed
//! events (create, delete) mutate local state only after the service call
//! resolves; a failed call returns the error with state untouched and no
//! repaint.

use crate::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use crate::services::api_client::BookmarkApiTrait;
use crate::services::renderer;
use crate::types::errors::ControllerError;
use crate::types::events::UiEvent;

/// The single render target markup is painted into.
///
/// Implemented by the host's DOM binding layer: each `paint` replaces all
/// prior content wholesale (event listeners survive re-renders through
/// delegation, which lives outside this crate).
pub trait RenderTarget {
    fn paint(&mut self, markup: &str);
}

/// Owns the store and the service client; maps events to mutations.
pub struct Controller<A: BookmarkApiTrait> {
    store: BookmarkStore,
    api: A,
}

impl<A: BookmarkApiTrait> Controller<A> {
    pub fn new(store: BookmarkStore, api: A) -> Self {
        Self { store, api }
    }

    /// Read access to the store snapshot, for hosts and tests.
    pub fn store(&self) -> &BookmarkStore {
        &self.store
    }

    /// Read access to the service client.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Derives markup from the current snapshot and paints it.
    pub fn render_into(&self, target: &mut dyn RenderTarget) {
        target.paint(&renderer::render(&self.store));
    }

    /// Handles one UI event: mutate the store, then repaint.
    ///
    /// On any error the store is exactly as it was before the call and the
    /// target has not been repainted. Errors are recoverable; the caller
    /// reports them once and carries on.
    pub fn handle_event(
        &mut self,
        event: UiEvent,
        target: &mut dyn RenderTarget,
    ) -> Result<(), ControllerError> {
        match event {
            UiEvent::NewBookmarkClicked => {
                self.store.set_adding(true);
            }
            UiEvent::CancelClicked => {
                self.store.set_adding(false);
            }
            UiEvent::CreateSubmitted(payload) => {
                let bookmark = self.api.create_bookmark(&payload)?;
                self.store.add_bookmark(bookmark);
                self.store.set_adding(false);
            }
            UiEvent::FilterSubmitted(threshold) => {
                self.store.set_filter_threshold(threshold)?;
            }
            UiEvent::TitleClicked(id) => {
                self.store.toggle_expand(&id)?;
            }
            UiEvent::DeleteClicked(id) => {
                self.api.delete_bookmark(&id)?;
                // A local miss after remote success stays a silent no-op;
                // the repaint still happens.
                self.store.find_and_delete(&id);
            }
        }
        self.render_into(target);
        Ok(())
    }
}
