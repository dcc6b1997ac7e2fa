//! App Core for Linkmark.
//!
//! Wires the store and a bookmark service client into a controller, and
//! runs the startup sequence. Created once at application start, lives for
//! the page session, no teardown.

use crate::controller::{Controller, RenderTarget};
use crate::managers::bookmark_store::BookmarkStore;
use crate::services::api_client::BookmarkApiTrait;
use crate::types::bookmark::Bookmark;
use crate::types::errors::ControllerError;
use crate::types::events::UiEvent;

/// Central application struct owning the controller (and through it, the
/// store and the service client).
pub struct App<A: BookmarkApiTrait> {
    pub controller: Controller<A>,
}

impl<A: BookmarkApiTrait> App<A> {
    /// Creates an app over the given service client with an empty store.
    pub fn new(api: A) -> Self {
        Self {
            controller: Controller::new(BookmarkStore::new(), api),
        }
    }

    /// Creates an app with a pre-seeded collection.
    pub fn with_seed(api: A, seed: Vec<Bookmark>) -> Self {
        Self {
            controller: Controller::new(BookmarkStore::with_bookmarks(seed), api),
        }
    }

    /// Startup sequence: paint the initial view.
    pub fn startup(&mut self, target: &mut dyn RenderTarget) {
        self.controller.render_into(target);
    }

    /// Forwards one UI event to the controller.
    pub fn handle_event(
        &mut self,
        event: UiEvent,
        target: &mut dyn RenderTarget,
    ) -> Result<(), ControllerError> {
        self.controller.handle_event(event, target)
    }
}
