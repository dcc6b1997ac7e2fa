//! Linkmark — client-side bookmark manager core.
//!
//! Entry point: runs a console demo driving the controller through a
//! scripted event sequence against the in-memory bookmark service.

use linkmark::app::App;
use linkmark::controller::RenderTarget;
use linkmark::managers::bookmark_store::BookmarkStoreTrait;
use linkmark::services::api_client::InMemoryBookmarkApi;
use linkmark::types::bookmark::NewBookmark;
use linkmark::types::events::UiEvent;

/// Render target that reports each repaint to stdout.
struct ConsoleTarget {
    paints: usize,
}

impl RenderTarget for ConsoleTarget {
    fn paint(&mut self, markup: &str) {
        self.paints += 1;
        let preview: String = markup.chars().take(96).collect();
        println!("  paint #{} ({} bytes): {}...", self.paints, markup.len(), preview);
    }
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────");
}

fn main() {
    println!();
    println!("Linkmark v{} — demo mode", env!("CARGO_PKG_VERSION"));
    println!();

    let mut app = App::new(InMemoryBookmarkApi::new());
    let mut target = ConsoleTarget { paints: 0 };

    section("Startup");
    app.startup(&mut target);

    section("Create two bookmarks");
    let events = [
        UiEvent::NewBookmarkClicked,
        UiEvent::CreateSubmitted(NewBookmark::new(
            "https://www.rust-lang.org",
            "Rust",
            5,
            "the language",
        )),
        UiEvent::NewBookmarkClicked,
        UiEvent::CreateSubmitted(NewBookmark::new(
            "https://example.com",
            "Example",
            2,
            "",
        )),
    ];
    for event in events {
        if let Err(err) = app.handle_event(event, &mut target) {
            eprintln!("  error: {}", err);
        }
    }

    section("Filter by minimum rating 3");
    if let Err(err) = app.handle_event(UiEvent::FilterSubmitted(3), &mut target) {
        eprintln!("  error: {}", err);
    }

    section("Expand and delete the first bookmark");
    let first_id = app
        .controller
        .store()
        .bookmarks()
        .first()
        .expect("create events populate the store")
        .id
        .clone();
    for event in [
        UiEvent::TitleClicked(first_id.clone()),
        UiEvent::DeleteClicked(first_id),
    ] {
        if let Err(err) = app.handle_event(event, &mut target) {
            eprintln!("  error: {}", err);
        }
    }

    section("Delete an unknown id (service rejects, state unchanged)");
    let before = app.controller.store().bookmark_count();
    if let Err(err) = app.handle_event(
        UiEvent::DeleteClicked("no-such-id".to_string()),
        &mut target,
    ) {
        eprintln!("  error: {}", err);
    }
    assert_eq!(app.controller.store().bookmark_count(), before);

    println!();
    println!(
        "Done: {} bookmark(s) in the store after {} paint(s).",
        app.controller.store().bookmark_count(),
        target.paints
    );
}
