//! Renderer — derives the page markup string from a store snapshot.
//!
//! Rendering is a pure function of the (collection, threshold, adding)
//! triple: equal snapshots produce byte-identical markup. The host's DOM
//! binding layer paints the result wholesale into the render target.

use std::fmt::Write;

use crate::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait, MAX_RATING};
use crate::types::bookmark::Bookmark;

/// Escapes text for safe interpolation into HTML content and attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Builds the markup for a single bookmark element.
///
/// The enclosing element carries `data-bookmark-id`; event handlers resolve
/// interaction targets back to an id through that attribute alone. The
/// expanded variant adds the delete control, visit-site link, and
/// description; the collapsed variant shows only title and rating.
pub fn bookmark_element(bookmark: &Bookmark) -> String {
    let id = escape_html(&bookmark.id);
    let title = escape_html(&bookmark.title);
    if bookmark.expanded {
        format!(
            concat!(
                "<li class=\"js-bookmark-element\" data-bookmark-id=\"{id}\">",
                "<div class=\"row-container\">",
                "<div class=\"bookmark-title js-bookmark-title\"><h2>{title}</h2></div>",
                "<div><button class=\"bookmark-delete js-bookmark-delete\">",
                "<span class=\"button-label\">Delete</span></button></div>",
                "</div>",
                "<div class=\"row-container\" id=\"expand-{id}\">",
                "<div><button class=\"visit-site js-visit-site\">",
                "<a href=\"{url}\">Visit Site</a></button></div>",
                "<div class=\"bookmark-rating js-bookmark-rating\"><p>{rating} / 5</p></div>",
                "</div>",
                "<div class=\"description js-description\"><p>{description}</p></div>",
                "</li>"
            ),
            id = id,
            title = title,
            url = escape_html(&bookmark.url),
            rating = bookmark.rating,
            description = escape_html(&bookmark.description),
        )
    } else {
        format!(
            concat!(
                "<li class=\"js-bookmark-element\" data-bookmark-id=\"{id}\">",
                "<div class=\"row-container\">",
                "<div class=\"bookmark-title js-bookmark-title\"><h2>{title}</h2></div>",
                "<div class=\"bookmark-rating js-bookmark-rating\"><p>{rating} / 5</p></div>",
                "</div>",
                "</li>"
            ),
            id = id,
            title = title,
            rating = bookmark.rating,
        )
    }
}

/// Builds the filter form, marking the current threshold's option selected.
fn filter_form(threshold: u8) -> String {
    let mut form = String::from(
        "<form class=\"js-filter-by\"><select id=\"min-rating\" name=\"min-rating\">",
    );
    for value in 0..=MAX_RATING {
        let selected = if value == threshold { " selected" } else { "" };
        let label = match value {
            0 => "Filter By:".to_string(),
            1 => "1 star".to_string(),
            n => format!("{} stars", n),
        };
        let _ = write!(
            form,
            "<option value=\"{}\"{}>{}</option>",
            value, selected, label
        );
    }
    form.push_str("</select><input type=\"submit\"></form>");
    form
}

/// Concatenated element markup for the bookmarks surviving the filter,
/// in collection order.
fn bookmark_list(store: &BookmarkStore) -> String {
    store
        .filter_bookmarks(store.bookmarks())
        .into_iter()
        .map(bookmark_element)
        .collect()
}

/// The list view: new-bookmark button, filter form, and the bookmark list
/// embedded in the page shell.
fn list_view(store: &BookmarkStore) -> String {
    format!(
        concat!(
            "<div class=\"container\">",
            "<div class=\"row-container\">",
            "<button class=\"new-bookmark js-new-bookmark\">",
            "<span class=\"button-label\">New Bookmark</span></button>",
            "{filter}",
            "</div>",
            "<ul class=\"bookmark-list js-bookmark-list\">{list}</ul>",
            "</div>"
        ),
        filter = filter_form(store.filter_threshold()),
        list = bookmark_list(store),
    )
}

/// The bookmark-creation form view, shown instead of the list while the
/// store is in adding mode.
pub fn add_bookmark_view() -> String {
    let mut view = String::from(
        concat!(
            "<form class=\"container js-add-bookmark\">",
            "<label for=\"bookmark-url\">Add New Bookmark:</label>",
            "<input type=\"text\" id=\"bookmark-url\" name=\"bookmark-url\" placeholder=\"url\" required />",
            "<input type=\"text\" id=\"bookmark-title\" name=\"bookmark-title\" placeholder=\"title\" required />",
            "<select id=\"bookmark-rating\" name=\"bookmark-rating\" required>"
        ),
    );
    for value in 1..=MAX_RATING {
        let label = if value == 1 {
            "1 star".to_string()
        } else {
            format!("{} stars", value)
        };
        let _ = write!(view, "<option value=\"{}\">{}</option>", value, label);
    }
    view.push_str(concat!(
        "</select>",
        "<textarea id=\"bookmark-desc\" name=\"bookmark-desc\" ",
        "placeholder=\"add description (optional)\"></textarea>",
        "</form>",
        "<div class=\"row\">",
        "<button class=\"cancel js-cancel\"><span class=\"button-label\">Cancel</span></button>",
        "<button class=\"create js-create\">Create</button>",
        "</div>"
    ));
    view
}

/// Derives the full page markup from the store's current snapshot.
///
/// Adding mode produces the creation form only; otherwise the filtered
/// list view is produced. No other state participates.
pub fn render(store: &BookmarkStore) -> String {
    if store.adding() {
        add_bookmark_view()
    } else {
        list_view(store)
    }
}
