use crate::types::bookmark::NewBookmark;

/// A discrete user interaction, already resolved by the host's DOM binding
/// layer (event delegation, closest-element id lookup) into plain data.
///
/// Id-carrying variants hold the `data-bookmark-id` attribute read from the
/// nearest enclosing bookmark element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The "New Bookmark" button was clicked.
    NewBookmarkClicked,
    /// The creation form's cancel button was clicked.
    CancelClicked,
    /// The creation form was submitted with the given field values.
    CreateSubmitted(NewBookmark),
    /// The filter form was submitted with the selected minimum rating.
    FilterSubmitted(u8),
    /// A bookmark title was clicked, toggling its expanded state.
    TitleClicked(String),
    /// A bookmark's delete control was clicked.
    DeleteClicked(String),
}
