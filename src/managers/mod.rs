// Linkmark state managers
// Managers handle stateful operations: the bookmark collection and UI-mode flags.

pub mod bookmark_store;
