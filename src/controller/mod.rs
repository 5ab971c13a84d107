//! The screen controller owns everything a loaded page keeps in memory.
//!
//! It is created when a document is loaded, registers its handlers against
//! the elements that exist on that document, and is dropped as a whole when
//! the app navigates away. Nothing survives a page load.

/// `code_input`: one-time-code cells, focus advance and retreat.
mod code_input;
/// `effects`: cosmetic press animations that undo themselves.
mod effects;
/// `fields`: active marking and editing of text input fields.
mod fields;
/// `locale`: the two-language toggle.
mod locale;
/// `navigation`: trigger elements and their target pages.
mod navigation;
mod state;
/// `timer`: the resend countdown.
mod timer;

pub use state::{ControllerOptions, ScreenController};
