//! The `app` module ties the screen controller to the terminal.
//!
//! `App` holds the controller of the page currently loaded, replaces it when
//! the controller navigates, and translates terminal input into document
//! events.

/// `init`: construction of `App` and the first page load.
mod init;
/// `keyboard`: key presses routed to the focused element.
mod keyboard;
/// `mouse`: clicks resolved against the areas drawn in the last frame.
mod mouse;
/// `navigation`: whole-page loads.
mod navigation;
mod state;
/// `tick`: periodic time-driven updates.
mod tick;

pub use state::App;
