//! Defines the `App` struct.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::config::Settings;
use crate::controller::ScreenController;
use crate::document::NodeId;
use crate::event::Event;

/// The main application state.
pub struct App {
    /// Flag to indicate if the application should quit.
    pub should_quit: bool,
    /// Controller of the page currently shown.
    pub controller: ScreenController,
    pub settings: Settings,
    /// Clickable areas registered while drawing the last frame.
    pub hit_areas: Vec<(Rect, NodeId)>,
    /// Number of page loads since startup.
    pub page_loads: usize,
    /// Interval between ticks of the event loop.
    pub tick_rate: Duration,
}

impl App {
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            Event::Tick => self.on_tick(now),
            Event::Key(key) => self.handle_key(key, now),
            Event::Mouse(mouse) => self.handle_mouse(mouse, now),
            Event::Paste(text) => self.controller.type_text(&text, now),
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
