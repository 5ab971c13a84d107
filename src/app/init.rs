use std::time::Instant;

use log::debug;

use super::App;
use crate::config::Settings;
use crate::controller::ScreenController;
use crate::screens;

impl App {
    /// Creates the app and loads the configured start page.
    pub fn new(settings: Settings, now: Instant) -> Self {
        debug!("Initializing App, start page {:?}", settings.start_page);
        let document = screens::build(settings.start_page, settings.code_length);
        let controller = ScreenController::load(document, settings.controller_options(), now);
        let tick_rate = settings.tick_rate();
        Self {
            should_quit: false,
            controller,
            settings,
            hit_areas: Vec::new(),
            page_loads: 1,
            tick_rate,
        }
    }
}
