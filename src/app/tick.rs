use std::time::Instant;

use super::App;

impl App {
    /// Called on every tick of the event loop to drive the countdown and
    /// the button effects of the current page.
    pub(crate) fn on_tick(&mut self, now: Instant) {
        self.controller.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crate::app::App;
    use crate::config::Settings;
    use crate::definitions::{Page, TIMER_ID};
    use crate::event::Event;

    #[test]
    fn ticks_drive_the_countdown() {
        let start = Instant::now();
        let settings = Settings {
            start_page: Page::Verification,
            resend_seconds: 2,
            ..Settings::default()
        };
        let mut app = App::new(settings, start);
        let timer = app.controller.document().find_by_id(TIMER_ID).unwrap();

        app.handle_event(Event::Tick, start + Duration::from_secs(1));
        assert_eq!(app.controller.document().get(timer).unwrap().text, "(1秒)");
        app.handle_event(Event::Tick, start + Duration::from_secs(2));
        assert!(app.controller.document().get(timer).unwrap().hidden);
    }
}
