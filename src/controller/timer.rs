use std::time::{Duration, Instant};

use log::debug;

use super::ScreenController;
use crate::definitions::TIMER_ID;

const TICK: Duration = Duration::from_secs(1);

/// Countdown gating the resend link.
///
/// Deadline based: each call to [`ResendTimer::advance`] consumes every full
/// second that elapsed since the previous step, so a late tick never loses time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResendTimer {
    remaining: u32,
    next_step: Instant,
    running: bool,
}

impl ResendTimer {
    pub fn start(seconds: u32, now: Instant) -> Self {
        Self {
            remaining: seconds,
            next_step: now + TICK,
            running: seconds > 0,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Steps the countdown up to `now`. Returns `true` if the value changed.
    /// Once it reaches zero it stops for good.
    pub fn advance(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while self.running && now >= self.next_step {
            self.remaining = self.remaining.saturating_sub(1);
            self.next_step += TICK;
            changed = true;
            if self.remaining == 0 {
                self.running = false;
            }
        }
        changed
    }
}

impl ScreenController {
    pub(super) fn advance_timer(&mut self, now: Instant) {
        let changed = self
            .timer
            .as_mut()
            .is_some_and(|timer| timer.advance(now));
        if changed {
            self.render_timer();
        }
    }

    /// Writes the countdown into the timer element, or hides it once done.
    pub(super) fn render_timer(&mut self) {
        let Some(timer) = &self.timer else {
            return;
        };
        let (running, remaining) = (timer.is_running(), timer.remaining());
        let text = self.locale.format_seconds(remaining);
        let Some(node) = self.document.find_by_id(TIMER_ID) else {
            return;
        };
        let Some(element) = self.document.get_mut(node) else {
            return;
        };
        if running {
            element.text = text;
        } else if !element.hidden {
            debug!("Resend countdown finished");
            element.hidden = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::ResendTimer;
    use crate::controller::{ControllerOptions, ScreenController};
    use crate::definitions::{Page, TIMER_ID};
    use crate::i18n::Locale;
    use crate::screens;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn counts_down_one_per_second_and_stops_at_zero() {
        let start = Instant::now();
        let mut timer = ResendTimer::start(3, start);
        assert!(!timer.advance(start + Duration::from_millis(999)));
        assert_eq!(timer.remaining(), 3);
        assert!(timer.advance(start + SECOND));
        assert_eq!(timer.remaining(), 2);
        assert!(timer.advance(start + SECOND * 10));
        assert_eq!(timer.remaining(), 0);
        assert!(!timer.is_running());
        assert!(!timer.advance(start + SECOND * 20));
    }

    #[test]
    fn zero_seconds_never_runs() {
        let timer = ResendTimer::start(0, Instant::now());
        assert!(!timer.is_running());
    }

    #[test]
    fn countdown_renders_each_second_and_hides_at_zero() {
        let start = Instant::now();
        let doc = screens::build(Page::Verification, 6);
        let mut controller = ScreenController::load(doc, ControllerOptions::default(), start);
        let node = controller.document().find_by_id(TIMER_ID).unwrap();
        let text = |c: &ScreenController| c.document().get(node).unwrap().text.clone();
        let hidden = |c: &ScreenController| c.document().get(node).unwrap().hidden;

        assert_eq!(text(&controller), "(59秒)");
        controller.toggle_language(start);
        assert_eq!(text(&controller), "(59s)");

        for tick in 1..59u32 {
            controller.tick(start + SECOND * tick);
            assert_eq!(text(&controller), Locale::En.format_seconds(59 - tick));
            assert!(!hidden(&controller));
        }
        controller.tick(start + SECOND * 59);
        assert!(hidden(&controller));
        assert_eq!(controller.timer().unwrap().remaining(), 0);
    }

    #[test]
    fn configured_start_value_is_used() {
        let start = Instant::now();
        let doc = screens::build(Page::Verification, 4);
        let options = ControllerOptions {
            code_length: 4,
            resend_seconds: 30,
        };
        let controller = ScreenController::load(doc, options, start);
        assert_eq!(controller.timer().unwrap().remaining(), 30);
    }
}
