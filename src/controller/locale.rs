use log::info;

use super::ScreenController;
use super::state::Handler;
use crate::definitions::{EventType, LANGUAGE_TOGGLE_ID};
use crate::document::Tone;
use crate::i18n::{Locale, localize_title};

impl ScreenController {
    pub(super) fn setup_language_toggle(&mut self) {
        if let Some(node) = self.document.find_by_id(LANGUAGE_TOGGLE_ID) {
            self.on(node, EventType::Click, Handler::ToggleLocale);
        }
    }

    /// Flips the display language and rewrites every dual-locale element.
    pub(super) fn toggle_locale(&mut self) {
        self.locale = self.locale.toggle();
        let locale = self.locale;
        info!("Display language switched to {}", locale.code());

        self.document.lang = locale;
        self.document.title = localize_title(&self.document.title, locale);
        if let Some(node) = self.document.find_by_id(LANGUAGE_TOGGLE_ID)
            && let Some(toggle) = self.document.get_mut(node)
        {
            toggle.en_active = locale == Locale::En;
        }

        for (_, element) in self.document.iter_mut() {
            if let Some(label) = &element.label {
                element.text = label.get(locale).to_string();
            }
        }

        for indicator in [Locale::Ja, Locale::En] {
            if let Some(node) = self.document.locale_indicator(indicator)
                && let Some(element) = self.document.get_mut(node)
            {
                element.tone = Some(if indicator == locale {
                    Tone::Accent
                } else {
                    Tone::Neutral
                });
            }
        }

        // The countdown reads the current locale, so a running one re-renders at once.
        self.render_timer();
    }
}
