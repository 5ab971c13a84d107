use std::time::Instant;

use log::info;

use super::App;
use crate::controller::ScreenController;
use crate::definitions::Page;
use crate::screens;

impl App {
    /// Replaces the current page with a freshly built `page`.
    ///
    /// The old controller is dropped with everything it held, which is how a
    /// browser discards a page's timers and language choice on navigation.
    pub(crate) fn load_page(&mut self, page: Page, now: Instant) {
        self.page_loads += 1;
        info!("Page load #{}: {}", self.page_loads, page.document_name());
        let document = screens::build(page, self.settings.code_length);
        self.controller =
            ScreenController::load(document, self.settings.controller_options(), now);
        self.hit_areas.clear();
    }

    /// Loads the page a handler navigated to, if any.
    pub(crate) fn follow(&mut self, navigation: Option<Page>, now: Instant) {
        if let Some(page) = navigation {
            self.load_page(page, now);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use crate::app::App;
    use crate::config::Settings;
    use crate::definitions::{Page, Trigger};
    use crate::i18n::Locale;

    #[test]
    fn navigation_resets_locale_and_state() {
        let now = Instant::now();
        let mut app = App::new(Settings::default(), now);
        let navigation = app.controller.toggle_language(now);
        app.follow(navigation, now);
        assert_eq!(app.controller.locale(), Locale::En);

        let register = app
            .controller
            .document()
            .find_by_id(Trigger::ShowRegister.element_id())
            .unwrap();
        let navigation = app.controller.click(register, now);
        app.follow(navigation, now);

        assert_eq!(app.controller.document().page(), Page::Register);
        assert_eq!(app.controller.locale(), Locale::Ja);
        assert!(app.controller.document().title.contains("パーキングアプリ"));
        assert_eq!(app.page_loads, 2);
    }

    #[test]
    fn full_flow_reaches_completion_and_back() {
        let now = Instant::now();
        let mut app = App::new(Settings::default(), now);
        for trigger in [
            Trigger::ShowRegister,
            Trigger::ShowVerification,
            Trigger::ShowSuccess,
            Trigger::ShowLogin,
        ] {
            let node = app
                .controller
                .document()
                .find_by_id(trigger.element_id())
                .unwrap();
            let navigation = app.controller.click(node, now);
            assert_eq!(navigation, Some(trigger.target()));
            app.follow(navigation, now);
        }
        assert_eq!(app.controller.document().page(), Page::Login);
        assert!(app.controller.timer().is_none());
    }
}
