use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::App;

impl App {
    /// The main entry point for handling keyboard events.
    ///
    /// Global shortcuts win; everything else goes to the focused element.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.handle_global_shortcuts(key, now) {
            return;
        }

        let navigation = match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.controller.focus_next(now);
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.controller.focus_previous(now);
                None
            }
            KeyCode::Enter => self.controller.activate(now),
            KeyCode::Backspace => {
                self.controller.backspace(now);
                None
            }
            KeyCode::Char(' ') if !self.focused_accepts_text() => self.controller.activate(now),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.controller.type_key(ch, now);
                None
            }
            _ => None,
        };
        self.follow(navigation, now);
    }

    /// Handles global keyboard shortcuts.
    /// Returns `true` if a shortcut was handled, `false` otherwise.
    fn handle_global_shortcuts(&mut self, key: KeyEvent, now: Instant) -> bool {
        match (key.code, key.modifiers) {
            // Ctrl+Q: Quit
            (KeyCode::Char('q'), m) if m.contains(KeyModifiers::CONTROL) => self.quit(),
            // Ctrl+L: Switch language
            (KeyCode::Char('l'), m) if m.contains(KeyModifiers::CONTROL) => {
                let navigation = self.controller.toggle_language(now);
                self.follow(navigation, now);
            }
            (KeyCode::Esc, _) => self.quit(),
            _ => return false,
        }
        true
    }

    fn focused_accepts_text(&self) -> bool {
        self.controller
            .focused()
            .and_then(|node| self.controller.document().get(node))
            .is_some_and(|element| element.kind.accepts_text())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::config::Settings;
    use crate::definitions::Page;
    use crate::event::Event;
    use crate::i18n::Locale;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app(page: Page) -> (App, Instant) {
        let now = Instant::now();
        let settings = Settings {
            start_page: page,
            ..Settings::default()
        };
        (App::new(settings, now), now)
    }

    #[test]
    fn ctrl_shortcuts_toggle_language_and_quit() {
        let (mut app, now) = app(Page::Login);
        app.handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL), now);
        assert_eq!(app.controller.locale(), Locale::En);
        assert!(!app.should_quit);
        app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL), now);
        assert!(app.should_quit);
    }

    #[test]
    fn digits_walk_through_the_code_cells() {
        let (mut app, now) = app(Page::Verification);
        for ch in ['1', '2', '3'] {
            app.handle_key(key(KeyCode::Char(ch)), now);
        }
        assert_eq!(app.controller.active_cell(), Some(4));
        app.handle_key(key(KeyCode::Backspace), now);
        assert_eq!(app.controller.active_cell(), Some(3));
        assert_eq!(app.controller.code_values()[..4], ["1", "2", "", ""]);
    }

    #[test]
    fn enter_on_a_trigger_loads_its_page() {
        let (mut app, now) = app(Page::Success);
        // Success page: language toggle, then the log-in button.
        app.handle_key(key(KeyCode::Tab), now);
        app.handle_key(key(KeyCode::Tab), now);
        app.handle_key(key(KeyCode::Enter), now);
        assert_eq!(app.controller.document().page(), Page::Login);
    }

    #[test]
    fn space_types_into_fields_but_clicks_buttons() {
        let (mut app, now) = app(Page::Login);
        app.handle_key(key(KeyCode::Char('a')), now);
        app.handle_key(key(KeyCode::Char(' ')), now);
        let focused = app.controller.focused().unwrap();
        assert_eq!(app.controller.document().get(focused).unwrap().value, "a ");

        app.handle_key(key(KeyCode::BackTab), now);
        app.handle_key(key(KeyCode::Char(' ')), now);
        assert_eq!(app.controller.locale(), Locale::En);
    }

    #[test]
    fn paste_lands_whole_in_the_focused_cell() {
        let (mut app, now) = app(Page::Verification);
        let first = app.controller.focused().unwrap();
        app.handle_event(Event::Paste("123456".to_string()), now);
        assert_eq!(app.controller.focused(), Some(first));
        assert_eq!(app.controller.active_cell(), Some(1));
        assert_eq!(app.controller.code_values()[..2], ["123456", ""]);
    }
}
