use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::App;
use crate::document::NodeId;

impl App {
    /// Handles mouse input. Only left clicks do anything.
    pub fn handle_mouse(&mut self, event: MouseEvent, now: Instant) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(node) = self.node_at(event.column, event.row) else {
            return;
        };
        let navigation = self.controller.click(node, now);
        self.follow(navigation, now);
    }

    /// The element drawn at a terminal cell in the last frame.
    fn node_at(&self, column: u16, row: u16) -> Option<NodeId> {
        let point = Rect {
            x: column,
            y: row,
            width: 1,
            height: 1,
        };
        self.hit_areas
            .iter()
            .rev()
            .find(|(area, _)| area.intersects(point))
            .map(|(_, node)| *node)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::layout::Rect;

    use crate::app::App;
    use crate::config::Settings;
    use crate::definitions::{Page, Trigger};

    fn click_at(column: u16, row: u16, kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn left_click_on_registered_area_clicks_the_element() {
        let now = Instant::now();
        let mut app = App::new(Settings::default(), now);
        let register = app
            .controller
            .document()
            .find_by_id(Trigger::ShowRegister.element_id())
            .unwrap();
        app.hit_areas.push((Rect::new(10, 5, 12, 1), register));

        app.handle_mouse(click_at(3, 5, MouseEventKind::Down(MouseButton::Left)), now);
        assert_eq!(app.controller.document().page(), Page::Login);
        app.handle_mouse(click_at(12, 5, MouseEventKind::Down(MouseButton::Right)), now);
        assert_eq!(app.controller.document().page(), Page::Login);
        app.handle_mouse(click_at(12, 5, MouseEventKind::Down(MouseButton::Left)), now);
        assert_eq!(app.controller.document().page(), Page::Register);
        assert!(app.hit_areas.is_empty());
    }
}
