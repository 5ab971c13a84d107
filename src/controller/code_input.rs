use std::time::Instant;

use log::debug;

use super::ScreenController;
use super::state::Handler;
use super::timer::ResendTimer;
use crate::definitions::{EventType, TIMER_ID};
use crate::document::{ElementKind, NodeId};

impl ScreenController {
    /// Wires the one-time-code cells and starts the resend countdown.
    /// Pages without code cells get neither.
    pub(super) fn setup_code_inputs(&mut self, now: Instant) {
        let cells = self
            .document
            .select(|element| matches!(element.kind, ElementKind::CodeCell { .. }));
        if cells.is_empty() {
            return;
        }
        for node in cells {
            self.on(node, EventType::Input, Handler::AdvanceCode);
            self.on(node, EventType::KeyDown, Handler::RetreatCode);
            self.on(node, EventType::Focus, Handler::MarkCodeActive);
        }
        self.start_resend_timer(now);
    }

    fn start_resend_timer(&mut self, now: Instant) {
        if self.document.find_by_id(TIMER_ID).is_none() {
            return;
        }
        self.timer = Some(ResendTimer::start(self.options.resend_seconds, now));
        self.render_timer();
    }

    fn cell_index(&self, node: NodeId) -> Option<u8> {
        self.document.get(node).and_then(|element| element.code_index())
    }

    /// A cell holding exactly one character hands focus to the next cell.
    pub(super) fn advance_code(&mut self, target: NodeId, now: Instant) {
        let Some(element) = self.document.get(target) else {
            return;
        };
        let Some(index) = element.code_index() else {
            return;
        };
        if element.value.chars().count() != 1 || index >= self.options.code_length {
            return;
        }
        let Some(next) = self.document.code_cell(index + 1) else {
            return;
        };
        self.focus(next, now);
        self.mark_code_active(next);
    }

    /// Backspace in an empty cell clears the previous cell and moves there.
    pub(super) fn retreat_code(&mut self, target: NodeId, now: Instant) {
        let Some(element) = self.document.get(target) else {
            return;
        };
        let Some(index) = element.code_index() else {
            return;
        };
        if !element.value.is_empty() || index <= 1 {
            return;
        }
        let Some(previous) = self.document.code_cell(index - 1) else {
            return;
        };
        self.focus(previous, now);
        if let Some(cell) = self.document.get_mut(previous) {
            cell.value.clear();
        }
        self.mark_code_active(previous);
    }

    /// Marks `target` as the only active cell.
    pub(super) fn mark_code_active(&mut self, target: NodeId) {
        let Some(index) = self.cell_index(target) else {
            return;
        };
        for (node, element) in self.document.iter_mut() {
            if matches!(element.kind, ElementKind::CodeCell { .. }) {
                element.active = node == target;
            }
        }
        if self.active_cell != Some(index) {
            debug!("Code cell {} active", index);
        }
        self.active_cell = Some(index);
    }

    /// The code entered so far, one entry per cell.
    pub fn code_values(&self) -> Vec<&str> {
        let mut cells: Vec<_> = self
            .document
            .iter()
            .filter_map(|(_, element)| {
                element
                    .code_index()
                    .map(|index| (index, element.value.as_str()))
            })
            .collect();
        cells.sort_by_key(|(index, _)| *index);
        cells.into_iter().map(|(_, value)| value).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use crate::controller::state::DomEvent;
    use crate::controller::{ControllerOptions, ScreenController};
    use crate::definitions::{Key, Page};
    use crate::document::NodeId;
    use crate::screens;

    const N: u8 = 6;

    fn verification() -> (ScreenController, Instant) {
        let _ = env_logger::builder().is_test(true).try_init();
        let now = Instant::now();
        let doc = screens::build(Page::Verification, N);
        (ScreenController::load(doc, ControllerOptions::default(), now), now)
    }

    fn cell(controller: &ScreenController, index: u8) -> NodeId {
        controller.document().code_cell(index).unwrap()
    }

    fn active_cells(controller: &ScreenController) -> Vec<u8> {
        controller
            .document()
            .iter()
            .filter(|(_, element)| element.active)
            .filter_map(|(_, element)| element.code_index())
            .collect()
    }

    #[test]
    fn first_cell_is_focused_on_load() {
        let (controller, _) = verification();
        assert_eq!(controller.focused(), Some(cell(&controller, 1)));
        assert_eq!(controller.active_cell(), Some(1));
        assert_eq!(active_cells(&controller), vec![1]);
    }

    #[test]
    fn typing_a_character_advances_to_the_next_cell() {
        for k in 1..N {
            let (mut controller, now) = verification();
            controller.focus(cell(&controller, k), now);
            controller.type_text("7", now);
            assert_eq!(controller.focused(), Some(cell(&controller, k + 1)));
            assert_eq!(controller.active_cell(), Some(k + 1));
            assert_eq!(active_cells(&controller), vec![k + 1]);
        }
    }

    #[test]
    fn typing_in_the_last_cell_keeps_focus() {
        let (mut controller, now) = verification();
        controller.focus(cell(&controller, N), now);
        controller.type_text("9", now);
        assert_eq!(controller.focused(), Some(cell(&controller, N)));
        assert_eq!(active_cells(&controller), vec![N]);
    }

    #[test]
    fn full_code_fills_cells_in_order() {
        let (mut controller, now) = verification();
        for digit in ["4", "8", "1", "5", "1", "6"] {
            controller.type_text(digit, now);
        }
        assert_eq!(controller.code_values(), vec!["4", "8", "1", "5", "1", "6"]);
        assert_eq!(controller.active_cell(), Some(N));
    }

    #[test]
    fn backspace_in_empty_cell_retreats_and_clears() {
        for k in 2..=N {
            let (mut controller, now) = verification();
            let previous = cell(&controller, k - 1);
            controller.focus(previous, now);
            controller.type_text("3", now);
            assert_eq!(controller.focused(), Some(cell(&controller, k)));

            controller.backspace(now);
            assert_eq!(controller.focused(), Some(previous));
            assert!(controller.document().get(previous).unwrap().value.is_empty());
            assert_eq!(active_cells(&controller), vec![k - 1]);
        }
    }

    #[test]
    fn backspace_in_first_empty_cell_stays() {
        let (mut controller, now) = verification();
        controller.backspace(now);
        assert_eq!(controller.focused(), Some(cell(&controller, 1)));
        assert_eq!(active_cells(&controller), vec![1]);
    }

    #[test]
    fn backspace_in_filled_cell_only_deletes() {
        let (mut controller, now) = verification();
        let last = cell(&controller, N);
        controller.focus(last, now);
        controller.type_text("2", now);
        controller.backspace(now);
        assert_eq!(controller.focused(), Some(last));
        assert!(controller.document().get(last).unwrap().value.is_empty());
    }

    #[test]
    fn other_keys_in_an_empty_cell_do_not_retreat() {
        let (mut controller, now) = verification();
        let third = cell(&controller, 3);
        controller.focus(third, now);
        assert_eq!(controller.dispatch(DomEvent::KeyDown(third, Key::Other), now), None);
        assert_eq!(controller.focused(), Some(third));

        controller.type_key('5', now);
        assert_eq!(controller.focused(), Some(cell(&controller, 4)));
        assert_eq!(controller.code_values()[..3], ["", "", "5"]);
    }

    #[test]
    fn pasted_code_is_accepted_without_advancing() {
        let (mut controller, now) = verification();
        controller.type_text("123456", now);
        assert_eq!(controller.focused(), Some(cell(&controller, 1)));
        assert_eq!(controller.code_values()[0], "123456");
    }

    #[test]
    fn focusing_a_cell_directly_marks_only_it() {
        let (mut controller, now) = verification();
        controller.click(cell(&controller, 4), now);
        assert_eq!(active_cells(&controller), vec![4]);
        controller.focus(cell(&controller, 2), now);
        assert_eq!(active_cells(&controller), vec![2]);
    }

    #[test]
    fn pages_without_cells_have_no_countdown() {
        let now = Instant::now();
        let doc = screens::build(Page::Register, N);
        let controller = ScreenController::load(doc, ControllerOptions::default(), now);
        assert!(controller.timer().is_none());
        assert_eq!(controller.active_cell(), None);
    }
}
