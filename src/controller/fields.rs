use super::ScreenController;
use super::state::Handler;
use crate::definitions::EventType;
use crate::document::{ElementKind, NodeId};

fn is_input_field(kind: ElementKind) -> bool {
    matches!(kind, ElementKind::InputField { .. })
}

impl ScreenController {
    pub(super) fn setup_input_fields(&mut self) {
        for node in self.document.select(|element| is_input_field(element.kind)) {
            self.on(node, EventType::Click, Handler::ActivateField);
            self.on(node, EventType::Focus, Handler::ActivateField);
        }
    }

    /// Marks `target` as the only active input field.
    pub(super) fn activate_field(&mut self, target: NodeId) {
        for (node, element) in self.document.iter_mut() {
            if is_input_field(element.kind) {
                element.active = node == target;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use crate::controller::{ControllerOptions, ScreenController};
    use crate::definitions::Page;
    use crate::document::{ElementKind, NodeId};
    use crate::screens;

    fn fields(controller: &ScreenController) -> Vec<NodeId> {
        controller
            .document()
            .select(|element| matches!(element.kind, ElementKind::InputField { .. }))
    }

    fn active(controller: &ScreenController) -> Vec<NodeId> {
        controller
            .document()
            .select(|element| element.active)
    }

    #[test]
    fn clicked_field_becomes_the_only_active_one() {
        let now = Instant::now();
        let doc = screens::build(Page::Register, 6);
        let mut controller = ScreenController::load(doc, ControllerOptions::default(), now);
        let fields = fields(&controller);
        assert_eq!(active(&controller), vec![fields[0]]);

        controller.click(fields[2], now);
        assert_eq!(active(&controller), vec![fields[2]]);
        controller.focus_next(now);
        assert_eq!(active(&controller), vec![fields[3]]);
    }

    #[test]
    fn typed_text_lands_in_the_focused_field() {
        let now = Instant::now();
        let doc = screens::build(Page::Login, 6);
        let mut controller = ScreenController::load(doc, ControllerOptions::default(), now);
        let email = fields(&controller)[0];
        controller.type_text("hanako@", now);
        controller.type_text("parking.jp", now);
        controller.backspace(now);
        assert_eq!(controller.document().get(email).unwrap().value, "hanako@parking.j");
    }
}
