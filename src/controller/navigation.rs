use log::{debug, info};

use super::ScreenController;
use super::state::Handler;
use crate::definitions::{EventType, Page, Trigger};

impl ScreenController {
    /// Registers a click listener on every trigger present on this page.
    /// Triggers the page does not contain are skipped.
    pub(super) fn setup_navigation(&mut self) {
        for trigger in Trigger::ALL {
            if let Some(node) = self.document.find_by_id(trigger.element_id()) {
                self.on(node, EventType::Click, Handler::Navigate(trigger));
            }
        }
    }

    pub(super) fn navigate(&self, trigger: Trigger) -> Page {
        let target = trigger.target();
        let cells = self.code_values();
        if !cells.is_empty() {
            let filled = cells.iter().filter(|value| !value.is_empty()).count();
            debug!("Leaving with {}/{} code cells filled", filled, cells.len());
        }
        info!(
            "{} -> {} via #{}",
            self.document.page().document_name(),
            target.document_name(),
            trigger.element_id()
        );
        target
    }
}
