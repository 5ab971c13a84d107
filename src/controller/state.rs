//! Defines the controller struct, its handler registry and event dispatch.

use std::collections::HashMap;
use std::time::Instant;

use log::debug;

use super::effects::ScheduledEffect;
use super::timer::ResendTimer;
use crate::definitions::{
    DEFAULT_CODE_LENGTH, DEFAULT_RESEND_SECONDS, EventType, Key, LANGUAGE_TOGGLE_ID, Page,
    Trigger,
};
use crate::document::{Document, NodeId};
use crate::i18n::Locale;

/// Per-page constants the controller is loaded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    pub code_length: u8,
    pub resend_seconds: u32,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            resend_seconds: DEFAULT_RESEND_SECONDS,
        }
    }
}

/// An event delivered to one element of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomEvent {
    Click(NodeId),
    Input(NodeId),
    KeyDown(NodeId, Key),
    Focus(NodeId),
}

impl DomEvent {
    pub fn target(self) -> NodeId {
        match self {
            Self::Click(node) | Self::Input(node) | Self::KeyDown(node, _) | Self::Focus(node) => {
                node
            }
        }
    }

    pub fn event_type(self) -> EventType {
        match self {
            Self::Click(_) => EventType::Click,
            Self::Input(_) => EventType::Input,
            Self::KeyDown(..) => EventType::KeyDown,
            Self::Focus(_) => EventType::Focus,
        }
    }
}

/// Work a registered listener performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Handler {
    ToggleLocale,
    Navigate(Trigger),
    Ripple,
    Press,
    ActivateField,
    AdvanceCode,
    RetreatCode,
    MarkCodeActive,
}

/// State of one loaded page.
///
/// Every field lives exactly as long as the page does: navigating builds a
/// new document and a new controller, so the locale, the countdown and the
/// active cell all start over.
pub struct ScreenController {
    pub(super) document: Document,
    pub(super) locale: Locale,
    pub(super) options: ControllerOptions,
    handlers: HashMap<(NodeId, EventType), Vec<Handler>>,
    pub(super) focused: Option<NodeId>,
    /// Index (1..=N) of the code cell currently marked active.
    pub(super) active_cell: Option<u8>,
    pub(super) timer: Option<ResendTimer>,
    pub(super) scheduled: Vec<ScheduledEffect>,
}

impl ScreenController {
    /// Wires up a freshly loaded document.
    pub fn load(document: Document, options: ControllerOptions, now: Instant) -> Self {
        debug!("Loading {}", document.page().document_name());
        let mut controller = Self {
            document,
            locale: Locale::Ja,
            options,
            handlers: HashMap::new(),
            focused: None,
            active_cell: None,
            timer: None,
            scheduled: Vec::new(),
        };

        controller.setup_language_toggle();
        controller.setup_button_effects();
        controller.setup_input_fields();
        controller.setup_navigation();
        controller.setup_code_inputs(now);

        let autofocus = controller.document.select(|element| element.autofocus);
        if let Some(node) = autofocus.first().copied() {
            controller.focus(node, now);
        }
        controller
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    #[cfg(test)]
    pub fn active_cell(&self) -> Option<u8> {
        self.active_cell
    }

    #[cfg(test)]
    pub fn timer(&self) -> Option<&ResendTimer> {
        self.timer.as_ref()
    }

    pub(super) fn on(&mut self, node: NodeId, event_type: EventType, handler: Handler) {
        self.handlers
            .entry((node, event_type))
            .or_default()
            .push(handler);
    }

    /// Runs the listeners registered for the event's target in registration
    /// order. Returns the page to load if one of them navigated; later
    /// listeners are skipped in that case.
    pub fn dispatch(&mut self, event: DomEvent, now: Instant) -> Option<Page> {
        let Some(handlers) = self
            .handlers
            .get(&(event.target(), event.event_type()))
            .cloned()
        else {
            return None;
        };
        for handler in handlers {
            if let Some(page) = self.run(handler, event, now) {
                return Some(page);
            }
        }
        None
    }

    fn run(&mut self, handler: Handler, event: DomEvent, now: Instant) -> Option<Page> {
        let target = event.target();
        match handler {
            Handler::Navigate(trigger) => return Some(self.navigate(trigger)),
            Handler::ToggleLocale => self.toggle_locale(),
            Handler::Ripple => self.restart_ripple(target, now),
            Handler::Press => self.press(target, now),
            Handler::ActivateField => self.activate_field(target),
            Handler::AdvanceCode => self.advance_code(target, now),
            Handler::RetreatCode => {
                if let DomEvent::KeyDown(_, Key::Backspace) = event {
                    self.retreat_code(target, now);
                }
            }
            Handler::MarkCodeActive => self.mark_code_active(target),
        }
        None
    }

    /// Moves keyboard focus to `node` and fires its focus listeners.
    pub fn focus(&mut self, node: NodeId, now: Instant) {
        let focusable = self
            .document
            .get(node)
            .is_some_and(|element| element.kind.is_focusable() && !element.hidden);
        if !focusable {
            return;
        }
        self.focused = Some(node);
        // Focus listeners only mark elements active, they never navigate.
        let _ = self.dispatch(DomEvent::Focus(node), now);
    }

    pub fn focus_next(&mut self, now: Instant) {
        self.cycle_focus(1, now);
    }

    pub fn focus_previous(&mut self, now: Instant) {
        self.cycle_focus(-1, now);
    }

    fn cycle_focus(&mut self, step: isize, now: Instant) {
        let order = self.document.focusable();
        if order.is_empty() {
            return;
        }
        let len = order.len() as isize;
        let next = match self.focused.and_then(|node| order.iter().position(|n| *n == node)) {
            Some(pos) => (pos as isize + step).rem_euclid(len),
            None if step > 0 => 0,
            None => len - 1,
        };
        self.focus(order[next as usize], now);
    }

    /// A pointer click: focuses the element when it can take focus, then
    /// fires its click listeners.
    pub fn click(&mut self, node: NodeId, now: Instant) -> Option<Page> {
        if self.focused != Some(node) {
            self.focus(node, now);
        }
        self.dispatch(DomEvent::Click(node), now)
    }

    /// Enter/Space on the focused element.
    pub fn activate(&mut self, now: Instant) -> Option<Page> {
        let node = self.focused?;
        let clickable = self
            .document
            .get(node)
            .is_some_and(|element| element.kind.is_clickable());
        if clickable {
            self.dispatch(DomEvent::Click(node), now)
        } else {
            None
        }
    }

    /// The global language shortcut, equivalent to clicking the toggle.
    pub fn toggle_language(&mut self, now: Instant) -> Option<Page> {
        let node = self.document.find_by_id(LANGUAGE_TOGGLE_ID)?;
        self.dispatch(DomEvent::Click(node), now)
    }

    /// Appends typed or pasted text to the focused field and fires `input`.
    /// Nothing is validated: a paste lands in a single cell unchanged.
    pub fn type_text(&mut self, text: &str, now: Instant) {
        let Some(node) = self.focused else {
            return;
        };
        let Some(element) = self.document.get_mut(node) else {
            return;
        };
        if !element.kind.accepts_text() || text.is_empty() {
            return;
        }
        element.value.push_str(text);
        let _ = self.dispatch(DomEvent::Input(node), now);
    }

    /// A printable key: fires `keydown`, then types the character.
    pub fn type_key(&mut self, ch: char, now: Instant) {
        if let Some(node) = self.focused {
            let _ = self.dispatch(DomEvent::KeyDown(node, Key::Other), now);
        }
        let mut buf = [0u8; 4];
        self.type_text(ch.encode_utf8(&mut buf), now);
    }

    /// Fires `keydown` for Backspace, then deletes the last character of the
    /// element the key was pressed in.
    pub fn backspace(&mut self, now: Instant) {
        let Some(node) = self.focused else {
            return;
        };
        let _ = self.dispatch(DomEvent::KeyDown(node, Key::Backspace), now);
        let Some(element) = self.document.get_mut(node) else {
            return;
        };
        if element.kind.accepts_text() && element.value.pop().is_some() {
            let _ = self.dispatch(DomEvent::Input(node), now);
        }
    }

    /// Advances time-driven state: the countdown and pending effects.
    pub fn tick(&mut self, now: Instant) {
        self.advance_timer(now);
        self.run_scheduled_effects(now);
    }
}
