use std::time::{Duration, Instant};

use super::ScreenController;
use super::state::Handler;
use crate::definitions::EventType;
use crate::document::{Effect, ElementKind, NodeId};

/// Delay before a reset ripple starts playing again.
const RIPPLE_RESTART: Duration = Duration::from_millis(10);
const RIPPLE_LENGTH: Duration = Duration::from_secs(1);
const PRESS_LENGTH: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EffectStep {
    StartRipple,
    EndRipple,
    Release,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct ScheduledEffect {
    node: NodeId,
    step: EffectStep,
    at: Instant,
}

impl ScreenController {
    pub(super) fn setup_button_effects(&mut self) {
        for node in self
            .document
            .select(|element| element.kind == ElementKind::PrimaryButton)
        {
            self.on(node, EventType::Click, Handler::Ripple);
        }
        for node in self
            .document
            .select(|element| element.kind == ElementKind::SocialButton)
        {
            self.on(node, EventType::Click, Handler::Press);
        }
    }

    /// Stops any ripple on `node` and plays it again shortly after.
    pub(super) fn restart_ripple(&mut self, node: NodeId, now: Instant) {
        self.scheduled.retain(|effect| effect.node != node);
        self.set_effect(node, None);
        self.scheduled.push(ScheduledEffect {
            node,
            step: EffectStep::StartRipple,
            at: now + RIPPLE_RESTART,
        });
    }

    pub(super) fn press(&mut self, node: NodeId, now: Instant) {
        self.scheduled.retain(|effect| effect.node != node);
        self.set_effect(node, Some(Effect::Pressed));
        self.scheduled.push(ScheduledEffect {
            node,
            step: EffectStep::Release,
            at: now + PRESS_LENGTH,
        });
    }

    pub(super) fn run_scheduled_effects(&mut self, now: Instant) {
        // Steps can schedule follow-ups that are already due on a late tick.
        while let Some(pos) = self.scheduled.iter().position(|effect| effect.at <= now) {
            let effect = self.scheduled.remove(pos);
            match effect.step {
                EffectStep::StartRipple => {
                    self.set_effect(effect.node, Some(Effect::Ripple));
                    self.scheduled.push(ScheduledEffect {
                        node: effect.node,
                        step: EffectStep::EndRipple,
                        at: effect.at + RIPPLE_LENGTH,
                    });
                }
                EffectStep::EndRipple | EffectStep::Release => self.set_effect(effect.node, None),
            }
        }
    }

    fn set_effect(&mut self, node: NodeId, effect: Option<Effect>) {
        if let Some(element) = self.document.get_mut(node) {
            element.effect = effect;
        }
    }
}
