// Copyright 2026 the Callpanel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Phase-transition tracking and command emission.
//!
//! [`TransitionSequencer`] remembers the phase of the last applied pass and
//! turns each new phase into an explicit [`PhaseTransition`]. Only a ringing
//! phase followed by [`Active`](PhaseKind::Active) is a staged reveal: the
//! buttons then start moving one after another, in steps given by
//! [`staged_delay_units`].
//!
//! [`emit`] converts a [`Reconciliation`] into the command list of a pass.

use alloc::vec::Vec;
use core::time::Duration;

use crate::button::ButtonKey;
use crate::call::PhaseKind;
use crate::command::{Command, EnterEffect, ExitEffect, Transition};
use crate::element::{ElementKey, ElementStore};
use crate::reconcile::{Outcome, Reconciliation};

/// A change of call phase between two passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PhaseTransition {
    /// Phase of the previous pass; `None` before the first one.
    pub from: Option<PhaseKind>,
    /// Phase of this pass.
    pub to: PhaseKind,
}

impl PhaseTransition {
    /// Returns whether this is the first pass.
    #[must_use]
    pub const fn is_initial(self) -> bool {
        self.from.is_none()
    }

    /// Returns whether the buttons should reveal with staggered delays.
    #[must_use]
    pub const fn is_staged_reveal(self) -> bool {
        matches!(
            (self.from, self.to),
            (
                Some(PhaseKind::IncomingRinging | PhaseKind::OutgoingRinging),
                PhaseKind::Active
            )
        )
    }
}

/// Tracks the applied phase across passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransitionSequencer {
    applied: Option<PhaseKind>,
}

impl TransitionSequencer {
    /// Creates a sequencer that has not applied any phase.
    #[must_use]
    pub const fn new() -> Self {
        Self { applied: None }
    }

    /// Returns the phase of the last pass.
    #[must_use]
    pub const fn applied(&self) -> Option<PhaseKind> {
        self.applied
    }

    /// Records `to` as applied and returns the transition into it.
    pub fn advance(&mut self, to: PhaseKind) -> PhaseTransition {
        let from = self.applied.replace(to);
        PhaseTransition { from, to }
    }
}

/// Position of a button in the staged reveal, in stagger units.
#[must_use]
pub const fn staged_delay_units(key: ButtonKey) -> u32 {
    match key {
        ButtonKey::Mute => 1,
        ButtonKey::SwitchCamera => 2,
        ButtonKey::AcceptOrEnd => 3,
        ButtonKey::EnableCamera
        | ButtonKey::Accept
        | ButtonKey::Decline
        | ButtonKey::SoundOutput => 0,
    }
}

/// How a pass moves its elements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Every change is applied at once; removed elements are disposed
    /// without an exit animation.
    Immediate,
    /// Changes animate; new elements play `enter`.
    Animated {
        /// Transition for frame, content and exit changes.
        transition: Transition,
        /// Enter animation for new elements.
        enter: EnterEffect,
    },
}

impl Motion {
    /// Returns the transition for frame and content updates.
    #[must_use]
    pub const fn transition(&self) -> Transition {
        match self {
            Self::Immediate => Transition::Immediate,
            Self::Animated { transition, .. } => *transition,
        }
    }

    /// Returns whether this pass animates.
    #[must_use]
    pub const fn is_animated(&self) -> bool {
        matches!(self, Self::Animated { .. })
    }
}

/// Builds the command list for a reconciled pass.
///
/// `delay_for` is consulted only in animated passes. New elements take their
/// frame immediately through `Create`; kept elements always get an
/// `UpdateFrame` and get an `UpdateContent` only when their content changed.
pub fn emit<K: ElementKey, C: Clone + PartialEq>(
    store: &ElementStore<K, C>,
    reconciliation: &Reconciliation<K>,
    motion: &Motion,
    mut delay_for: impl FnMut(K) -> Duration,
    mut exit_for: impl FnMut(K) -> ExitEffect,
) -> Vec<Command<K, C>> {
    let transition = motion.transition();
    let mut commands = Vec::with_capacity(reconciliation.placed.len() * 2);

    for placed in &reconciliation.placed {
        let id = placed.id;
        let delay = if motion.is_animated() {
            delay_for(placed.key)
        } else {
            Duration::ZERO
        };
        match placed.outcome {
            Outcome::Created => {
                commands.push(Command::Create {
                    id,
                    key: placed.key,
                    frame: store.frame(id),
                    content: store.content(id).clone(),
                });
                if let Motion::Animated { enter, .. } = *motion {
                    commands.push(Command::AnimateIn {
                        id,
                        effect: enter,
                        delay,
                    });
                }
            }
            Outcome::Kept {
                content_changed, ..
            } => {
                commands.push(Command::UpdateFrame {
                    id,
                    frame: store.frame(id),
                    transition,
                    delay,
                });
                if content_changed {
                    commands.push(Command::UpdateContent {
                        id,
                        content: store.content(id).clone(),
                        transition,
                    });
                }
            }
        }
    }

    for &(key, id) in &reconciliation.removed {
        commands.push(if motion.is_animated() {
            Command::AnimateOut {
                id,
                effect: exit_for(key),
                transition,
            }
        } else {
            Command::Dispose { id }
        });
    }

    commands
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::Rect;

    use super::*;
    use crate::command::Curve;
    use crate::reconcile::{Target, reconcile};

    #[test]
    fn first_advance_has_no_source() {
        let mut seq = TransitionSequencer::new();
        let t = seq.advance(PhaseKind::IncomingRinging);
        assert!(t.is_initial());
        assert!(!t.is_staged_reveal());
        assert_eq!(seq.applied(), Some(PhaseKind::IncomingRinging));
    }

    #[test]
    fn only_ringing_to_active_is_staged() {
        use PhaseKind::{Active, IncomingRinging, OutgoingRinging};

        let staged = |from, to| PhaseTransition { from: Some(from), to }.is_staged_reveal();
        assert!(staged(IncomingRinging, Active));
        assert!(staged(OutgoingRinging, Active));
        assert!(!staged(Active, Active));
        assert!(!staged(IncomingRinging, OutgoingRinging));
        assert!(!staged(Active, IncomingRinging));
    }

    #[test]
    fn repeated_phase_is_not_staged() {
        let mut seq = TransitionSequencer::new();
        seq.advance(PhaseKind::OutgoingRinging);
        assert!(seq.advance(PhaseKind::Active).is_staged_reveal());
        assert!(!seq.advance(PhaseKind::Active).is_staged_reveal());
    }

    #[test]
    fn delay_units_follow_reveal_order() {
        assert_eq!(staged_delay_units(ButtonKey::EnableCamera), 0);
        assert_eq!(staged_delay_units(ButtonKey::Mute), 1);
        assert_eq!(staged_delay_units(ButtonKey::SwitchCamera), 2);
        assert_eq!(staged_delay_units(ButtonKey::AcceptOrEnd), 3);
        assert_eq!(staged_delay_units(ButtonKey::SoundOutput), 0);
        assert_eq!(staged_delay_units(ButtonKey::Decline), 0);
    }

    fn animated() -> Motion {
        Motion::Animated {
            transition: Transition::Animated {
                duration: Duration::from_millis(300),
                curve: Curve::Spring,
            },
            enter: EnterEffect::Fade {
                duration: Duration::from_millis(200),
            },
        }
    }

    fn targets(keys: &[ButtonKey], content: u8) -> Vec<Target<ButtonKey, u8>> {
        keys.iter()
            .enumerate()
            .map(|(i, &key)| Target {
                key,
                frame: Rect::new(i as f64 * 10.0, 0.0, i as f64 * 10.0 + 5.0, 5.0),
                content,
            })
            .collect()
    }

    #[test]
    fn immediate_pass_disposes_and_skips_enter() {
        let mut store = ElementStore::new();
        let r = reconcile(&mut store, targets(&[ButtonKey::Mute], 0));
        let commands = emit(&store, &r, &Motion::Immediate, |_| Duration::from_secs(1), |_| {
            ExitEffect::Fade
        });
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].name(), "create");

        let r = reconcile(&mut store, vec![]);
        let commands = emit(&store, &r, &Motion::Immediate, |_| Duration::ZERO, |_| {
            ExitEffect::Fade
        });
        assert_eq!(commands, vec![Command::Dispose { id: r.removed[0].1 }]);
    }

    #[test]
    fn animated_pass_orders_commands_per_element() {
        let mut store = ElementStore::new();
        reconcile(&mut store, targets(&[ButtonKey::Mute, ButtonKey::Decline], 0));
        let r = reconcile(&mut store, targets(&[ButtonKey::Mute, ButtonKey::EnableCamera], 1));
        let commands = emit(
            &store,
            &r,
            &animated(),
            |key| Duration::from_millis(15) * staged_delay_units(key),
            |_| ExitEffect::ShrinkAndFade { to_scale: 0.1 },
        );
        let names: Vec<_> = commands.iter().map(Command::name).collect();
        assert_eq!(
            names,
            [
                "update-frame",
                "update-content",
                "create",
                "animate-in",
                "animate-out"
            ]
        );
        assert!(matches!(
            commands[0],
            Command::UpdateFrame { delay, .. } if delay == Duration::from_millis(15)
        ));
    }

    #[test]
    fn unchanged_content_is_not_resent() {
        let mut store = ElementStore::new();
        reconcile(&mut store, targets(&[ButtonKey::Mute], 0));
        let r = reconcile(&mut store, targets(&[ButtonKey::Mute], 0));
        let commands = emit(&store, &r, &animated(), |_| Duration::ZERO, |_| ExitEffect::Fade);
        assert_eq!(commands.len(), 1);
        assert!(matches!(commands[0], Command::UpdateFrame { .. }));
    }
}
