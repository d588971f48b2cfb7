// Copyright 2026 the Callpanel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The call button panel.

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{Point, Rect};

use super::{PanelUpdate, finish_exit, trace_elements};
use crate::action::{CallAction, CallActions};
use crate::button::{ButtonKey, ButtonLabels, ButtonPresentation, classify_buttons, present};
use crate::call::CallPhase;
use crate::command::{Command, EnterEffect, ExitEffect};
use crate::config::{AnimationConfig, ButtonMetrics};
use crate::element::{ElementId, ElementStore};
use crate::layout::layout_buttons;
use crate::reconcile::{Target, reconcile};
use crate::sequence::{Motion, TransitionSequencer, emit, staged_delay_units};
use crate::trace::{PanelKind, PassBeginEvent, PassSummary, PhaseTransitionEvent, Tracer};

/// Inputs of the last pass, kept for [`ButtonPanel::refresh`].
#[derive(Clone, Copy, Debug)]
struct Applied {
    phase: CallPhase,
    width: f64,
    bottom_inset: f64,
}

/// Owns the materialized call buttons and keeps them in sync with the call
/// state.
#[derive(Debug)]
pub struct ButtonPanel {
    store: ElementStore<ButtonKey, ButtonPresentation>,
    sequencer: TransitionSequencer,
    labels: ButtonLabels,
    animation: AnimationConfig,
    is_muted: bool,
    applied: Option<Applied>,
    pass_index: u64,
}

impl ButtonPanel {
    /// Creates an empty panel.
    #[must_use]
    pub fn new(labels: ButtonLabels) -> Self {
        Self {
            store: ElementStore::new(),
            sequencer: TransitionSequencer::new(),
            labels,
            animation: AnimationConfig::default(),
            is_muted: false,
            applied: None,
            pass_index: 0,
        }
    }

    /// Replaces the animation parameters.
    #[must_use]
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    /// Returns the locally tracked mute state.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.is_muted
    }

    /// Sets the mute state used by the next pass.
    pub fn set_muted(&mut self, is_muted: bool) {
        self.is_muted = is_muted;
    }

    /// Returns the element store.
    #[must_use]
    pub fn store(&self) -> &ElementStore<ButtonKey, ButtonPresentation> {
        &self.store
    }

    /// Runs a layout pass for `phase`.
    ///
    /// The first pass is always applied without animation.
    pub fn update_layout(
        &mut self,
        phase: &CallPhase,
        width: f64,
        bottom_inset: f64,
        animated: bool,
        tracer: &mut Tracer<'_>,
    ) -> PanelUpdate<ButtonKey, ButtonPresentation> {
        self.pass_index += 1;
        let pass_index = self.pass_index;
        tracer.pass_begin(&PassBeginEvent {
            panel: PanelKind::Buttons,
            pass_index,
            width,
            animated,
        });

        let transition = self.sequencer.advance(phase.kind());
        let staged = transition.is_staged_reveal();
        tracer.phase_transition(&PhaseTransitionEvent {
            pass_index,
            from: transition.from,
            to: transition.to,
            staged,
        });
        self.applied = Some(Applied {
            phase: *phase,
            width,
            bottom_inset,
        });

        let motion = if animated && !transition.is_initial() {
            Motion::Animated {
                transition: self.animation.transition(true),
                enter: EnterEffect::Fade {
                    duration: self.animation.fade_in,
                },
            }
        } else {
            Motion::Immediate
        };

        let rows = classify_buttons(phase, self.is_muted);
        let layout = layout_buttons(&rows, width, bottom_inset, &ButtonMetrics::for_width(width));
        let targets = layout
            .placed
            .iter()
            .map(|placed| Target {
                key: placed.descriptor.key(),
                frame: placed.frame,
                content: present(&placed.descriptor, &self.labels),
            })
            .collect();
        let reconciliation = reconcile(&mut self.store, targets);

        let animation = self.animation;
        let delay_for = |key: ButtonKey| {
            if staged && motion.is_animated() {
                animation.stagger_unit * staged_delay_units(key)
            } else {
                Duration::ZERO
            }
        };
        let exit_for = |key: ButtonKey| {
            if key == ButtonKey::Decline {
                ExitEffect::ShrinkAndFade {
                    to_scale: animation.exit_scale,
                }
            } else {
                ExitEffect::Fade
            }
        };

        let commands = emit(&self.store, &reconciliation, &motion, delay_for, exit_for);
        trace_elements(
            tracer,
            PanelKind::Buttons,
            pass_index,
            &self.store,
            &reconciliation,
            delay_for,
        );
        if !motion.is_animated() {
            for &(_, id) in &reconciliation.removed {
                finish_exit(&mut self.store, id, PanelKind::Buttons, pass_index, tracer);
            }
        }

        tracer.pass_summary(&PassSummary {
            panel: PanelKind::Buttons,
            pass_index,
            created: reconciliation.created_len(),
            kept: reconciliation.kept_len(),
            removed: reconciliation.removed.len(),
            commands: commands.len(),
            height: layout.height,
        });

        PanelUpdate {
            height: layout.height,
            commands,
        }
    }

    /// Re-runs the last pass, picking up a changed mute state.
    ///
    /// Returns `None` before the first pass.
    pub fn refresh(
        &mut self,
        animated: bool,
        tracer: &mut Tracer<'_>,
    ) -> Option<PanelUpdate<ButtonKey, ButtonPresentation>> {
        let Applied {
            phase,
            width,
            bottom_inset,
        } = self.applied?;
        Some(self.update_layout(&phase, width, bottom_inset, animated, tracer))
    }

    /// Disposes an element whose exit animation finished.
    ///
    /// Returns the `Dispose` command, or `None` for stale, live, or already
    /// disposed elements.
    pub fn finish_exit(
        &mut self,
        id: ElementId,
        tracer: &mut Tracer<'_>,
    ) -> Option<Command<ButtonKey, ButtonPresentation>> {
        finish_exit(
            &mut self.store,
            id,
            PanelKind::Buttons,
            self.pass_index,
            tracer,
        )
    }

    /// Routes a press on `id` to `actions`.
    ///
    /// Presses on exiting, disabled, or unknown elements are dropped.
    pub fn press(&self, id: ElementId, actions: &mut dyn CallActions) -> Option<CallAction> {
        let key = self.store.bound_key(id)?;
        if !self.store.content(id).content.is_enabled {
            return None;
        }
        let action = CallAction::for_key(key);
        actions.dispatch(action);
        Some(action)
    }

    /// Returns the live button under `point`.
    ///
    /// Every button's own frame is checked, so buttons that overflow the
    /// panel bounds still receive presses.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<ElementId> {
        self.store
            .bound()
            .map(|(_, id)| id)
            .find(|&id| self.store.frame(id).contains(point))
    }

    /// Returns the frame of the camera toggle, if it is shown.
    #[must_use]
    pub fn video_button_frame(&self) -> Option<Rect> {
        self.store
            .get(ButtonKey::EnableCamera)
            .map(|id| self.store.frame(id))
    }

    /// Returns the live buttons and their frames in key order.
    #[must_use]
    pub fn frames(&self) -> Vec<(ButtonKey, Rect)> {
        self.store
            .bound()
            .map(|(key, id)| (key, self.store.frame(id)))
            .collect()
    }
}
