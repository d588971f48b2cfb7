// Copyright 2026 the Callpanel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The toast stack.

use alloc::vec::Vec;
use core::time::Duration;

use super::{PanelUpdate, finish_exit, trace_elements};
use crate::command::{Command, EnterEffect, ExitEffect};
use crate::config::{AnimationConfig, ToastMetrics};
use crate::element::{ElementId, ElementStore};
use crate::layout::{ToastBubble, measure_toast, stack_toasts};
use crate::reconcile::{Target, reconcile};
use crate::sequence::{Motion, emit};
use crate::toast::{
    TextMeasure, ToastConditions, ToastContent, ToastKey, ToastLabels, classify_toasts, present,
};
use crate::trace::{PanelKind, PassBeginEvent, PassSummary, Tracer};

/// Content of a materialized toast: what it says and how its bubble is laid
/// out inside the toast frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastItem {
    /// Icon and text.
    pub content: ToastContent,
    /// Measured bubble.
    pub bubble: ToastBubble,
}

/// Owns the materialized toasts and keeps them in sync with the active
/// conditions.
#[derive(Debug)]
pub struct ToastPanel {
    store: ElementStore<ToastKey, ToastItem>,
    labels: ToastLabels,
    metrics: ToastMetrics,
    animation: AnimationConfig,
    applied_width: Option<f64>,
    pass_index: u64,
}

impl ToastPanel {
    /// Creates an empty panel.
    #[must_use]
    pub fn new(labels: ToastLabels) -> Self {
        Self {
            store: ElementStore::new(),
            labels,
            metrics: ToastMetrics::default(),
            animation: AnimationConfig::default(),
            applied_width: None,
            pass_index: 0,
        }
    }

    /// Replaces the animation parameters.
    #[must_use]
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    /// Replaces the stack geometry.
    #[must_use]
    pub fn with_metrics(mut self, metrics: ToastMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Replaces the toast texts; the next pass picks them up.
    pub fn set_labels(&mut self, labels: ToastLabels) {
        self.labels = labels;
    }

    /// Returns the element store.
    #[must_use]
    pub fn store(&self) -> &ElementStore<ToastKey, ToastItem> {
        &self.store
    }

    /// Runs a layout pass for `conditions`.
    ///
    /// Text is measured only for toasts whose content or container width
    /// changed since the last pass. The first pass is always applied without
    /// animation.
    pub fn update_layout(
        &mut self,
        conditions: ToastConditions,
        width: f64,
        animated: bool,
        measure: &mut dyn TextMeasure,
        tracer: &mut Tracer<'_>,
    ) -> PanelUpdate<ToastKey, ToastItem> {
        self.pass_index += 1;
        let pass_index = self.pass_index;
        tracer.pass_begin(&PassBeginEvent {
            panel: PanelKind::Toasts,
            pass_index,
            width,
            animated,
        });

        let is_initial = self.applied_width.is_none();
        let same_width = self.applied_width == Some(width);
        self.applied_width = Some(width);

        let motion = if animated && !is_initial {
            Motion::Animated {
                transition: self.animation.transition(true),
                enter: EnterEffect::FadeAndGrow {
                    fade: self.animation.fade_in,
                    grow: self.animation.grow_in,
                    from_scale: self.animation.enter_scale,
                },
            }
        } else {
            Motion::Immediate
        };

        let items: Vec<(ToastKey, ToastItem)> = classify_toasts(conditions)
            .into_iter()
            .map(|descriptor| {
                let key = descriptor.key();
                let content = present(descriptor, &self.labels);
                let cached = self
                    .store
                    .get(key)
                    .map(|id| self.store.content(id))
                    .filter(|item| same_width && item.content == content)
                    .map(|item| item.bubble);
                let bubble = match cached {
                    Some(bubble) => bubble,
                    None => measure_toast(&content.text, width, &self.metrics, &mut *measure),
                };
                (key, ToastItem { content, bubble })
            })
            .collect();

        let heights: Vec<f64> = items.iter().map(|(_, item)| item.bubble.height()).collect();
        let stack = stack_toasts(&heights, width, &self.metrics);
        let targets = items
            .into_iter()
            .zip(stack.frames)
            .map(|((key, content), frame)| Target {
                key,
                frame,
                content,
            })
            .collect();
        let reconciliation = reconcile(&mut self.store, targets);

        let exit = ExitEffect::ShrinkAndFade {
            to_scale: self.animation.exit_scale,
        };
        let commands = emit(
            &self.store,
            &reconciliation,
            &motion,
            |_| Duration::ZERO,
            |_| exit,
        );
        trace_elements(
            tracer,
            PanelKind::Toasts,
            pass_index,
            &self.store,
            &reconciliation,
            |_| Duration::ZERO,
        );
        if !motion.is_animated() {
            for &(_, id) in &reconciliation.removed {
                finish_exit(&mut self.store, id, PanelKind::Toasts, pass_index, tracer);
            }
        }

        tracer.pass_summary(&PassSummary {
            panel: PanelKind::Toasts,
            pass_index,
            created: reconciliation.created_len(),
            kept: reconciliation.kept_len(),
            removed: reconciliation.removed.len(),
            commands: commands.len(),
            height: stack.height,
        });

        PanelUpdate {
            height: stack.height,
            commands,
        }
    }

    /// Disposes a toast whose exit animation finished.
    ///
    /// Returns the `Dispose` command, or `None` for stale, live, or already
    /// disposed elements.
    pub fn finish_exit(
        &mut self,
        id: ElementId,
        tracer: &mut Tracer<'_>,
    ) -> Option<Command<ToastKey, ToastItem>> {
        finish_exit(
            &mut self.store,
            id,
            PanelKind::Toasts,
            self.pass_index,
            tracer,
        )
    }
}
