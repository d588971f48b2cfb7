// Copyright 2026 the Callpanel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Commands a pass emits for the rendering layer.
//!
//! A pass returns its commands as a flat list in application order. For each
//! element the order is fixed: `Create` (new elements only), then
//! `UpdateFrame`, then `UpdateContent`, then `AnimateIn`. Removed elements
//! follow the placed ones with either `AnimateOut` or, in immediate passes,
//! `Dispose`.
//!
//! `AnimateOut` is not terminal: once the renderer finishes the animation it
//! reports completion through the panel's `finish_exit`, which answers with
//! the `Dispose` for that element.

use core::time::Duration;

use kurbo::Rect;

use crate::element::ElementId;

/// Timing curve of an animated transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Curve {
    /// Symmetric ease-in-out.
    EaseInOut,
    /// Critically damped spring.
    Spring,
}

/// How a property change is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Jump to the new value.
    Immediate,
    /// Animate to the new value.
    Animated {
        /// Animation length.
        duration: Duration,
        /// Timing curve.
        curve: Curve,
    },
}

impl Transition {
    /// Returns whether this transition animates.
    #[must_use]
    pub const fn is_animated(self) -> bool {
        matches!(self, Self::Animated { .. })
    }
}

/// Enter animation of a newly created element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EnterEffect {
    /// Fade in from transparent.
    Fade {
        /// Fade length.
        duration: Duration,
    },
    /// Fade in while growing from `from_scale` to full size.
    FadeAndGrow {
        /// Fade length.
        fade: Duration,
        /// Grow length.
        grow: Duration,
        /// Initial scale.
        from_scale: f64,
    },
}

/// Exit animation of a removed element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExitEffect {
    /// Fade out to transparent.
    Fade,
    /// Shrink to `to_scale` while fading out.
    ShrinkAndFade {
        /// Final scale.
        to_scale: f64,
    },
}

/// One instruction for the rendering layer.
#[derive(Clone, Debug, PartialEq)]
pub enum Command<K, C> {
    /// Materialize a new element with its initial state.
    Create {
        /// New element.
        id: ElementId,
        /// Slot the element is bound to.
        key: K,
        /// Initial frame, applied without animation.
        frame: Rect,
        /// Initial content.
        content: C,
    },
    /// Move or resize an element.
    UpdateFrame {
        /// Target element.
        id: ElementId,
        /// New frame.
        frame: Rect,
        /// How to get there.
        transition: Transition,
        /// Start delay.
        delay: Duration,
    },
    /// Replace the content of an element.
    UpdateContent {
        /// Target element.
        id: ElementId,
        /// New content.
        content: C,
        /// How to get there.
        transition: Transition,
    },
    /// Play the enter animation of a new element.
    AnimateIn {
        /// Target element.
        id: ElementId,
        /// Animation to play.
        effect: EnterEffect,
        /// Start delay.
        delay: Duration,
    },
    /// Play the exit animation of a removed element, then report completion.
    AnimateOut {
        /// Target element.
        id: ElementId,
        /// Animation to play.
        effect: ExitEffect,
        /// Timing of the animation.
        transition: Transition,
    },
    /// Drop an element and release its resources.
    Dispose {
        /// Target element.
        id: ElementId,
    },
}

impl<K, C> Command<K, C> {
    /// Returns the element this command targets.
    #[must_use]
    pub const fn id(&self) -> ElementId {
        match self {
            Self::Create { id, .. }
            | Self::UpdateFrame { id, .. }
            | Self::UpdateContent { id, .. }
            | Self::AnimateIn { id, .. }
            | Self::AnimateOut { id, .. }
            | Self::Dispose { id } => *id,
        }
    }

    /// Returns a short label for diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::UpdateFrame { .. } => "update-frame",
            Self::UpdateContent { .. } => "update-content",
            Self::AnimateIn { .. } => "animate-in",
            Self::AnimateOut { .. } => "animate-out",
            Self::Dispose { .. } => "dispose",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_shared_by_every_variant() {
        let id = ElementId {
            idx: 3,
            generation: 1,
        };
        let commands: [Command<u8, ()>; 3] = [
            Command::Create {
                id,
                key: 0,
                frame: Rect::ZERO,
                content: (),
            },
            Command::AnimateOut {
                id,
                effect: ExitEffect::Fade,
                transition: Transition::Immediate,
            },
            Command::Dispose { id },
        ];
        for command in &commands {
            assert_eq!(command.id(), id, "{} targets the element", command.name());
        }
    }

    #[test]
    fn only_animated_transitions_animate() {
        assert!(!Transition::Immediate.is_animated());
        assert!(
            Transition::Animated {
                duration: Duration::from_millis(300),
                curve: Curve::Spring,
            }
            .is_animated()
        );
    }
}
