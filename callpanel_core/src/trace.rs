// Copyright 2026 the Callpanel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for layout passes.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! panels call at each stage of a pass. All method bodies default to no-ops,
//! so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use core::time::Duration;

use kurbo::Rect;

use crate::call::PhaseKind;
use crate::element::ElementId;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which panel emitted an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelKind {
    /// The call button panel.
    Buttons,
    /// The toast stack.
    Toasts,
}

impl PanelKind {
    /// Returns a short label for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buttons => "buttons",
            Self::Toasts => "toasts",
        }
    }
}

/// What happened to an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementChange {
    /// A new element was bound to its key.
    Created,
    /// The bound element was updated in place.
    Kept,
    /// The element lost its key and started exiting.
    Removed,
    /// The element was released.
    Disposed,
}

impl ElementChange {
    /// Returns a short label for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Kept => "kept",
            Self::Removed => "removed",
            Self::Disposed => "disposed",
        }
    }
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a panel starts a layout pass.
#[derive(Clone, Copy, Debug)]
pub struct PassBeginEvent {
    /// Emitting panel.
    pub panel: PanelKind,
    /// Per-panel pass counter.
    pub pass_index: u64,
    /// Container width.
    pub width: f64,
    /// Whether the caller asked for animation.
    pub animated: bool,
}

/// Emitted by the button panel once per pass.
#[derive(Clone, Copy, Debug)]
pub struct PhaseTransitionEvent {
    /// Pass counter.
    pub pass_index: u64,
    /// Phase of the previous pass.
    pub from: Option<PhaseKind>,
    /// Phase of this pass.
    pub to: PhaseKind,
    /// Whether the staged reveal applies.
    pub staged: bool,
}

/// Emitted for every element a pass touches.
#[derive(Clone, Copy, Debug)]
pub struct ElementEvent {
    /// Emitting panel.
    pub panel: PanelKind,
    /// Pass counter; exit completions carry the latest pass.
    pub pass_index: u64,
    /// Slot name.
    pub key: &'static str,
    /// Element handle.
    pub id: ElementId,
    /// What happened.
    pub change: ElementChange,
    /// Frame after the change.
    pub frame: Rect,
    /// Start delay of the element's animation.
    pub delay: Duration,
}

/// Emitted when a panel finishes a pass.
#[derive(Clone, Copy, Debug)]
pub struct PassSummary {
    /// Emitting panel.
    pub panel: PanelKind,
    /// Pass counter.
    pub pass_index: u64,
    /// Elements created.
    pub created: usize,
    /// Elements kept.
    pub kept: usize,
    /// Elements that started exiting or were disposed.
    pub removed: usize,
    /// Commands emitted.
    pub commands: usize,
    /// Band height reported to the caller.
    pub height: f64,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the panels.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called at the start of a pass.
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        _ = e;
    }

    /// Called when the button panel resolves its phase transition.
    fn on_phase_transition(&mut self, e: &PhaseTransitionEvent) {
        _ = e;
    }

    /// Called for every element a pass touches.
    fn on_element(&mut self, e: &ElementEvent) {
        _ = e;
    }

    /// Called at the end of a pass.
    fn on_pass_summary(&mut self, s: &PassSummary) {
        _ = s;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`PassBeginEvent`].
    #[inline]
    pub fn pass_begin(&mut self, e: &PassBeginEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_pass_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PhaseTransitionEvent`].
    #[inline]
    pub fn phase_transition(&mut self, e: &PhaseTransitionEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_phase_transition(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`ElementEvent`].
    #[inline]
    pub fn element(&mut self, e: &ElementEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_element(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PassSummary`].
    #[inline]
    pub fn pass_summary(&mut self, s: &PassSummary) {
        #[cfg(feature = "trace")]
        if let Some(sink) = &mut self.sink {
            sink.on_pass_summary(s);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = s;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_begin() -> PassBeginEvent {
        PassBeginEvent {
            panel: PanelKind::Buttons,
            pass_index: 42,
            width: 390.0,
            animated: true,
        }
    }

    fn sample_summary() -> PassSummary {
        PassSummary {
            panel: PanelKind::Toasts,
            pass_index: 42,
            created: 1,
            kept: 2,
            removed: 0,
            commands: 5,
            height: 98.0,
        }
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_pass_begin(&sample_begin());
        sink.on_phase_transition(&PhaseTransitionEvent {
            pass_index: 0,
            from: None,
            to: PhaseKind::IncomingRinging,
            staged: false,
        });
        sink.on_pass_summary(&sample_summary());
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.pass_begin(&sample_begin());
        tracer.pass_summary(&sample_summary());
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(PanelKind::Buttons.as_str(), "buttons");
        assert_eq!(ElementChange::Disposed.as_str(), "disposed");
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            passes: Vec<u64>,
        }
        impl TraceSink for RecordingSink {
            fn on_pass_begin(&mut self, e: &PassBeginEvent) {
                self.passes.push(e.pass_index);
            }
        }

        let mut sink = RecordingSink { passes: Vec::new() };
        let mut tracer = Tracer::new(&mut sink);
        tracer.pass_begin(&sample_begin());
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.passes, &[42]);
    }
}
