// Copyright 2026 the Callpanel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps a copy of every event
//! in arrival order. Events are small `Copy` structs, so the recording is a
//! plain `Vec` of [`RecordedEvent`].

use callpanel_core::trace::{
    ElementChange, ElementEvent, PanelKind, PassBeginEvent, PassSummary, PhaseTransitionEvent,
    TraceSink,
};

/// A recorded event.
#[derive(Clone, Copy, Debug)]
pub enum RecordedEvent {
    /// A [`PassBeginEvent`].
    PassBegin(PassBeginEvent),
    /// A [`PhaseTransitionEvent`].
    PhaseTransition(PhaseTransitionEvent),
    /// An [`ElementEvent`].
    Element(ElementEvent),
    /// A [`PassSummary`].
    PassSummary(PassSummary),
}

/// A [`TraceSink`] that records every event in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in arrival order.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Drops everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Returns the element events of one panel with the given change.
    pub fn element_events(
        &self,
        panel: PanelKind,
        change: ElementChange,
    ) -> impl Iterator<Item = &ElementEvent> + '_ {
        self.events.iter().filter_map(move |event| match event {
            RecordedEvent::Element(e) if e.panel == panel && e.change == change => Some(e),
            _ => None,
        })
    }

    /// Returns the pass summaries of one panel.
    pub fn summaries(&self, panel: PanelKind) -> impl Iterator<Item = &PassSummary> + '_ {
        self.events.iter().filter_map(move |event| match event {
            RecordedEvent::PassSummary(s) if s.panel == panel => Some(s),
            _ => None,
        })
    }
}

impl TraceSink for RecorderSink {
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        self.events.push(RecordedEvent::PassBegin(*e));
    }

    fn on_phase_transition(&mut self, e: &PhaseTransitionEvent) {
        self.events.push(RecordedEvent::PhaseTransition(*e));
    }

    fn on_element(&mut self, e: &ElementEvent) {
        self.events.push(RecordedEvent::Element(*e));
    }

    fn on_pass_summary(&mut self, s: &PassSummary) {
        self.events.push(RecordedEvent::PassSummary(*s));
    }
}

#[cfg(test)]
mod tests {
    use callpanel_core::button::{ButtonKey, ButtonLabels};
    use callpanel_core::call::{CallMode, CallPhase, PhaseKind};
    use callpanel_core::panel::ButtonPanel;
    use callpanel_core::trace::Tracer;

    use super::*;

    #[test]
    fn records_a_full_pass() {
        let mut rec = RecorderSink::new();
        let mut panel = ButtonPanel::new(ButtonLabels::default());
        {
            let mut tracer = Tracer::new(&mut rec);
            panel.update_layout(
                &CallPhase::IncomingRinging(CallMode::default()),
                390.0,
                0.0,
                true,
                &mut tracer,
            );
        }

        let events = rec.events();
        assert!(matches!(events[0], RecordedEvent::PassBegin(e) if e.pass_index == 1));
        assert!(matches!(
            events[1],
            RecordedEvent::PhaseTransition(e) if e.from.is_none() && e.to == PhaseKind::IncomingRinging
        ));
        assert_eq!(
            rec.element_events(PanelKind::Buttons, ElementChange::Created)
                .count(),
            4
        );
        let summary = rec.summaries(PanelKind::Buttons).next().unwrap();
        assert_eq!(summary.created, 4);
        assert_eq!(summary.commands, 4);
    }

    #[test]
    fn records_disposal_of_exited_elements() {
        let mut rec = RecorderSink::new();
        let mut panel = ButtonPanel::new(ButtonLabels::default());
        let mut tracer = Tracer::new(&mut rec);
        panel.update_layout(
            &CallPhase::IncomingRinging(CallMode::default()),
            390.0,
            0.0,
            false,
            &mut tracer,
        );
        let decline = panel.store().get(ButtonKey::Decline).unwrap();
        panel.update_layout(
            &CallPhase::Active(CallMode::default()),
            390.0,
            0.0,
            true,
            &mut tracer,
        );
        panel.finish_exit(decline, &mut tracer);
        drop(tracer);

        let disposed: Vec<_> = rec
            .element_events(PanelKind::Buttons, ElementChange::Disposed)
            .map(|e| e.key)
            .collect();
        assert_eq!(disposed, ["decline"]);
        rec.clear();
        assert!(rec.events().is_empty());
    }
}
