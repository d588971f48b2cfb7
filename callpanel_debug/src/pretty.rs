// Copyright 2026 the Callpanel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Delays are
//! printed in milliseconds.

use std::io::Write;

use callpanel_core::call::PhaseKind;
use callpanel_core::trace::{
    ElementEvent, PassBeginEvent, PassSummary, PhaseTransitionEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the destination.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn phase_name(phase: Option<PhaseKind>) -> &'static str {
    phase.map_or("none", PhaseKind::as_str)
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        let _ = writeln!(
            self.writer,
            "[pass:begin] {} pass={} width={:.1} animated={}",
            e.panel.as_str(),
            e.pass_index,
            e.width,
            e.animated,
        );
    }

    fn on_phase_transition(&mut self, e: &PhaseTransitionEvent) {
        let staged = if e.staged { " staged" } else { "" };
        let _ = writeln!(
            self.writer,
            "[phase] pass={} {} -> {}{staged}",
            e.pass_index,
            phase_name(e.from),
            e.to.as_str(),
        );
    }

    fn on_element(&mut self, e: &ElementEvent) {
        let _ = writeln!(
            self.writer,
            "[element:{}] {} pass={} {} {:?} at ({:.1}, {:.1}) {:.1}x{:.1} delay={:.1}ms",
            e.change.as_str(),
            e.panel.as_str(),
            e.pass_index,
            e.key,
            e.id,
            e.frame.x0,
            e.frame.y0,
            e.frame.width(),
            e.frame.height(),
            e.delay.as_secs_f64() * 1000.0,
        );
    }

    fn on_pass_summary(&mut self, s: &PassSummary) {
        let _ = writeln!(
            self.writer,
            "[summary] {} pass={} created={} kept={} removed={} commands={} height={:.1}",
            s.panel.as_str(),
            s.pass_index,
            s.created,
            s.kept,
            s.removed,
            s.commands,
            s.height,
        );
    }
}

#[cfg(test)]
mod tests {
    use callpanel_core::trace::PanelKind;

    use super::*;

    #[test]
    fn pretty_print_pass_begin() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_pass_begin(&PassBeginEvent {
            panel: PanelKind::Toasts,
            pass_index: 1,
            width: 390.0,
            animated: false,
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(output.contains("[pass:begin]"), "got: {output}");
        assert!(output.contains("toasts pass=1"), "got: {output}");
    }

    #[test]
    fn pretty_print_staged_transition() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_phase_transition(&PhaseTransitionEvent {
            pass_index: 2,
            from: Some(PhaseKind::IncomingRinging),
            to: PhaseKind::Active,
            staged: true,
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(
            output.contains("incoming -> active staged"),
            "got: {output}"
        );
    }
}
