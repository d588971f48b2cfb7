// Copyright 2026 the Callpanel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON exporter for recorded events.
//!
//! [`export`] writes the events of a [`RecorderSink`](super::recorder::RecorderSink)
//! as a pretty-printed JSON array. Every object carries a `"type"` field
//! naming the event and a `"panel"` field where the event has one.

use std::io::{self, Write};

use serde_json::{Value, json};

use callpanel_core::call::PhaseKind;

use crate::recorder::RecordedEvent;

/// Exports recorded events as a JSON array.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let values: Vec<Value> = events.iter().map(to_value).collect();
    serde_json::to_writer_pretty(writer, &values)?;
    Ok(())
}

fn to_value(event: &RecordedEvent) -> Value {
    match event {
        RecordedEvent::PassBegin(e) => json!({
            "type": "pass_begin",
            "panel": e.panel.as_str(),
            "pass": e.pass_index,
            "width": e.width,
            "animated": e.animated,
        }),
        RecordedEvent::PhaseTransition(e) => json!({
            "type": "phase_transition",
            "panel": "buttons",
            "pass": e.pass_index,
            "from": e.from.map(PhaseKind::as_str),
            "to": e.to.as_str(),
            "staged": e.staged,
        }),
        RecordedEvent::Element(e) => json!({
            "type": "element",
            "panel": e.panel.as_str(),
            "pass": e.pass_index,
            "change": e.change.as_str(),
            "key": e.key,
            "id": {
                "index": e.id.index(),
                "generation": e.id.generation(),
            },
            "frame": [e.frame.x0, e.frame.y0, e.frame.x1, e.frame.y1],
            "delay_ms": e.delay.as_secs_f64() * 1000.0,
        }),
        RecordedEvent::PassSummary(s) => json!({
            "type": "pass_summary",
            "panel": s.panel.as_str(),
            "pass": s.pass_index,
            "created": s.created,
            "kept": s.kept,
            "removed": s.removed,
            "commands": s.commands,
            "height": s.height,
        }),
    }
}
