// Copyright 2026 the Callpanel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two panels that own materialized elements.
//!
//! [`ButtonPanel`] and [`ToastPanel`] run the full pipeline for their surface
//! on every call to `update_layout`: classify, lay out, reconcile against the
//! panel's [`ElementStore`](crate::element::ElementStore), and emit commands.
//! Both return a [`PanelUpdate`] and expect the host to report finished exit
//! animations through `finish_exit`.

mod buttons;
mod toasts;

pub use buttons::ButtonPanel;
pub use toasts::{ToastItem, ToastPanel};

use alloc::vec::Vec;
use core::time::Duration;

use crate::command::Command;
use crate::element::{ElementId, ElementKey, ElementState, ElementStore};
use crate::reconcile::{Outcome, Reconciliation};
use crate::trace::{ElementChange, ElementEvent, PanelKind, Tracer};

/// Output of one layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelUpdate<K, C> {
    /// Height the panel needs; zero when it shows nothing.
    pub height: f64,
    /// Commands for the rendering layer, in application order.
    pub commands: Vec<Command<K, C>>,
}

/// Reports every placed and removed element of a pass.
fn trace_elements<K: ElementKey, C: Clone + PartialEq>(
    tracer: &mut Tracer<'_>,
    panel: PanelKind,
    pass_index: u64,
    store: &ElementStore<K, C>,
    reconciliation: &Reconciliation<K>,
    mut delay_for: impl FnMut(K) -> Duration,
) {
    for placed in &reconciliation.placed {
        tracer.element(&ElementEvent {
            panel,
            pass_index,
            key: placed.key.as_str(),
            id: placed.id,
            change: match placed.outcome {
                Outcome::Created => ElementChange::Created,
                Outcome::Kept { .. } => ElementChange::Kept,
            },
            frame: store.frame(placed.id),
            delay: delay_for(placed.key),
        });
    }
    for &(key, id) in &reconciliation.removed {
        tracer.element(&ElementEvent {
            panel,
            pass_index,
            key: key.as_str(),
            id,
            change: ElementChange::Removed,
            frame: store.frame(id),
            delay: Duration::ZERO,
        });
    }
}

/// Disposes an exiting element and returns its `Dispose` command.
///
/// Stale handles and elements that are not exiting yield `None`.
fn finish_exit<K: ElementKey, C: Clone + PartialEq>(
    store: &mut ElementStore<K, C>,
    id: ElementId,
    panel: PanelKind,
    pass_index: u64,
    tracer: &mut Tracer<'_>,
) -> Option<Command<K, C>> {
    if store.state_of(id) != ElementState::Exiting {
        return None;
    }
    let key = store.key_of(id)?;
    let frame = store.frame(id);
    store.finish_exit(id);
    tracer.element(&ElementEvent {
        panel,
        pass_index,
        key: key.as_str(),
        id,
        change: ElementChange::Disposed,
        frame,
        delay: Duration::ZERO,
    });
    Some(Command::Dispose { id })
}
