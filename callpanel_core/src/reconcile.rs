// Copyright 2026 the Callpanel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyed diff of a descriptor list against the materialized elements.
//!
//! [`reconcile`] walks the targets of one pass in order. A key already bound
//! in the [`ElementStore`] keeps its element and receives the new frame and
//! content; an unbound key gets a fresh element. Keys that were bound before
//! the pass but have no target are unbound and reported as removed, leaving
//! their elements in the [`Exiting`](crate::element::ElementState::Exiting)
//! state until the caller disposes them.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use kurbo::Rect;

use crate::element::{ElementId, ElementKey, ElementStore};

/// Desired state of one element after a pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Target<K, C> {
    /// Slot.
    pub key: K,
    /// Frame in panel coordinates.
    pub frame: Rect,
    /// Content to show.
    pub content: C,
}

/// What happened to a target's element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// A new element was created.
    Created,
    /// The existing element was kept.
    Kept {
        /// The frame differs from the previous pass.
        frame_changed: bool,
        /// The content differs from the previous pass.
        content_changed: bool,
    },
}

/// One reconciled target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Reconciled<K> {
    /// Slot.
    pub key: K,
    /// Element now bound to the slot.
    pub id: ElementId,
    /// Whether the element is new.
    pub outcome: Outcome,
}

/// Result of reconciling one pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reconciliation<K> {
    /// Targets in input order.
    pub placed: Vec<Reconciled<K>>,
    /// Unbound elements in key order; they are now exiting.
    pub removed: Vec<(K, ElementId)>,
}

impl<K> Reconciliation<K> {
    /// Number of newly created elements.
    #[must_use]
    pub fn created_len(&self) -> usize {
        self.placed
            .iter()
            .filter(|r| r.outcome == Outcome::Created)
            .count()
    }

    /// Number of kept elements.
    #[must_use]
    pub fn kept_len(&self) -> usize {
        self.placed.len() - self.created_len()
    }
}

/// Reconciles `targets` against `store`.
///
/// # Panics
///
/// Panics if two targets share a key.
pub fn reconcile<K: ElementKey, C: Clone + PartialEq>(
    store: &mut ElementStore<K, C>,
    targets: Vec<Target<K, C>>,
) -> Reconciliation<K> {
    let mut seen = BTreeSet::new();
    let mut placed = Vec::with_capacity(targets.len());

    for Target {
        key,
        frame,
        content,
    } in targets
    {
        assert!(seen.insert(key), "duplicate key {key:?} in one pass");
        let reconciled = if let Some(id) = store.get(key) {
            let frame_changed = store.set_frame(id, frame);
            let content_changed = store.set_content(id, content);
            Reconciled {
                key,
                id,
                outcome: Outcome::Kept {
                    frame_changed,
                    content_changed,
                },
            }
        } else {
            Reconciled {
                key,
                id: store.create(key, frame, content),
                outcome: Outcome::Created,
            }
        };
        placed.push(reconciled);
    }

    let stale: Vec<K> = store
        .bound()
        .map(|(key, _)| key)
        .filter(|key| !seen.contains(key))
        .collect();
    let removed = stale
        .into_iter()
        .filter_map(|key| store.unbind(key).map(|id| (key, id)))
        .collect();

    Reconciliation { placed, removed }
}
