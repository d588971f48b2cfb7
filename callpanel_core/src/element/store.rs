// Copyright 2026 the Callpanel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays element storage with key binding and lifecycle tracking.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use kurbo::Rect;

use super::id::{ElementId, ElementKey};

/// Lifecycle state of a store slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementState {
    /// The slot is on the free list.
    Free,
    /// The element is bound to its key and on screen.
    Live,
    /// The element lost its key and is playing its exit animation.
    Exiting,
}

/// Struct-of-arrays storage for the materialized elements of one panel.
///
/// Elements are addressed by [`ElementId`] handles. Internally, each element
/// occupies a slot in parallel arrays. Disposed elements are recycled via a
/// free list, and generation counters prevent stale handle access.
#[derive(Debug)]
pub struct ElementStore<K, C> {
    // -- Per-slot data --
    pub(crate) key: Vec<Option<K>>,
    pub(crate) frame: Vec<Rect>,
    pub(crate) content: Vec<Option<C>>,
    pub(crate) state: Vec<ElementState>,

    // -- Allocation --
    pub(crate) generation: Vec<u32>,
    pub(crate) free_list: Vec<u32>,
    pub(crate) len: u32,

    // -- Key binding --
    pub(crate) bound: BTreeMap<K, u32>,
}

impl<K: ElementKey, C: Clone + PartialEq> Default for ElementStore<K, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ElementKey, C: Clone + PartialEq> ElementStore<K, C> {
    /// Creates an empty element store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            key: Vec::new(),
            frame: Vec::new(),
            content: Vec::new(),
            state: Vec::new(),
            generation: Vec::new(),
            free_list: Vec::new(),
            len: 0,
            bound: BTreeMap::new(),
        }
    }

    // -- Allocation API --

    /// Creates a live element bound to `key` and returns its handle.
    ///
    /// # Panics
    ///
    /// Panics if `key` is already bound to a live element.
    pub fn create(&mut self, key: K, frame: Rect, content: C) -> ElementId {
        assert!(
            !self.bound.contains_key(&key),
            "key {key:?} already bound to a live element"
        );

        let idx = if let Some(idx) = self.free_list.pop() {
            // Reuse a freed slot.
            self.generation[idx as usize] += 1;
            self.key[idx as usize] = Some(key);
            self.frame[idx as usize] = frame;
            self.content[idx as usize] = Some(content);
            self.state[idx as usize] = ElementState::Live;
            idx
        } else {
            // Allocate a new slot.
            let idx = self.len;
            self.len += 1;
            self.key.push(Some(key));
            self.frame.push(frame);
            self.content.push(Some(content));
            self.state.push(ElementState::Live);
            self.generation.push(0);
            idx
        };

        self.bound.insert(key, idx);

        ElementId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Unbinds the live element for `key` and moves it to
    /// [`Exiting`](ElementState::Exiting).
    ///
    /// Returns `None` if no live element holds `key`.
    pub fn unbind(&mut self, key: K) -> Option<ElementId> {
        let idx = self.bound.remove(&key)?;
        self.state[idx as usize] = ElementState::Exiting;
        Some(ElementId {
            idx,
            generation: self.generation[idx as usize],
        })
    }

    /// Disposes an element, freeing its slot for reuse.
    ///
    /// A live element is unbound from its key first.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn dispose(&mut self, id: ElementId) {
        self.validate(id);
        let idx = id.idx as usize;
        if self.state[idx] == ElementState::Live {
            if let Some(key) = self.key[idx] {
                self.bound.remove(&key);
            }
        }

        // Bump generation so old handles immediately fail validation.
        self.generation[idx] += 1;
        self.key[idx] = None;
        self.content[idx] = None;
        self.state[idx] = ElementState::Free;
        self.free_list.push(id.idx);
    }

    /// Disposes an element that finished its exit animation.
    ///
    /// Returns `false` (and does nothing) if the handle is stale or the
    /// element is not exiting, so duplicate completion reports are harmless.
    pub fn finish_exit(&mut self, id: ElementId) -> bool {
        if self.state_of(id) != ElementState::Exiting {
            return false;
        }
        self.dispose(id);
        true
    }

    // -- Queries --

    /// Returns whether the given handle refers to a live or exiting element.
    #[must_use]
    pub fn is_alive(&self, id: ElementId) -> bool {
        self.state_of(id) != ElementState::Free
    }

    /// Returns the lifecycle state for a handle; stale handles read as
    /// [`Free`](ElementState::Free).
    #[must_use]
    pub fn state_of(&self, id: ElementId) -> ElementState {
        if id.idx < self.len && self.generation[id.idx as usize] == id.generation {
            self.state[id.idx as usize]
        } else {
            ElementState::Free
        }
    }

    /// Returns the live element bound to `key`, if any.
    #[must_use]
    pub fn get(&self, key: K) -> Option<ElementId> {
        self.bound.get(&key).map(|&idx| ElementId {
            idx,
            generation: self.generation[idx as usize],
        })
    }

    /// Returns the key a live element is bound to.
    ///
    /// Exiting elements and stale handles yield `None`.
    #[must_use]
    pub fn bound_key(&self, id: ElementId) -> Option<K> {
        if self.state_of(id) == ElementState::Live {
            self.key[id.idx as usize]
        } else {
            None
        }
    }

    /// Returns the key an element was created for, live or exiting.
    #[must_use]
    pub fn key_of(&self, id: ElementId) -> Option<K> {
        if self.is_alive(id) {
            self.key[id.idx as usize]
        } else {
            None
        }
    }

    /// Returns an iterator over live `(key, element)` pairs in key order.
    pub fn bound(&self) -> impl Iterator<Item = (K, ElementId)> + '_ {
        self.bound.iter().map(|(&key, &idx)| {
            (
                key,
                ElementId {
                    idx,
                    generation: self.generation[idx as usize],
                },
            )
        })
    }

    /// Returns the number of live elements.
    #[must_use]
    pub fn live_len(&self) -> usize {
        self.bound.len()
    }

    /// Returns the number of elements still playing their exit animation.
    #[must_use]
    pub fn exiting_len(&self) -> usize {
        self.state
            .iter()
            .filter(|&&s| s == ElementState::Exiting)
            .count()
    }

    // -- Properties --

    /// Returns the last frame pushed for an element.
    #[must_use]
    pub fn frame(&self, id: ElementId) -> Rect {
        self.validate(id);
        self.frame[id.idx as usize]
    }

    /// Records a new frame and returns whether it differs from the old one.
    pub fn set_frame(&mut self, id: ElementId, frame: Rect) -> bool {
        self.validate(id);
        let slot = &mut self.frame[id.idx as usize];
        let changed = *slot != frame;
        *slot = frame;
        changed
    }

    /// Returns the last content pushed for an element.
    #[must_use]
    pub fn content(&self, id: ElementId) -> &C {
        self.validate(id);
        self.content[id.idx as usize]
            .as_ref()
            .unwrap_or_else(|| unreachable!("live slot {id:?} without content"))
    }

    /// Records new content and returns whether it differs from the old one.
    pub fn set_content(&mut self, id: ElementId, content: C) -> bool {
        self.validate(id);
        let slot = &mut self.content[id.idx as usize];
        let changed = slot.as_ref() != Some(&content);
        *slot = Some(content);
        changed
    }

    // -- Internal helpers --

    /// Panics if the handle is stale.
    fn validate(&self, id: ElementId) {
        assert!(
            self.is_alive(id),
            "stale ElementId: {id:?} (current gen: {})",
            if id.idx < self.len {
                self.generation[id.idx as usize]
            } else {
                u32::MAX
            }
        );
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    enum Key {
        A,
        B,
    }

    impl ElementKey for Key {
        fn as_str(self) -> &'static str {
            match self {
                Self::A => "a",
                Self::B => "b",
            }
        }
    }

    fn frame(x: f64) -> Rect {
        Rect::new(x, 0.0, x + 10.0, 10.0)
    }

    #[test]
    fn create_binds_key() {
        let mut store = ElementStore::<Key, u32>::new();
        let id = store.create(Key::A, frame(0.0), 1);
        assert!(store.is_alive(id));
        assert_eq!(store.get(Key::A), Some(id));
        assert_eq!(store.bound_key(id), Some(Key::A));
        assert_eq!(*store.content(id), 1);
        assert_eq!(store.live_len(), 1);
    }

    #[test]
    fn generation_prevents_stale_access() {
        let mut store = ElementStore::<Key, u32>::new();
        let id1 = store.create(Key::A, frame(0.0), 1);
        store.dispose(id1);
        let id2 = store.create(Key::A, frame(0.0), 2);
        // id2 reuses the same slot but has a different generation.
        assert!(!store.is_alive(id1));
        assert!(store.is_alive(id2));
        assert_eq!(id1.idx, id2.idx);
        assert_ne!(id1.generation, id2.generation);
    }

    #[test]
    fn unbind_moves_to_exiting_and_frees_key() {
        let mut store = ElementStore::<Key, u32>::new();
        let old = store.create(Key::A, frame(0.0), 1);
        assert_eq!(store.unbind(Key::A), Some(old));
        assert_eq!(store.state_of(old), ElementState::Exiting);
        assert_eq!(store.bound_key(old), None);
        assert_eq!(store.key_of(old), Some(Key::A), "exiting keeps its key");
        assert_eq!(store.get(Key::A), None);

        // The key can be revived while the old element is still exiting.
        let revived = store.create(Key::A, frame(0.0), 1);
        assert_ne!(revived, old);
        assert_eq!(store.live_len(), 1);
        assert_eq!(store.exiting_len(), 1);
    }

    #[test]
    fn finish_exit_is_idempotent() {
        let mut store = ElementStore::<Key, u32>::new();
        let id = store.create(Key::B, frame(0.0), 1);
        store.unbind(Key::B);
        assert!(store.finish_exit(id), "first report disposes");
        assert!(!store.finish_exit(id), "second report is ignored");
        assert!(!store.is_alive(id));
    }

    #[test]
    fn finish_exit_ignores_live_elements() {
        let mut store = ElementStore::<Key, u32>::new();
        let id = store.create(Key::B, frame(0.0), 1);
        assert!(!store.finish_exit(id));
        assert!(store.is_alive(id));
    }

    #[test]
    fn dispose_live_element_unbinds_key() {
        let mut store = ElementStore::<Key, u32>::new();
        let id = store.create(Key::A, frame(0.0), 1);
        store.dispose(id);
        assert_eq!(store.get(Key::A), None);
        assert_eq!(store.live_len(), 0);
    }

    #[test]
    fn setters_report_changes() {
        let mut store = ElementStore::<Key, u32>::new();
        let id = store.create(Key::A, frame(0.0), 1);
        assert!(!store.set_frame(id, frame(0.0)));
        assert!(store.set_frame(id, frame(5.0)));
        assert_eq!(store.frame(id), frame(5.0));
        assert!(!store.set_content(id, 1));
        assert!(store.set_content(id, 2));
    }

    #[test]
    fn bound_iterates_in_key_order() {
        let mut store = ElementStore::<Key, u32>::new();
        let b = store.create(Key::B, frame(0.0), 0);
        let a = store.create(Key::A, frame(0.0), 0);
        let pairs: Vec<_> = store.bound().collect();
        assert_eq!(pairs, vec![(Key::A, a), (Key::B, b)]);
    }

    #[test]
    #[should_panic(expected = "already bound")]
    fn duplicate_key_panics() {
        let mut store = ElementStore::<Key, u32>::new();
        store.create(Key::A, frame(0.0), 0);
        store.create(Key::A, frame(0.0), 0);
    }

    #[test]
    #[should_panic(expected = "stale ElementId")]
    fn disposed_handle_panics_on_frame() {
        let mut store = ElementStore::<Key, u32>::new();
        let id = store.create(Key::A, frame(0.0), 0);
        store.dispose(id);
        let _ = store.frame(id);
    }
}
