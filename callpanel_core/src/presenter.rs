// Copyright 2026 the Callpanel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contract for rendering layers.
//!
//! The panels never touch platform views. Each pass returns a list of
//! [`Command`]s and a rendering layer applies them through [`Presenter`]:
//! a `UIView` tree, a DOM subtree, a retained scene graph, or a test double.
//!
//! # Update loop pseudocode
//!
//! ```rust,ignore
//! fn on_call_state(phase: CallPhase) {
//!     let update = buttons.update_layout(&phase, width, bottom_inset, true, &mut tracer);
//!     presenter.apply(&update.commands);
//!     container.set_height(update.height);
//! }
//!
//! fn on_exit_animation_done(id: ElementId) {
//!     if let Some(dispose) = buttons.finish_exit(id, &mut tracer) {
//!         presenter.apply(&[dispose]);
//!     }
//! }
//! ```

use alloc::vec::Vec;

use crate::command::Command;

/// Applies panel commands to a presentation tree.
pub trait Presenter<K, C> {
    /// Applies `commands` in order.
    fn apply(&mut self, commands: &[Command<K, C>]);
}

/// A [`Presenter`] that records every command it is given.
#[derive(Debug)]
pub struct RecordingPresenter<K, C> {
    commands: Vec<Command<K, C>>,
    batches: usize,
}

impl<K, C> Default for RecordingPresenter<K, C> {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            batches: 0,
        }
    }
}

impl<K, C> RecordingPresenter<K, C> {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every command applied so far.
    #[must_use]
    pub fn commands(&self) -> &[Command<K, C>] {
        &self.commands
    }

    /// Returns how many times [`Presenter::apply`] was called.
    #[must_use]
    pub fn batches(&self) -> usize {
        self.batches
    }

    /// Removes and returns the recorded commands.
    pub fn take(&mut self) -> Vec<Command<K, C>> {
        core::mem::take(&mut self.commands)
    }
}

impl<K: Clone, C: Clone> Presenter<K, C> for RecordingPresenter<K, C> {
    fn apply(&mut self, commands: &[Command<K, C>]) {
        self.batches += 1;
        self.commands.extend_from_slice(commands);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementId;

    #[test]
    fn records_in_order() {
        let a = ElementId {
            idx: 0,
            generation: 0,
        };
        let b = ElementId {
            idx: 1,
            generation: 0,
        };
        let mut presenter = RecordingPresenter::<u8, ()>::new();
        presenter.apply(&[Command::Dispose { id: a }]);
        presenter.apply(&[Command::Dispose { id: b }]);
        assert_eq!(presenter.batches(), 2);
        let ids: Vec<_> = presenter.take().iter().map(Command::id).collect();
        assert_eq!(ids, [a, b]);
        assert!(presenter.commands().is_empty());
    }
}
