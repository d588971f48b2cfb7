// Copyright 2026 the Callpanel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Materialized element storage.
//!
//! A *materialized element* is the persistent, stateful object a rendering
//! layer keeps on screen for one [`ElementKey`]. Each element has:
//!
//! - An identity ([`ElementId`]), a generational handle that becomes stale
//!   when the element is disposed, so a late press or a duplicate exit report
//!   can never reach a recycled slot.
//! - A binding to at most one key. While bound the element is *live*; once
//!   its key disappears from the descriptor list it is unbound and *exiting*
//!   until its exit animation finishes and it is disposed.
//! - The last frame and content pushed to the rendering layer, so unchanged
//!   values are not resent.
//!
//! The store guarantees that no two live elements share a key. An exiting
//! element no longer holds its key, so the key may be revived with a fresh
//! element while the old one finishes fading out.

mod id;
mod store;

pub use id::{ElementId, ElementKey};
pub use store::{ElementState, ElementStore};
