// Copyright 2026 the Callpanel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State-to-layout reconciliation engine for in-call control surfaces.
//!
//! `callpanel_core` turns a logical call state into the layout and animation
//! commands for two on-call surfaces: the action button cluster (accept,
//! decline, mute, camera, audio route, end) and the stack of status toasts
//! (camera off, microphone off, low battery). It is `no_std` compatible (with
//! `alloc`), performs no I/O, and never renders pixels itself.
//!
//! # Architecture
//!
//! Each surface runs the same pipeline on every state change:
//!
//! ```text
//!   CallPhase / ToastConditions
//!       │
//!       ▼
//!   classify ──► descriptors ──► layout ──► placed rows
//!                                               │
//!                 ┌─────────────────────────────┘
//!                 ▼
//!   reconcile (ElementStore) ──► Reconciliation ──► sequence ──► Commands
//!                                                                   │
//!                 ┌─────────────────────────────────────────────────┘
//!                 ▼
//!   Presenter::apply() ──► exit completion ──► Panel::finish_exit()
//! ```
//!
//! **[`call`]**: The call-state model: phases, speaker routes, video state.
//!
//! **[`button`]**: Button descriptors, the decision table that derives them,
//! and the presentation content (appearance, label, accessibility) for each.
//!
//! **[`toast`]**: Toast conditions, descriptors, and content.
//!
//! **[`layout`]**: Row packing for buttons and vertical stacking for toasts.
//!
//! **[`element`]**: Generational element handles and the keyed
//! [`ElementStore`](element::ElementStore) that owns the materialized set.
//!
//! **[`reconcile`]**: Diffs a descriptor list against the store by key.
//!
//! **[`sequence`]**: Phase-transition tracking, staged-reveal delays, and
//! command emission.
//!
//! **[`panel`]**: [`ButtonPanel`](panel::ButtonPanel) and
//! [`ToastPanel`](panel::ToastPanel), which run the whole pipeline and route
//! presses back to [`CallActions`](action::CallActions).
//!
//! **[`presenter`]**: The [`Presenter`](presenter::Presenter) trait that a
//! rendering layer implements to apply commands.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! pass instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod action;
pub mod button;
pub mod call;
pub mod command;
pub mod config;
pub mod element;
pub mod layout;
pub mod panel;
pub mod presenter;
pub mod reconcile;
pub mod sequence;
pub mod toast;
pub mod trace;
