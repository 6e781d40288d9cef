// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bracken_events --heading-base-level=0

//! Bracken Events: raw-to-semantic pointer event translation.
//!
//! This crate turns primitive pointer samples (press, move, release at a
//! point) into the ordered stream of region-aware events that a declarative
//! state machine consumes: enter, exit, press, release, move-inside, and
//! release-over-nothing.
//!
//! It does not perform hit testing. Instead, feed [`PointerState::update`]
//! the pick list for the current sample — the regions under the pointer,
//! topmost first — and it derives the transition events by comparing that
//! list against the pick list it recorded for the previous sample (the
//! "visited set").
//!
//! ## Ordering
//!
//! For a single raw sample the derived events are always emitted as
//! exits, then enters, then the action-specific events. Within each of
//! those groups, delivery order follows the pick list (topmost region
//! first); exits follow the previous pick list's relative order.
//!
//! ## Minimal example
//!
//! ```rust
//! use bracken_events::{PointerEvent, PointerState, RawKind};
//!
//! let mut pointer: PointerState<u32> = PointerState::new();
//!
//! // Press over two overlapping regions; region 2 is topmost.
//! let events = pointer.update(RawKind::Press, &[2, 1]);
//! assert_eq!(events, vec![
//!     PointerEvent::Enter(2),
//!     PointerEvent::Enter(1),
//!     PointerEvent::Press(2),
//!     PointerEvent::Press(1),
//! ]);
//!
//! // Release away from both: exits, then a single region-less release.
//! let events = pointer.update(RawKind::Release, &[]);
//! assert_eq!(events, vec![
//!     PointerEvent::Exit(2),
//!     PointerEvent::Exit(1),
//!     PointerEvent::ReleaseNone,
//! ]);
//! assert!(pointer.visited().is_empty());
//! ```
//!
//! ## Integration
//!
//! The region keys are application-defined (`K: Copy + Eq + Hash`): use a
//! region handle from `bracken_region`, an index, or any small id type.
//! `bracken_machine` consumes the emitted [`PointerEvent`]s and matches them
//! against authored event patterns.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod kind;
mod pointer;

pub use kind::{EventKind, RawKind};
pub use pointer::{PointerEvent, PointerState};
