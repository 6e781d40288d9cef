// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bracken_machine --heading-base-level=0

//! Bracken Machine: declarative event patterns and transition machines.
//!
//! A machine's behavior is authored as data: states, transitions guarded by
//! event patterns, and the actions a fired transition performs. This crate
//! holds the pattern-matching core — the part that decides which transition
//! fires for an incoming semantic event — plus the machine itself and the
//! serde model for the JSON description format.
//!
//! ## Two-phase patterns
//!
//! An authored pattern is an event kind and a region *name*
//! ([`EventPattern`]). Before a machine runs, every pattern is resolved
//! against the machine's full region set exactly once
//! ([`EventPattern::bind`]), producing a [`BoundPattern`] that compares
//! region *handles*. The two phases are distinct types, so an unbound
//! pattern cannot be matched by construction, and matching during dispatch
//! is O(1) and allocation-free — it runs for every transition of the current
//! state on every semantic event.
//!
//! A pattern whose name resolves to nothing — and which is not one of the
//! exempt region-less forms — is a fatal configuration error, surfaced at
//! bind time through an injected [`IssueSink`], never deferred to match
//! time.
//!
//! ## Minimal example
//!
//! ```rust
//! use bracken_events::{EventKind, PointerEvent};
//! use bracken_machine::{Action, EventPattern, Machine};
//! use bracken_region::{RectRegion, RegionSet};
//! use kurbo::Rect;
//!
//! let mut regions = RegionSet::new();
//! let button = regions.push(RectRegion::new("button", Rect::new(0.0, 0.0, 20.0, 10.0)));
//!
//! let press = EventPattern::new(EventKind::Press, "button")
//!     .bind(&regions)
//!     .unwrap();
//!
//! let mut machine = Machine::new(regions);
//! let idle = machine.add_state("idle");
//! let armed = machine.add_state("armed");
//! machine.add_transition(idle, press, armed, vec![Action::Print("armed!".into())]);
//!
//! let mut performed = Vec::new();
//! assert!(machine.act_on(PointerEvent::Press(button), &mut performed));
//! assert_eq!(machine.current(), armed);
//! assert_eq!(performed, vec![Action::Print("armed!".into())]);
//! ```
//!
//! ## Description format
//!
//! [`parse`] reads the JSON form (`regions`, `states`, transitions with
//! `evtType`/`region`/`target`), and [`MachineDesc::build`] resolves it into
//! a runnable machine. An unrecognized `evtType` string coerces to
//! `nevermatch` — data outlives vocabularies, and a pattern that can never
//! fire is more useful than a refused description. A missing `region` field,
//! by contrast, is a hard parse error.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod description;
mod issues;
mod machine;
mod pattern;

pub use description::{
    ActionDesc, BuildError, MachineDesc, ParseError, RegionDesc, StateDesc, TransitionDesc, parse,
};
pub use issues::{ConfigIssue, IgnoreIssues, IssueSink};
pub use machine::{Action, EffectSink, Machine, State, StateId, Transition};
pub use pattern::{BindError, BoundPattern, EventPattern, Target, WILDCARD};

#[cfg(feature = "log")]
pub use issues::LogSink;
