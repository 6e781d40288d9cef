// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bracken_interactor --heading-base-level=0

//! Bracken Interactor: screen-positioned objects driven by declarative machines.
//!
//! An [`Interactor`] is the object a host application places on a surface: it
//! has an origin, an optional [`Machine`](bracken_machine::Machine), and the
//! visited-set state that turns raw pointer samples into semantic events.
//! The host forwards raw input with [`Interactor::dispatch_raw`]; everything
//! downstream — picking, enter/exit derivation, transition matching, action
//! delivery — happens inside, synchronously, before the call returns.
//!
//! ## Division of labor
//!
//! The host owns the rendering surface, fetching description text from
//! wherever it lives, and interpreting actions (through an
//! [`EffectSink`](bracken_machine::EffectSink)). The interactor owns
//! translation and dispatch order. Rendering crosses the [`RegionPainter`]
//! seam; repaint scheduling crosses the [`Damage`] batch, drained with
//! [`Interactor::take_damage`].
//!
//! ## Minimal example
//!
//! ```rust
//! use bracken_events::RawKind;
//! use bracken_interactor::Interactor;
//! use bracken_machine::ConfigIssue;
//! use kurbo::Point;
//!
//! let json = r#"{
//!     "regions": [{"name": "pad", "x": 0, "y": 0, "width": 20, "height": 20}],
//!     "states": [
//!         {"name": "out", "transitions": [
//!             {"evtType": "enter", "region": "pad", "target": "over"}
//!         ]},
//!         {"name": "over", "transitions": [
//!             {"evtType": "exit", "region": "pad", "target": "out"}
//!         ]}
//!     ]
//! }"#;
//!
//! let mut interactor = Interactor::new(Point::new(100.0, 100.0));
//! let mut issues: Vec<ConfigIssue> = Vec::new();
//! interactor.load_json(json, &mut issues).unwrap();
//!
//! // Input points are interactor-local; the machine reacts to the derived
//! // enter/exit events.
//! interactor.dispatch_raw(RawKind::Move, Point::new(5.0, 5.0), &mut ());
//! assert_eq!(interactor.machine().unwrap().current_name(), Some("over"));
//!
//! interactor.dispatch_raw(RawKind::Move, Point::new(50.0, 50.0), &mut ());
//! assert_eq!(interactor.machine().unwrap().current_name(), Some("out"));
//! ```
//!
//! ## Loading
//!
//! [`Interactor::load_json`] uninstalls the old machine, then parses and
//! builds off to the side and installs the result only on success: a failed
//! load leaves the interactor without a machine — never a stale or
//! partially constructed one — and the caller may simply retry. Loading is
//! synchronous; hosts that fetch descriptions asynchronously complete the
//! fetch first and must not overlap a load with an in-flight dispatch (the
//! whole stack is single-threaded by design).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod damage;
mod interactor;

pub use damage::Damage;
pub use interactor::{Interactor, LoadError, RegionPainter};
