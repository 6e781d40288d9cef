// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bracken_region --heading-base-level=0

//! Bracken Region: named, hit-testable screen regions with draw-order pick lists.
//!
//! A region is the unit of interaction for a data-driven interactor: it has a
//! unique name (within its owning machine), a frame used for bounding-box hit
//! testing, and an identity handle that downstream layers compare instead of
//! names. This crate holds regions in **draw order** and answers the one
//! spatial question the rest of the stack depends on: which regions are under
//! a point, topmost first.
//!
//! ## Ordering
//!
//! [`RegionSet`] stores regions in the order they are pushed, which is the
//! order they are drawn (first pushed = visually bottom). [`RegionSet::pick`]
//! returns the containing regions in **reverse draw order** — the region
//! drawn most recently appears first. Every "topmost first" delivery rule in
//! the event layers is anchored on this contract.
//!
//! ## Minimal example
//!
//! ```rust
//! use bracken_region::{RectRegion, RegionSet};
//! use kurbo::{Point, Rect};
//!
//! let mut regions = RegionSet::new();
//! let a = regions.push(RectRegion::new("a", Rect::new(0.0, 0.0, 10.0, 10.0)));
//! let b = regions.push(RectRegion::new("b", Rect::new(5.0, 5.0, 15.0, 15.0)));
//!
//! // b was pushed (drawn) last, so it is topmost where the two overlap.
//! assert_eq!(regions.pick(Point::new(7.0, 7.0)), vec![b, a]);
//! assert_eq!(regions.pick(Point::new(2.0, 2.0)), vec![a]);
//! assert_eq!(regions.find_named("b"), Some(b));
//! ```
//!
//! ## Not a renderer
//!
//! Regions do not draw themselves. Rendering lives behind the painter seam in
//! `bracken_interactor`; this crate only supplies geometry, identity, and the
//! [`RegionFlags`] that gate visibility and picking.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod set;
mod types;

pub use set::RegionSet;
pub use types::{RectRegion, Region, RegionFlags, RegionId};
