// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for regions: identity handles, flags, and the region capability.

use alloc::string::String;
use kurbo::{Point, Rect};

/// Identifier for a region in a [`RegionSet`](crate::RegionSet).
///
/// This is a small, copyable handle. Regions are created when a machine is
/// built and never removed, so a `RegionId` stays valid for the lifetime of
/// its owning set. Handles from different sets must not be mixed; nothing
/// ties a handle to the set it came from.
///
/// Identity comparisons between handles are exactly the "same region"
/// question: two regions may share a name or a frame, but never a handle
/// within one set.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RegionId(pub(crate) u32);

impl RegionId {
    /// Returns the position of this region in draw order (0 = drawn first).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Region flags controlling visibility and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RegionFlags: u8 {
        /// Region is visible (participates in drawing).
        const VISIBLE  = 0b0000_0001;
        /// Region is pickable (participates in hit testing).
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for RegionFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// The capability a region must provide: identity and hit-testable geometry.
///
/// Everything else about a region is opaque to this stack. Drawing in
/// particular is not part of the capability; the interactor hands regions to
/// a host-supplied painter instead.
pub trait Region {
    /// The region's name, unique within its owning machine.
    fn name(&self) -> &str;

    /// The region's frame (origin and size) in interactor-local coordinates.
    fn frame(&self) -> Rect;

    /// Returns `true` if the point lies within this region.
    ///
    /// The default is a bounding-box test against [`frame`](Self::frame).
    /// Implementations with non-rectangular geometry may refine it, but the
    /// result must stay within the frame.
    fn hit_test(&self, point: Point) -> bool {
        self.frame().contains(point)
    }
}

/// A plain rectangular region: a name, a frame, and an optional image handle.
///
/// This is what description building produces by default. The image handle is
/// an opaque string the host's painter resolves; this crate never interprets
/// it.
#[derive(Clone, Debug, PartialEq)]
pub struct RectRegion {
    /// The region's name.
    pub name: String,
    /// The region's frame in interactor-local coordinates.
    pub frame: Rect,
    /// Optional image handle, resolved by the host's painter.
    pub image: Option<String>,
}

impl RectRegion {
    /// Create a region with no image.
    #[must_use]
    pub fn new(name: impl Into<String>, frame: Rect) -> Self {
        Self {
            name: name.into(),
            frame,
            image: None,
        }
    }

    /// Attach an image handle.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

impl Region for RectRegion {
    fn name(&self) -> &str {
        &self.name
    }

    fn frame(&self) -> Rect {
        self.frame
    }
}
