// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw-ordered region storage and pick-list queries.

use alloc::vec::Vec;
use kurbo::{Point, Rect};

use crate::types::{Region, RegionFlags, RegionId};

#[derive(Clone, Debug)]
struct Entry<R> {
    region: R,
    flags: RegionFlags,
}

/// Regions in draw order, with identity handles and pick-list queries.
///
/// The set is append-only: regions are pushed when a machine is built and
/// never removed, so [`RegionId`]s stay valid for the set's lifetime. The
/// push order is the draw order (first pushed = drawn first = visually
/// bottom).
#[derive(Clone, Debug)]
pub struct RegionSet<R> {
    entries: Vec<Entry<R>>,
}

impl<R> Default for RegionSet<R> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<R> RegionSet<R> {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of regions in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the set holds no regions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a region, drawn after (on top of) everything already present.
    ///
    /// Returns the region's identity handle. Default flags apply
    /// (visible and pickable).
    pub fn push(&mut self, region: R) -> RegionId {
        let id = RegionId(self.entries.len() as u32);
        self.entries.push(Entry {
            region,
            flags: RegionFlags::default(),
        });
        id
    }

    /// Returns the region for a handle.
    #[must_use]
    pub fn get(&self, id: RegionId) -> Option<&R> {
        self.entries.get(id.index()).map(|e| &e.region)
    }

    /// Returns the region for a handle, mutably.
    pub fn get_mut(&mut self, id: RegionId) -> Option<&mut R> {
        self.entries.get_mut(id.index()).map(|e| &mut e.region)
    }

    /// Returns the flags for a handle.
    #[must_use]
    pub fn flags(&self, id: RegionId) -> Option<RegionFlags> {
        self.entries.get(id.index()).map(|e| e.flags)
    }

    /// Replace the flags for a handle. A stale handle is ignored.
    pub fn set_flags(&mut self, id: RegionId, flags: RegionFlags) {
        if let Some(e) = self.entries.get_mut(id.index()) {
            e.flags = flags;
        }
    }

    /// Iterate regions with their handles, in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (RegionId, &R)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (RegionId(i as u32), &e.region))
    }
}

impl<R: Region> RegionSet<R> {
    /// Returns the handle of the first region (in draw order) with the given
    /// name.
    ///
    /// Names are expected to be unique within a machine; when they are not,
    /// the earliest region wins, deterministically.
    #[must_use]
    pub fn find_named(&self, name: &str) -> Option<RegionId> {
        self.entries
            .iter()
            .position(|e| e.region.name() == name)
            .map(|i| RegionId(i as u32))
    }

    /// Returns the pickable regions containing `point`, topmost first.
    ///
    /// "Topmost first" is reverse draw order: the region drawn most recently
    /// appears first in the result. Regions without
    /// [`RegionFlags::PICKABLE`] are skipped. No side effects.
    #[must_use]
    pub fn pick(&self, point: Point) -> Vec<RegionId> {
        let mut out = Vec::new();
        self.pick_into(point, &mut out);
        out
    }

    /// [`pick`](Self::pick), appending into a caller-owned buffer.
    pub fn pick_into(&self, point: Point, out: &mut Vec<RegionId>) {
        for (i, e) in self.entries.iter().enumerate().rev() {
            if e.flags.contains(RegionFlags::PICKABLE) && e.region.hit_test(point) {
                out.push(RegionId(i as u32));
            }
        }
    }

    /// Returns the union of all region frames, or `None` for an empty set.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        let mut it = self.entries.iter().map(|e| e.region.frame());
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RectRegion;
    use alloc::vec;

    fn set_of(frames: &[(&str, Rect)]) -> RegionSet<RectRegion> {
        let mut set = RegionSet::new();
        for (name, frame) in frames {
            set.push(RectRegion::new(*name, *frame));
        }
        set
    }

    #[test]
    fn pick_is_topmost_first() {
        let set = set_of(&[
            ("bottom", Rect::new(0.0, 0.0, 10.0, 10.0)),
            ("middle", Rect::new(0.0, 0.0, 10.0, 10.0)),
            ("top", Rect::new(0.0, 0.0, 10.0, 10.0)),
        ]);
        let picked = set.pick(Point::new(5.0, 5.0));
        let names: Vec<&str> = picked
            .iter()
            .map(|&id| set.get(id).unwrap().name.as_str())
            .collect();
        assert_eq!(names, vec!["top", "middle", "bottom"]);
    }

    #[test]
    fn pick_misses_return_empty() {
        let set = set_of(&[("only", Rect::new(0.0, 0.0, 10.0, 10.0))]);
        assert!(set.pick(Point::new(50.0, 50.0)).is_empty());
    }

    #[test]
    fn pick_skips_unpickable_regions() {
        let mut set = set_of(&[
            ("a", Rect::new(0.0, 0.0, 10.0, 10.0)),
            ("b", Rect::new(0.0, 0.0, 10.0, 10.0)),
        ]);
        let b = set.find_named("b").unwrap();
        set.set_flags(b, RegionFlags::VISIBLE);
        let picked = set.pick(Point::new(5.0, 5.0));
        assert_eq!(picked, vec![set.find_named("a").unwrap()]);
    }

    #[test]
    fn find_named_prefers_draw_order_on_duplicates() {
        let set = set_of(&[
            ("dup", Rect::new(0.0, 0.0, 1.0, 1.0)),
            ("dup", Rect::new(2.0, 2.0, 3.0, 3.0)),
        ]);
        let id = set.find_named("dup").unwrap();
        assert_eq!(id.index(), 0);
    }

    #[test]
    fn handles_are_identity_not_names() {
        let set = set_of(&[
            ("dup", Rect::new(0.0, 0.0, 1.0, 1.0)),
            ("dup", Rect::new(0.0, 0.0, 1.0, 1.0)),
        ]);
        let picked = set.pick(Point::new(0.5, 0.5));
        assert_eq!(picked.len(), 2);
        assert_ne!(picked[0], picked[1]);
    }

    #[test]
    fn bounds_unions_frames() {
        let set = set_of(&[
            ("a", Rect::new(0.0, 0.0, 10.0, 10.0)),
            ("b", Rect::new(20.0, 20.0, 30.0, 30.0)),
        ]);
        assert_eq!(set.bounds(), Some(Rect::new(0.0, 0.0, 30.0, 30.0)));
        assert_eq!(RegionSet::<RectRegion>::new().bounds(), None);
    }
}
