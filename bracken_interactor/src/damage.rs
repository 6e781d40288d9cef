// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damage batches: coarse repaint requests drained by the host.

use alloc::vec::Vec;
use kurbo::Rect;

/// A batched set of parent-space rectangles that may need repainting.
///
/// Damage is intentionally coarse: mutations that can change what the
/// interactor looks like (moving it, replacing its machine) record the
/// affected bounds here, and the host drains the batch with
/// [`Interactor::take_damage`](crate::Interactor::take_damage) when it
/// schedules a repaint. Rectangles may overlap and are not deduplicated;
/// callers can merge them if needed.
///
/// Dispatching raw input records no damage by itself — the visual
/// consequences of transitions flow through the host's effect sink, which
/// knows what actually changed.
#[derive(Clone, Debug, Default)]
pub struct Damage {
    /// Parent-space rectangles that should be repainted.
    pub dirty_rects: Vec<Rect>,
}

impl Damage {
    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dirty_rects.is_empty()
    }

    /// Returns the union of all damage rects.
    #[must_use]
    pub fn union_rect(&self) -> Option<Rect> {
        let mut it = self.dirty_rects.iter().copied();
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn empty_damage_has_no_union() {
        let damage = Damage::default();
        assert!(damage.is_empty());
        assert_eq!(damage.union_rect(), None);
    }

    #[test]
    fn union_covers_all_rects() {
        let damage = Damage {
            dirty_rects: vec![
                Rect::new(0.0, 0.0, 10.0, 10.0),
                Rect::new(5.0, 5.0, 30.0, 20.0),
            ],
        };
        assert_eq!(damage.union_rect(), Some(Rect::new(0.0, 0.0, 30.0, 20.0)));
    }
}
