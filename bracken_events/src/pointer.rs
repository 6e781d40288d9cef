// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer state helper: derive semantic events from raw samples and pick lists.
//!
//! ## Usage
//!
//! 1) Hit-test the raw sample's position to get a pick list, topmost first.
//! 2) Call [`PointerState::update`] with the raw kind and the pick list.
//! 3) Deliver the returned events, in order, to your state machine.
//!
//! The state held between calls is exactly the previous pick list (the
//! visited set); it is replaced wholesale on every update.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashSet;

use crate::kind::{EventKind, RawKind};

/// A semantic, region-aware event derived from one raw pointer sample.
///
/// Values are ephemeral: produced by [`PointerState::update`] and consumed
/// within the same dispatch. `K` is the application's region handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerEvent<K> {
    /// The pointer moved onto the region.
    Enter(K),
    /// The pointer left the region.
    Exit(K),
    /// The pointer was pressed over the region.
    Press(K),
    /// The pointer was released over the region.
    Release(K),
    /// The pointer moved while staying inside the region.
    MoveInside(K),
    /// The pointer was released with no region under it.
    ReleaseNone,
}

impl<K: Copy> PointerEvent<K> {
    /// Returns the kind of this event.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Enter(_) => EventKind::Enter,
            Self::Exit(_) => EventKind::Exit,
            Self::Press(_) => EventKind::Press,
            Self::Release(_) => EventKind::Release,
            Self::MoveInside(_) => EventKind::MoveInside,
            Self::ReleaseNone => EventKind::ReleaseNone,
        }
    }

    /// Returns the region this event concerns, if any.
    ///
    /// Only [`ReleaseNone`](Self::ReleaseNone) is region-less.
    #[must_use]
    pub fn region(&self) -> Option<K> {
        match *self {
            Self::Enter(k)
            | Self::Exit(k)
            | Self::Press(k)
            | Self::Release(k)
            | Self::MoveInside(k) => Some(k),
            Self::ReleaseNone => None,
        }
    }
}

/// Derives ordered semantic events by comparing successive pick lists.
///
/// `PointerState` holds the visited set: the pick list recorded from the
/// previous update. Given a new raw sample's kind and pick list, it emits
/// exits (regions no longer under the pointer), enters (regions newly under
/// it), and then the action-specific events, and finally replaces the
/// visited set with the new pick list.
///
/// Ordering semantics:
/// - Exits precede enters, which precede action-specific events.
/// - Exits follow the visited set's relative order; all other groups follow
///   the pick list's order (topmost region first).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointerState<K: Copy + Eq + Hash> {
    visited: Vec<K>,
}

impl<K: Copy + Eq + Hash> PointerState<K> {
    /// Create a pointer state with an empty visited set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            visited: Vec::new(),
        }
    }

    /// Returns the visited set: the pick list from the previous update.
    #[must_use]
    pub fn visited(&self) -> &[K] {
        &self.visited
    }

    /// Forget the visited set without emitting events.
    ///
    /// Use this when the region population itself changes (for example a new
    /// machine is installed), making the recorded handles meaningless.
    pub fn clear(&mut self) {
        self.visited.clear();
    }

    /// Translate one raw sample into its ordered semantic events.
    ///
    /// `picked` is the pick list for the sample's position, topmost region
    /// first. The visited set is replaced with `picked` wholesale, whichever
    /// branch is taken.
    pub fn update(&mut self, action: RawKind, picked: &[K]) -> Vec<PointerEvent<K>> {
        let picked_set: HashSet<K> = picked.iter().copied().collect();
        let visited_set: HashSet<K> = self.visited.iter().copied().collect();

        let mut out = Vec::new();

        // Exits: in the visited set but no longer picked.
        for &k in &self.visited {
            if !picked_set.contains(&k) {
                out.push(PointerEvent::Exit(k));
            }
        }

        // Enters: picked but not yet visited.
        for &k in picked {
            if !visited_set.contains(&k) {
                out.push(PointerEvent::Enter(k));
            }
        }

        match action {
            RawKind::Press => {
                out.extend(picked.iter().map(|&k| PointerEvent::Press(k)));
            }
            RawKind::Move => {
                // Only regions the pointer was already over and remains over.
                out.extend(
                    picked
                        .iter()
                        .filter(|k| visited_set.contains(*k))
                        .map(|&k| PointerEvent::MoveInside(k)),
                );
            }
            RawKind::Release => {
                if picked.is_empty() {
                    out.push(PointerEvent::ReleaseNone);
                } else {
                    out.extend(picked.iter().map(|&k| PointerEvent::Release(k)));
                }
            }
        }

        self.visited.clear();
        self.visited.extend_from_slice(picked);
        out
    }
}
