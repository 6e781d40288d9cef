// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event kind vocabularies: raw pointer samples and semantic event kinds.

use core::fmt;

/// The kind of a raw pointer sample, as forwarded by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RawKind {
    /// The pointer was pressed.
    Press,
    /// The pointer moved.
    Move,
    /// The pointer was released.
    Release,
}

/// The kind of a semantic event or of an authored event pattern.
///
/// The first six kinds appear in derived [`PointerEvent`](crate::PointerEvent)
/// streams. [`Any`](Self::Any) and [`NeverMatch`](Self::NeverMatch) exist only
/// in authored patterns: `Any` accepts every incoming kind, `NeverMatch`
/// accepts none.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The pointer was pressed over a region.
    Press,
    /// The pointer was released over a region.
    Release,
    /// The pointer was released with no region under it.
    ReleaseNone,
    /// The pointer moved onto a region it was not over before.
    Enter,
    /// The pointer left a region it was over.
    Exit,
    /// The pointer moved while staying inside a region.
    MoveInside,
    /// Pattern-only: accepts every incoming kind.
    Any,
    /// Pattern-only: accepts no incoming kind.
    NeverMatch,
}

impl EventKind {
    /// Returns the canonical name for this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Press => "press",
            Self::Release => "release",
            Self::ReleaseNone => "release_none",
            Self::Enter => "enter",
            Self::Exit => "exit",
            Self::MoveInside => "move_inside",
            Self::Any => "any",
            Self::NeverMatch => "nevermatch",
        }
    }

    /// Parses a kind from its canonical name.
    ///
    /// This is total: an unrecognized name coerces to [`Self::NeverMatch`],
    /// producing a pattern that can never fire instead of an error. Event
    /// kinds live in data outside the type system, and a description written
    /// against a newer or older vocabulary should still load.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "press" => Self::Press,
            "release" => Self::Release,
            "release_none" => Self::ReleaseNone,
            "enter" => Self::Enter,
            "exit" => Self::Exit,
            "move_inside" => Self::MoveInside,
            "any" => Self::Any,
            _ => Self::NeverMatch,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
