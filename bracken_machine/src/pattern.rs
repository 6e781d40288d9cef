// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-phase event patterns: authored name, bound handle.
//!
//! An [`EventPattern`] is what the description carries: an event kind and a
//! region name. A [`BoundPattern`] is what dispatch matches against: the
//! same kind and a resolved [`Target`]. Binding happens once, after the
//! machine's full region set is known, so matching needs no lookups and no
//! allocation — it is evaluated for every transition of the current state on
//! every semantic event.

use alloc::string::String;
use core::fmt;

use bracken_events::EventKind;
use bracken_region::{Region, RegionId, RegionSet};

/// The region name that authors a wildcard pattern.
pub const WILDCARD: &str = "*";

/// An authored, unbound event pattern: an event kind and a region name.
///
/// Unbound patterns cannot be matched; resolve them with
/// [`bind`](Self::bind) first. The split into two types makes
/// "matched before bound" unrepresentable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventPattern {
    kind: EventKind,
    region: String,
}

impl EventPattern {
    /// Create a pattern from an event kind and a region name.
    ///
    /// [`WILDCARD`] (`"*"`) as the name authors a pattern that matches
    /// unconditionally. The empty name is valid only for the region-less
    /// kinds (`release_none`, `any`) and for `nevermatch`.
    #[must_use]
    pub fn new(kind: EventKind, region: impl Into<String>) -> Self {
        Self {
            kind,
            region: region.into(),
        }
    }

    /// The pattern's event kind.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// The authored region name.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Resolve the region name against the machine's region set.
    ///
    /// Resolution, in order:
    ///
    /// 1. `"*"` stays unbound as the wildcard.
    /// 2. A name present in the set binds to that region (first match in
    ///    draw order).
    /// 3. A `nevermatch` pattern is intentionally unsatisfiable; an
    ///    unresolved name is accepted silently.
    /// 4. A `release_none` or `any` pattern with an *empty* name is
    ///    legitimately region-less.
    /// 5. Anything else is a fatal configuration error.
    pub fn bind<R: Region>(&self, regions: &RegionSet<R>) -> Result<BoundPattern, BindError> {
        if self.region == WILDCARD {
            return Ok(BoundPattern {
                kind: self.kind,
                target: Target::Any,
            });
        }
        if let Some(id) = regions.find_named(&self.region) {
            return Ok(BoundPattern {
                kind: self.kind,
                target: Target::Region(id),
            });
        }
        if self.kind == EventKind::NeverMatch {
            return Ok(BoundPattern {
                kind: self.kind,
                target: Target::None,
            });
        }
        if matches!(self.kind, EventKind::ReleaseNone | EventKind::Any) && self.region.is_empty() {
            return Ok(BoundPattern {
                kind: self.kind,
                target: Target::None,
            });
        }
        Err(BindError {
            kind: self.kind,
            region: self.region.clone(),
        })
    }
}

/// Error returned when a pattern's region name resolves to nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindError {
    /// The pattern's event kind.
    pub kind: EventKind,
    /// The unmatched region name.
    pub region: String,
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "event pattern ({}, {:?}) names a region that does not exist",
            self.kind, self.region
        )
    }
}

impl core::error::Error for BindError {}

/// What a bound pattern requires of an incoming event's region.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// Authored as `"*"`: any region, or none.
    Any,
    /// No region requirement: the region-less and intentionally
    /// unsatisfiable forms.
    None,
    /// Exactly this region, by handle identity.
    Region(RegionId),
}

/// A bound event pattern, produced by [`EventPattern::bind`].
///
/// Matching is O(1): a kind comparison and a handle comparison, nothing
/// else.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundPattern {
    kind: EventKind,
    target: Target,
}

impl BoundPattern {
    /// A pattern that never matches.
    pub const NEVER: Self = Self {
        kind: EventKind::NeverMatch,
        target: Target::None,
    };

    /// The pattern's event kind.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// The pattern's region requirement.
    #[must_use]
    pub fn target(&self) -> Target {
        self.target
    }

    /// Returns `true` if this pattern accepts the given event.
    ///
    /// - A wildcard pattern (authored `"*"`) matches unconditionally.
    /// - A `release_none` pattern compares kinds only; the supplied region
    ///   is ignored even when present, since a release over nothing is
    ///   inherently region-less.
    /// - A `nevermatch` pattern accepts nothing.
    /// - An `any` pattern accepts every kind; a bound region requirement
    ///   still applies.
    /// - Everything else requires exact kind equality and exact region
    ///   identity — handles, not names.
    #[must_use]
    pub fn matches(&self, kind: EventKind, region: Option<RegionId>) -> bool {
        if self.target == Target::Any {
            return true;
        }
        match self.kind {
            EventKind::ReleaseNone => kind == EventKind::ReleaseNone,
            EventKind::NeverMatch => false,
            EventKind::Any => match self.target {
                Target::Region(r) => region == Some(r),
                Target::Any | Target::None => true,
            },
            k => {
                if k != kind {
                    return false;
                }
                match self.target {
                    Target::Region(r) => region == Some(r),
                    Target::Any | Target::None => false,
                }
            }
        }
    }
}
