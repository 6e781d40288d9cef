// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interactor object: position, machine, dispatch, and drawing.

use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Rect};

use bracken_events::{PointerEvent, PointerState, RawKind};
use bracken_machine::{
    BuildError, EffectSink, IssueSink, Machine, ParseError, RegionDesc, parse,
};
use bracken_region::{RectRegion, Region, RegionFlags, RegionId};

use crate::damage::Damage;

/// The rendering seam: hosts implement this to draw regions.
///
/// The interactor walks its regions in draw order (bottom first) and hands
/// each visible one here, with its frame already translated into the
/// parent's coordinates.
pub trait RegionPainter<R> {
    /// Paint one region at `frame`.
    ///
    /// `debug` asks for diagnostic adornments (outlines, names) on top of
    /// the normal rendering; what that means is the host's choice.
    fn paint(&mut self, region: &R, frame: Rect, debug: bool);
}

/// Error returned by [`Interactor::load_json`].
///
/// Either way, the interactor is left without a machine; the caller may
/// retry the load.
#[derive(Debug)]
pub enum LoadError {
    /// The description text did not parse.
    Parse(ParseError),
    /// The description parsed but could not be built; the details went to
    /// the issue sink.
    Build(BuildError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "loading failed: {err}"),
            Self::Build(err) => write!(f, "loading failed: {err}"),
        }
    }
}

impl core::error::Error for LoadError {}

/// A screen-positioned object whose behavior is a declarative machine.
///
/// The interactor holds an origin in its parent's coordinates, an optional
/// [`Machine`], and the visited set used to derive enter/exit transitions
/// across raw samples. Without a machine every operation is a no-op or
/// returns an empty result.
///
/// Input points given to [`pick`](Self::pick) and
/// [`dispatch_raw`](Self::dispatch_raw) are interactor-local; the origin
/// affects drawing and damage only.
#[derive(Clone, Debug)]
pub struct Interactor<R> {
    origin: Point,
    machine: Option<Machine<R>>,
    pointer: PointerState<RegionId>,
    damage: Damage,
}

impl<R: Region> Interactor<R> {
    /// Create an interactor at `origin` with no machine.
    #[must_use]
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            machine: None,
            pointer: PointerState::new(),
            damage: Damage::default(),
        }
    }

    /// The interactor's origin in parent coordinates.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Move the interactor, recording damage over the old and new bounds.
    pub fn set_origin(&mut self, origin: Point) {
        if origin == self.origin {
            return;
        }
        self.record_bounds_damage();
        self.origin = origin;
        self.record_bounds_damage();
    }

    /// The installed machine, if any.
    #[must_use]
    pub fn machine(&self) -> Option<&Machine<R>> {
        self.machine.as_ref()
    }

    /// The installed machine, mutably.
    pub fn machine_mut(&mut self) -> Option<&mut Machine<R>> {
        self.machine.as_mut()
    }

    /// Install or remove the machine.
    ///
    /// Replacement is atomic from the host's point of view: the visited set
    /// is reset (its handles belonged to the old machine's regions) and
    /// damage is recorded over the old and new bounds.
    pub fn set_machine(&mut self, machine: Option<Machine<R>>) {
        self.record_bounds_damage();
        self.machine = machine;
        self.pointer.clear();
        self.record_bounds_damage();
    }

    /// The interactor's bounds in parent coordinates: the union of its
    /// region frames, translated by the origin. `None` without a machine or
    /// without regions.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        let regions = self.machine.as_ref()?.regions();
        regions.bounds().map(|r| r + self.origin.to_vec2())
    }

    /// The regions under an interactor-local point, topmost first.
    ///
    /// Empty without a machine.
    #[must_use]
    pub fn pick(&self, point: Point) -> Vec<RegionId> {
        match &self.machine {
            Some(machine) => machine.regions().pick(point),
            None => Vec::new(),
        }
    }

    /// Dispatch one raw pointer sample at an interactor-local point.
    ///
    /// Picks the point, derives the ordered semantic events against the
    /// visited set, and delivers each to the machine in sequence; fired
    /// transitions send their actions to `effects`. The visited set is
    /// replaced before returning. Delivery is synchronous and total — the
    /// caller regains control only after the full derived sequence has been
    /// acted on.
    ///
    /// Without a machine this is a no-op returning no events.
    pub fn dispatch_raw(
        &mut self,
        action: RawKind,
        point: Point,
        effects: &mut impl EffectSink,
    ) -> Vec<PointerEvent<RegionId>> {
        let Some(machine) = self.machine.as_mut() else {
            return Vec::new();
        };
        let picked = machine.regions().pick(point);
        let events = self.pointer.update(action, &picked);
        for &event in &events {
            machine.act_on(event, effects);
        }
        events
    }

    /// Draw the interactor's visible regions through the painter.
    ///
    /// Regions go to the painter in draw order (bottom first), frames
    /// translated into parent coordinates. Regions without
    /// [`RegionFlags::VISIBLE`] are skipped. A machine-less interactor
    /// draws nothing.
    pub fn draw(&self, painter: &mut impl RegionPainter<R>, debug: bool) {
        let Some(machine) = self.machine.as_ref() else {
            return;
        };
        let offset = self.origin.to_vec2();
        let regions = machine.regions();
        for (id, region) in regions.iter() {
            let visible = regions
                .flags(id)
                .is_some_and(|f| f.contains(RegionFlags::VISIBLE));
            if visible {
                painter.paint(region, region.frame() + offset, debug);
            }
        }
    }

    /// Drain the pending damage batch.
    pub fn take_damage(&mut self) -> Damage {
        core::mem::take(&mut self.damage)
    }

    /// Load a machine description, materializing regions through
    /// `make_region`.
    ///
    /// The old machine is uninstalled first, then the description is parsed
    /// and built off to the side and installed only if both succeed. A
    /// failed load therefore leaves the interactor without a machine —
    /// never with a stale or partially constructed one — and the caller may
    /// retry.
    pub fn load_json_with<F>(
        &mut self,
        json: &str,
        make_region: F,
        issues: &mut impl IssueSink,
    ) -> Result<(), LoadError>
    where
        F: FnMut(&RegionDesc) -> R,
    {
        self.set_machine(None);
        let desc = parse(json).map_err(LoadError::Parse)?;
        let machine = desc
            .build_with(make_region, issues)
            .map_err(LoadError::Build)?;
        self.set_machine(Some(machine));
        Ok(())
    }

    fn record_bounds_damage(&mut self) {
        if let Some(bounds) = self.bounds() {
            self.damage.dirty_rects.push(bounds);
        }
    }
}

impl Interactor<RectRegion> {
    /// Load a machine description with plain rectangular regions.
    ///
    /// See [`load_json_with`](Self::load_json_with) for the failure
    /// contract.
    pub fn load_json(
        &mut self,
        json: &str,
        issues: &mut impl IssueSink,
    ) -> Result<(), LoadError> {
        self.set_machine(None);
        let desc = parse(json).map_err(LoadError::Parse)?;
        let machine = desc.build(issues).map_err(LoadError::Build)?;
        self.set_machine(Some(machine));
        Ok(())
    }
}
