// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The transition machine: states, guarded transitions, and actions.

use alloc::string::String;
use alloc::vec::Vec;

use bracken_events::PointerEvent;
use bracken_region::{RegionId, RegionSet};
use kurbo::Point;

use crate::pattern::BoundPattern;

/// Identifier for a state in a [`Machine`].
///
/// A plain index handle: states are added at build time and never removed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct StateId(pub(crate) u32);

impl StateId {
    /// Returns the position of this state in creation order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A declarative effect carried by a transition.
///
/// Actions are data; the machine delivers them to an [`EffectSink`] and
/// never interprets them itself. Region references are resolved handles, so
/// a sink needs no name lookups.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Emit a message. Hosts typically log or display it.
    Print(String),
    /// Replace a region's image handle.
    SetImage {
        /// The region whose image changes.
        region: RegionId,
        /// The new image handle.
        image: String,
    },
    /// Remove a region's image handle.
    ClearImage {
        /// The region whose image is removed.
        region: RegionId,
    },
    /// Move the owning interactor to a new origin.
    MoveTo(Point),
}

/// Receives the actions of fired transitions, in authored order.
///
/// Delivery is infallible by contract: a dispatch always delivers its full
/// derived event sequence, so a sink that can fail must handle the failure
/// internally rather than abort the sequence. `()` discards actions;
/// `Vec<Action>` records them (the natural test double).
pub trait EffectSink {
    /// Perform one action.
    fn perform(&mut self, action: &Action);
}

impl EffectSink for () {
    fn perform(&mut self, _action: &Action) {}
}

impl EffectSink for Vec<Action> {
    fn perform(&mut self, action: &Action) {
        self.push(action.clone());
    }
}

/// A guarded edge between two states.
#[derive(Clone, Debug)]
pub struct Transition {
    pub(crate) on: BoundPattern,
    pub(crate) to: StateId,
    pub(crate) actions: Vec<Action>,
}

impl Transition {
    /// The pattern guarding this transition.
    #[must_use]
    pub fn on(&self) -> BoundPattern {
        self.on
    }

    /// The state this transition leads to.
    #[must_use]
    pub fn to(&self) -> StateId {
        self.to
    }

    /// The actions performed when this transition fires.
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

/// A named state and its outgoing transitions, in authored order.
#[derive(Clone, Debug)]
pub struct State {
    pub(crate) name: String,
    pub(crate) transitions: Vec<Transition>,
}

impl State {
    /// The state's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The state's outgoing transitions.
    #[must_use]
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }
}

/// A declarative state machine over a region set.
///
/// The machine owns its regions: patterns and actions reference them by
/// handle, and the handles are only meaningful against this set. Behavior is
/// driven entirely by [`act_on`](Self::act_on) — there is no other way to
/// change the current state besides [`reset`](Self::reset).
#[derive(Clone, Debug)]
pub struct Machine<R> {
    regions: RegionSet<R>,
    states: Vec<State>,
    start: StateId,
    current: StateId,
}

impl<R> Machine<R> {
    /// Create a machine with no states yet.
    ///
    /// A machine without states ignores every event; add at least one state
    /// before use. The first state added becomes the start state unless
    /// [`set_start`](Self::set_start) says otherwise.
    #[must_use]
    pub fn new(regions: RegionSet<R>) -> Self {
        Self {
            regions,
            states: Vec::new(),
            start: StateId(0),
            current: StateId(0),
        }
    }

    /// The machine's regions.
    #[must_use]
    pub fn regions(&self) -> &RegionSet<R> {
        &self.regions
    }

    /// The machine's regions, mutably.
    pub fn regions_mut(&mut self) -> &mut RegionSet<R> {
        &mut self.regions
    }

    /// The machine's states, in creation order.
    #[must_use]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Append a state and return its handle.
    pub fn add_state(&mut self, name: impl Into<String>) -> StateId {
        let id = StateId(self.states.len() as u32);
        self.states.push(State {
            name: name.into(),
            transitions: Vec::new(),
        });
        id
    }

    /// Append a transition to `from`, guarded by `on`, leading to `to`.
    ///
    /// Transitions are consulted in the order they were added; the first
    /// match wins. A stale `from` handle is ignored.
    pub fn add_transition(
        &mut self,
        from: StateId,
        on: BoundPattern,
        to: StateId,
        actions: Vec<Action>,
    ) {
        debug_assert!(to.index() < self.states.len(), "`to` must be a valid state");
        if let Some(state) = self.states.get_mut(from.index()) {
            state.transitions.push(Transition { on, to, actions });
        }
    }

    /// Set the start state, and move to it.
    pub fn set_start(&mut self, state: StateId) {
        debug_assert!(
            state.index() < self.states.len(),
            "start must be a valid state"
        );
        self.start = state;
        self.current = state;
    }

    /// The current state.
    #[must_use]
    pub fn current(&self) -> StateId {
        self.current
    }

    /// The current state's name, if the machine has any states.
    #[must_use]
    pub fn current_name(&self) -> Option<&str> {
        self.states.get(self.current.index()).map(State::name)
    }

    /// Move back to the start state without firing anything.
    pub fn reset(&mut self) {
        self.current = self.start;
    }

    /// Deliver one semantic event to the machine.
    ///
    /// The current state's transitions are scanned in authored order; the
    /// first whose pattern accepts the event fires. Its actions go to
    /// `effects` in order, then the machine moves to the target state.
    /// Returns whether a transition fired. Synchronous and infallible.
    pub fn act_on(
        &mut self,
        event: PointerEvent<RegionId>,
        effects: &mut impl EffectSink,
    ) -> bool {
        let Some(state) = self.states.get(self.current.index()) else {
            return false;
        };
        let kind = event.kind();
        let region = event.region();
        let Some(transition) = state
            .transitions
            .iter()
            .find(|t| t.on.matches(kind, region))
        else {
            return false;
        };
        let to = transition.to;
        for action in &transition.actions {
            effects.perform(action);
        }
        self.current = to;
        true
    }
}
