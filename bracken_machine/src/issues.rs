// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration-issue reporting for binding and building.
//!
//! Problems in an authored description are point-local: each one names the
//! specification or region being processed, and reporting one does not stop
//! the others from being checked. The sink is an injected capability rather
//! than a global facility, so embedders decide where reports go and tests
//! capture them instead of terminating.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use bracken_events::EventKind;

/// A fatal configuration problem found while building a machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigIssue {
    /// An event pattern names a region that does not exist in the machine,
    /// and its kind is not one of the exempt region-less forms.
    UnboundRegion {
        /// The state whose transition carries the pattern.
        state: String,
        /// The pattern's event kind.
        kind: EventKind,
        /// The unmatched region name.
        region: String,
    },
    /// A transition names a target state that does not exist.
    UnknownTarget {
        /// The state whose transition is broken.
        state: String,
        /// The unmatched target state name.
        target: String,
    },
    /// The description's `start` field names a state that does not exist.
    UnknownStart {
        /// The unmatched start state name.
        start: String,
    },
    /// Two states share a name, making transition targets ambiguous.
    DuplicateState {
        /// The duplicated state name.
        name: String,
    },
    /// An action names a region that does not exist.
    UnknownActionRegion {
        /// The state whose transition carries the action.
        state: String,
        /// The unmatched region name.
        region: String,
    },
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundRegion {
                state,
                kind,
                region,
            } => write!(
                f,
                "event pattern ({kind}, {region:?}) in state {state:?} names an unknown region"
            ),
            Self::UnknownTarget { state, target } => write!(
                f,
                "transition in state {state:?} targets unknown state {target:?}"
            ),
            Self::UnknownStart { start } => {
                write!(f, "start state {start:?} does not exist")
            }
            Self::DuplicateState { name } => {
                write!(f, "state name {name:?} is used more than once")
            }
            Self::UnknownActionRegion { state, region } => write!(
                f,
                "action in state {state:?} names unknown region {region:?}"
            ),
        }
    }
}

/// An injected sink for fatal configuration problems.
///
/// Binding and building report every problem they find here and keep going;
/// the overall build fails afterwards if anything was reported. `Vec` is the
/// natural test double:
///
/// ```rust
/// use bracken_machine::{ConfigIssue, IssueSink};
///
/// let mut captured: Vec<ConfigIssue> = Vec::new();
/// captured.report(ConfigIssue::UnknownStart { start: "nope".into() });
/// assert_eq!(captured.len(), 1);
/// ```
pub trait IssueSink {
    /// Report one fatal configuration problem.
    fn report(&mut self, issue: ConfigIssue);
}

impl IssueSink for Vec<ConfigIssue> {
    fn report(&mut self, issue: ConfigIssue) {
        self.push(issue);
    }
}

/// A sink that discards issues.
///
/// For callers that only care whether building succeeded, not why it failed.
#[derive(Copy, Clone, Debug, Default)]
pub struct IgnoreIssues;

impl IssueSink for IgnoreIssues {
    fn report(&mut self, _issue: ConfigIssue) {}
}

/// A sink that forwards issues to the `log` facade at error level.
#[cfg(feature = "log")]
#[derive(Copy, Clone, Debug, Default)]
pub struct LogSink;

#[cfg(feature = "log")]
impl IssueSink for LogSink {
    fn report(&mut self, issue: ConfigIssue) {
        log::error!("{issue}");
    }
}
