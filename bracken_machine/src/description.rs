// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The serialized machine description and its resolution into a [`Machine`].
//!
//! Parsing and building are separate steps with separate failure modes:
//! [`parse`] rejects malformed JSON and structurally invalid descriptions
//! (a missing or non-string `region` field is a hard error), while
//! [`MachineDesc::build`] resolves names — regions, targets, the start
//! state — and reports every unresolved one to the injected
//! [`IssueSink`] before refusing to produce a machine.
//!
//! Event kind names are the deliberate exception to strictness: an
//! unrecognized `evtType` coerces to `nevermatch` at parse time, producing a
//! transition that can never fire instead of a rejected description.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use kurbo::{Point, Rect};
use serde::Deserialize;

use bracken_events::EventKind;
use bracken_region::{RectRegion, Region, RegionSet};

use crate::issues::{ConfigIssue, IssueSink};
use crate::machine::{Action, Machine, StateId};
use crate::pattern::EventPattern;

/// A machine description, as parsed from JSON.
///
/// Unknown fields are ignored throughout, so descriptions written against a
/// newer schema still load.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MachineDesc {
    /// Regions in draw order (first = drawn first = visually bottom).
    #[serde(default)]
    pub regions: Vec<RegionDesc>,
    /// Name of the start state. Defaults to the first state.
    #[serde(default)]
    pub start: Option<String>,
    /// The machine's states. A description with no states cannot be built.
    #[serde(default)]
    pub states: Vec<StateDesc>,
}

/// A region's serialized form: a name, a frame, and an optional image.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RegionDesc {
    /// The region's name, unique within the machine.
    pub name: String,
    /// Left edge of the frame, in interactor-local coordinates.
    #[serde(default)]
    pub x: f64,
    /// Top edge of the frame.
    #[serde(default)]
    pub y: f64,
    /// Frame width.
    #[serde(default)]
    pub width: f64,
    /// Frame height.
    #[serde(default)]
    pub height: f64,
    /// Optional image handle, resolved by the host's painter.
    #[serde(default)]
    pub image: Option<String>,
}

impl RegionDesc {
    /// The described frame as a rectangle.
    #[must_use]
    pub fn frame(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// A state's serialized form.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct StateDesc {
    /// The state's name, unique within the machine.
    pub name: String,
    /// Outgoing transitions, in priority order (first match wins).
    #[serde(default)]
    pub transitions: Vec<TransitionDesc>,
}

/// A transition's serialized form.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TransitionDesc {
    /// The guarding event kind. An unrecognized name coerces to
    /// `nevermatch` rather than failing the parse.
    #[serde(rename = "evtType", deserialize_with = "kind_from_name")]
    pub evt_type: EventKind,
    /// The guarding region name; `"*"` is the wildcard. Required — a
    /// missing or non-string value is a hard parse error.
    pub region: String,
    /// The target state's name.
    pub target: String,
    /// Actions performed when the transition fires, in order.
    #[serde(default)]
    pub actions: Vec<ActionDesc>,
}

/// An action's serialized form, tagged by `act`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "act", rename_all = "snake_case")]
pub enum ActionDesc {
    /// Emit a message.
    Print {
        /// The message to emit.
        message: String,
    },
    /// Replace a region's image handle.
    SetImage {
        /// The region whose image changes.
        region: String,
        /// The new image handle.
        image: String,
    },
    /// Remove a region's image handle.
    ClearImage {
        /// The region whose image is removed.
        region: String,
    },
    /// Move the owning interactor to a new origin.
    MoveTo {
        /// The new origin's x coordinate.
        x: f64,
        /// The new origin's y coordinate.
        y: f64,
    },
}

fn kind_from_name<'de, D>(deserializer: D) -> Result<EventKind, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    Ok(EventKind::from_name(&name))
}

/// Error returned by [`parse`] for malformed or structurally invalid JSON.
#[derive(Debug)]
pub struct ParseError(serde_json::Error);

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid machine description: {}", self.0)
    }
}

impl core::error::Error for ParseError {}

/// Parse a JSON machine description.
///
/// Structure is checked here; names are resolved later by
/// [`MachineDesc::build`].
pub fn parse(json: &str) -> Result<MachineDesc, ParseError> {
    serde_json::from_str(json).map_err(ParseError)
}

/// Error returned when a parsed description cannot be built into a machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// The description has no states.
    NoStates,
    /// Fatal configuration problems were found; the details went to the
    /// issue sink.
    Config {
        /// How many issues were reported.
        issues: usize,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoStates => f.write_str("machine description has no states"),
            Self::Config { issues } => {
                write!(f, "machine description has {issues} configuration problem(s)")
            }
        }
    }
}

impl core::error::Error for BuildError {}

impl MachineDesc {
    /// Build a machine of [`RectRegion`]s from this description.
    ///
    /// Every configuration problem is reported to `issues`; if any was
    /// found, no machine is produced.
    pub fn build(self, issues: &mut impl IssueSink) -> Result<Machine<RectRegion>, BuildError> {
        self.build_with(
            |desc| {
                let mut region = RectRegion::new(desc.name.clone(), desc.frame());
                region.image = desc.image.clone();
                region
            },
            issues,
        )
    }

    /// Build a machine from this description, materializing each region
    /// through `make_region`.
    ///
    /// Use this when the host has its own region type (custom hit testing,
    /// richer drawing state). The factory receives each [`RegionDesc`] in
    /// draw order.
    pub fn build_with<R, F>(
        self,
        mut make_region: F,
        issues: &mut impl IssueSink,
    ) -> Result<Machine<R>, BuildError>
    where
        R: Region,
        F: FnMut(&RegionDesc) -> R,
    {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut regions = RegionSet::new();
        for desc in &self.regions {
            regions.push(make_region(desc));
        }

        let mut machine = Machine::new(regions);
        let mut reported = 0_usize;

        // First pass: create every state so targets can resolve forward.
        let mut by_name: HashMap<&str, StateId> = HashMap::new();
        for desc in &self.states {
            let id = machine.add_state(desc.name.clone());
            match by_name.entry(desc.name.as_str()) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(id);
                }
                hashbrown::hash_map::Entry::Occupied(_) => {
                    issues.report(ConfigIssue::DuplicateState {
                        name: desc.name.clone(),
                    });
                    reported += 1;
                }
            }
        }

        if let Some(start) = &self.start {
            match by_name.get(start.as_str()) {
                Some(&id) => machine.set_start(id),
                None => {
                    issues.report(ConfigIssue::UnknownStart {
                        start: start.clone(),
                    });
                    reported += 1;
                }
            }
        }

        // Second pass: bind each transition's pattern, target, and actions.
        for (index, desc) in self.states.iter().enumerate() {
            let from = StateId(index as u32);
            for t in &desc.transitions {
                let pattern = EventPattern::new(t.evt_type, t.region.clone());
                let on = match pattern.bind(machine.regions()) {
                    Ok(bound) => bound,
                    Err(err) => {
                        issues.report(ConfigIssue::UnboundRegion {
                            state: desc.name.clone(),
                            kind: err.kind,
                            region: err.region,
                        });
                        reported += 1;
                        continue;
                    }
                };
                let Some(&to) = by_name.get(t.target.as_str()) else {
                    issues.report(ConfigIssue::UnknownTarget {
                        state: desc.name.clone(),
                        target: t.target.clone(),
                    });
                    reported += 1;
                    continue;
                };
                let mut actions = Vec::with_capacity(t.actions.len());
                let mut broken = false;
                for action in &t.actions {
                    match bind_action(action, machine.regions()) {
                        Ok(bound) => actions.push(bound),
                        Err(region) => {
                            issues.report(ConfigIssue::UnknownActionRegion {
                                state: desc.name.clone(),
                                region,
                            });
                            reported += 1;
                            broken = true;
                        }
                    }
                }
                if broken {
                    continue;
                }
                machine.add_transition(from, on, to, actions);
            }
        }

        if reported > 0 {
            return Err(BuildError::Config { issues: reported });
        }
        Ok(machine)
    }
}

fn bind_action<R: Region>(
    desc: &ActionDesc,
    regions: &RegionSet<R>,
) -> Result<Action, String> {
    match desc {
        ActionDesc::Print { message } => Ok(Action::Print(message.clone())),
        ActionDesc::SetImage { region, image } => regions
            .find_named(region)
            .map(|id| Action::SetImage {
                region: id,
                image: image.clone(),
            })
            .ok_or_else(|| region.clone()),
        ActionDesc::ClearImage { region } => regions
            .find_named(region)
            .map(|id| Action::ClearImage { region: id })
            .ok_or_else(|| region.clone()),
        ActionDesc::MoveTo { x, y } => Ok(Action::MoveTo(Point::new(*x, *y))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const TWO_STATE: &str = r#"{
        "regions": [
            {"name": "button", "x": 0, "y": 0, "width": 20, "height": 10}
        ],
        "states": [
            {"name": "idle", "transitions": [
                {"evtType": "press", "region": "button", "target": "armed"}
            ]},
            {"name": "armed", "transitions": [
                {"evtType": "release", "region": "button", "target": "idle",
                 "actions": [{"act": "print", "message": "clicked"}]},
                {"evtType": "release_none", "region": "", "target": "idle"}
            ]}
        ]
    }"#;

    #[test]
    fn parses_and_builds_a_two_state_machine() {
        let desc = parse(TWO_STATE).unwrap();
        assert_eq!(desc.states.len(), 2);
        let mut issues: Vec<ConfigIssue> = Vec::new();
        let machine = desc.build(&mut issues).unwrap();
        assert!(issues.is_empty());
        assert_eq!(machine.current_name(), Some("idle"));
        assert_eq!(machine.regions().len(), 1);
    }

    #[test]
    fn unknown_evt_type_coerces_to_nevermatch() {
        let json = r#"{
            "regions": [{"name": "r", "width": 5, "height": 5}],
            "states": [{"name": "s", "transitions": [
                {"evtType": "triple_click", "region": "r", "target": "s"}
            ]}]
        }"#;
        let desc = parse(json).unwrap();
        assert_eq!(desc.states[0].transitions[0].evt_type, EventKind::NeverMatch);
        // It still builds: the transition simply never fires.
        let mut issues: Vec<ConfigIssue> = Vec::new();
        let machine = desc.build(&mut issues).unwrap();
        assert_eq!(machine.states()[0].transitions().len(), 1);
    }

    #[test]
    fn missing_region_field_is_a_hard_parse_error() {
        let json = r#"{
            "states": [{"name": "s", "transitions": [
                {"evtType": "press", "target": "s"}
            ]}]
        }"#;
        assert!(parse(json).is_err());
    }

    #[test]
    fn non_string_region_field_is_a_hard_parse_error() {
        let json = r#"{
            "states": [{"name": "s", "transitions": [
                {"evtType": "press", "region": 3, "target": "s"}
            ]}]
        }"#;
        assert!(parse(json).is_err());
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let json = r#"{
            "schema": 2,
            "states": [{"name": "s", "transitions": [], "color": "red"}]
        }"#;
        let desc = parse(json).unwrap();
        assert_eq!(desc.states.len(), 1);
    }

    #[test]
    fn unbound_region_is_reported_and_fails_the_build() {
        let json = r#"{
            "states": [{"name": "s", "transitions": [
                {"evtType": "press", "region": "ghost", "target": "s"}
            ]}]
        }"#;
        let mut issues: Vec<ConfigIssue> = Vec::new();
        let err = parse(json).unwrap().build(&mut issues).unwrap_err();
        assert_eq!(err, BuildError::Config { issues: 1 });
        assert_eq!(
            issues,
            vec![ConfigIssue::UnboundRegion {
                state: "s".into(),
                kind: EventKind::Press,
                region: "ghost".into(),
            }]
        );
    }

    #[test]
    fn nevermatch_with_unknown_region_builds_silently() {
        let json = r#"{
            "states": [{"name": "s", "transitions": [
                {"evtType": "nevermatch", "region": "ghost", "target": "s"}
            ]}]
        }"#;
        let mut issues: Vec<ConfigIssue> = Vec::new();
        let machine = parse(json).unwrap().build(&mut issues).unwrap();
        assert!(issues.is_empty());
        assert_eq!(machine.states()[0].transitions().len(), 1);
    }

    #[test]
    fn unknown_target_state_is_reported() {
        let json = r#"{
            "regions": [{"name": "r"}],
            "states": [{"name": "s", "transitions": [
                {"evtType": "press", "region": "r", "target": "gone"}
            ]}]
        }"#;
        let mut issues: Vec<ConfigIssue> = Vec::new();
        assert!(parse(json).unwrap().build(&mut issues).is_err());
        assert_eq!(
            issues,
            vec![ConfigIssue::UnknownTarget {
                state: "s".into(),
                target: "gone".into(),
            }]
        );
    }

    #[test]
    fn unknown_start_state_is_reported() {
        let json = r#"{"start": "missing", "states": [{"name": "s"}]}"#;
        let mut issues: Vec<ConfigIssue> = Vec::new();
        assert!(parse(json).unwrap().build(&mut issues).is_err());
        assert_eq!(
            issues,
            vec![ConfigIssue::UnknownStart {
                start: "missing".into(),
            }]
        );
    }

    #[test]
    fn duplicate_state_names_are_reported() {
        let json = r#"{"states": [{"name": "s"}, {"name": "s"}]}"#;
        let mut issues: Vec<ConfigIssue> = Vec::new();
        assert!(parse(json).unwrap().build(&mut issues).is_err());
        assert_eq!(issues, vec![ConfigIssue::DuplicateState { name: "s".into() }]);
    }

    #[test]
    fn empty_state_list_is_rejected() {
        let mut issues: Vec<ConfigIssue> = Vec::new();
        let err = parse(r#"{"states": []}"#)
            .unwrap()
            .build(&mut issues)
            .unwrap_err();
        assert_eq!(err, BuildError::NoStates);
    }

    #[test]
    fn multiple_issues_are_all_reported() {
        let json = r#"{
            "start": "missing",
            "states": [{"name": "s", "transitions": [
                {"evtType": "press", "region": "ghost", "target": "s"},
                {"evtType": "release", "region": "ghost2", "target": "gone"}
            ]}]
        }"#;
        let mut issues: Vec<ConfigIssue> = Vec::new();
        let err = parse(json).unwrap().build(&mut issues).unwrap_err();
        assert_eq!(err, BuildError::Config { issues: 3 });
        assert_eq!(issues.len(), 3);
    }

    #[test]
    fn action_with_unknown_region_is_reported() {
        let json = r#"{
            "regions": [{"name": "r"}],
            "states": [{"name": "s", "transitions": [
                {"evtType": "press", "region": "r", "target": "s",
                 "actions": [{"act": "set_image", "region": "ghost", "image": "x.png"}]}
            ]}]
        }"#;
        let mut issues: Vec<ConfigIssue> = Vec::new();
        assert!(parse(json).unwrap().build(&mut issues).is_err());
        assert_eq!(
            issues,
            vec![ConfigIssue::UnknownActionRegion {
                state: "s".into(),
                region: "ghost".into(),
            }]
        );
    }

    #[test]
    fn start_field_selects_the_initial_state() {
        let json = r#"{
            "start": "b",
            "states": [{"name": "a"}, {"name": "b"}]
        }"#;
        let mut issues: Vec<ConfigIssue> = Vec::new();
        let machine = parse(json).unwrap().build(&mut issues).unwrap();
        assert_eq!(machine.current_name(), Some("b"));
    }

    #[test]
    fn region_desc_frame_is_origin_plus_size() {
        let desc = RegionDesc {
            name: "r".into(),
            x: 2.0,
            y: 3.0,
            width: 10.0,
            height: 20.0,
            image: None,
        };
        assert_eq!(desc.frame(), Rect::new(2.0, 3.0, 12.0, 23.0));
    }
}
