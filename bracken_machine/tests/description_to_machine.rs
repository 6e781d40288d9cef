// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `bracken_machine` crate.
//!
//! These exercise the full path from a JSON description to a running
//! machine: parsing, name resolution, pattern matching during dispatch, and
//! action delivery to an effect sink.

use bracken_events::PointerEvent;
use bracken_machine::{Action, BuildError, ConfigIssue, parse};

/// A push button: pressing arms it, releasing inside fires it, releasing
/// outside (or dragging off) disarms it.
const BUTTON: &str = r#"{
    "regions": [
        {"name": "face", "x": 0, "y": 0, "width": 40, "height": 16, "image": "up.png"}
    ],
    "start": "idle",
    "states": [
        {"name": "idle", "transitions": [
            {"evtType": "press", "region": "face", "target": "armed",
             "actions": [{"act": "set_image", "region": "face", "image": "down.png"}]}
        ]},
        {"name": "armed", "transitions": [
            {"evtType": "release", "region": "face", "target": "idle",
             "actions": [
                {"act": "print", "message": "clicked"},
                {"act": "set_image", "region": "face", "image": "up.png"}
             ]},
            {"evtType": "exit", "region": "face", "target": "idle",
             "actions": [{"act": "set_image", "region": "face", "image": "up.png"}]},
            {"evtType": "release_none", "region": "", "target": "idle"}
        ]}
    ]
}"#;

#[test]
fn button_press_release_cycle_fires_actions() {
    let mut issues: Vec<ConfigIssue> = Vec::new();
    let mut machine = parse(BUTTON).unwrap().build(&mut issues).unwrap();
    assert!(issues.is_empty());

    let face = machine.regions().find_named("face").unwrap();
    let mut performed: Vec<Action> = Vec::new();

    assert!(machine.act_on(PointerEvent::Press(face), &mut performed));
    assert_eq!(machine.current_name(), Some("armed"));
    assert_eq!(
        performed,
        vec![Action::SetImage {
            region: face,
            image: "down.png".into(),
        }]
    );

    performed.clear();
    assert!(machine.act_on(PointerEvent::Release(face), &mut performed));
    assert_eq!(machine.current_name(), Some("idle"));
    assert_eq!(performed.len(), 2);
    assert_eq!(performed[0], Action::Print("clicked".into()));
}

#[test]
fn dragging_off_the_button_disarms_it() {
    let mut issues: Vec<ConfigIssue> = Vec::new();
    let mut machine = parse(BUTTON).unwrap().build(&mut issues).unwrap();
    let face = machine.regions().find_named("face").unwrap();

    machine.act_on(PointerEvent::Press(face), &mut ());
    assert_eq!(machine.current_name(), Some("armed"));

    // The pointer leaves the face while still held down.
    machine.act_on(PointerEvent::Exit(face), &mut ());
    assert_eq!(machine.current_name(), Some("idle"));

    // A later release over nothing finds no matching transition in idle.
    assert!(!machine.act_on(PointerEvent::ReleaseNone, &mut ()));
    assert_eq!(machine.current_name(), Some("idle"));
}

#[test]
fn release_over_nothing_disarms_via_release_none() {
    let mut issues: Vec<ConfigIssue> = Vec::new();
    let mut machine = parse(BUTTON).unwrap().build(&mut issues).unwrap();
    let face = machine.regions().find_named("face").unwrap();

    machine.act_on(PointerEvent::Press(face), &mut ());
    let mut performed: Vec<Action> = Vec::new();
    assert!(machine.act_on(PointerEvent::ReleaseNone, &mut performed));
    assert_eq!(machine.current_name(), Some("idle"));
    // The release_none branch performs nothing.
    assert!(performed.is_empty());
}

#[test]
fn events_with_no_matching_transition_are_ignored() {
    let mut issues: Vec<ConfigIssue> = Vec::new();
    let mut machine = parse(BUTTON).unwrap().build(&mut issues).unwrap();
    let face = machine.regions().find_named("face").unwrap();

    // idle has no enter/move transitions; the machine stays put.
    assert!(!machine.act_on(PointerEvent::Enter(face), &mut ()));
    assert!(!machine.act_on(PointerEvent::MoveInside(face), &mut ()));
    assert_eq!(machine.current_name(), Some("idle"));
}

#[test]
fn broken_descriptions_report_and_refuse() {
    let json = r#"{
        "regions": [{"name": "face", "width": 10, "height": 10}],
        "states": [
            {"name": "idle", "transitions": [
                {"evtType": "press", "region": "fae", "target": "idle"}
            ]}
        ]
    }"#;
    let mut issues: Vec<ConfigIssue> = Vec::new();
    let err = parse(json).unwrap().build(&mut issues).unwrap_err();
    assert_eq!(err, BuildError::Config { issues: 1 });
    assert!(matches!(
        &issues[0],
        ConfigIssue::UnboundRegion { region, .. } if region == "fae"
    ));
}

#[test]
fn wildcard_transitions_catch_everything() {
    let json = r#"{
        "regions": [{"name": "pad", "width": 100, "height": 100}],
        "states": [
            {"name": "waiting", "transitions": [
                {"evtType": "any", "region": "*", "target": "seen",
                 "actions": [{"act": "print", "message": "woke"}]}
            ]},
            {"name": "seen"}
        ]
    }"#;
    let mut issues: Vec<ConfigIssue> = Vec::new();
    let mut machine = parse(json).unwrap().build(&mut issues).unwrap();

    let mut performed: Vec<Action> = Vec::new();
    // Even a region-less event is caught by the wildcard.
    assert!(machine.act_on(PointerEvent::ReleaseNone, &mut performed));
    assert_eq!(machine.current_name(), Some("seen"));
    assert_eq!(performed, vec![Action::Print("woke".into())]);
}
