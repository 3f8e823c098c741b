//! Raw method-channel call specs
//!
//! With the noop adapter the system has no policy control, so every known
//! method answers benignly.

use crate::prelude::*;

#[test]
fn has_policy_access_is_false() {
    let temp = Project::empty();
    temp.dnd()
        .args(&["call", "hasPolicyAccess"])
        .passes()
        .stdout_eq("[false]\n");
}

#[test]
fn request_policy_access_is_false() {
    let temp = Project::empty();
    temp.dnd()
        .args(&["call", "requestPolicyAccess"])
        .passes()
        .stdout_eq("[false]\n");
}

#[test]
fn get_interruption_filter_is_null() {
    let temp = Project::empty();
    temp.dnd()
        .args(&["call", "getInterruptionFilter"])
        .passes()
        .stdout_eq("[null]\n");
}

#[test]
fn set_interruption_filter_is_a_noop_success() {
    let temp = Project::empty();
    temp.dnd()
        .args(&["call", "setInterruptionFilter", "--args", r#"{"filter": 3}"#])
        .passes()
        .stdout_eq("[null]\n");
}

#[test]
fn set_without_filter_still_succeeds_when_unsupported() {
    let temp = Project::empty();
    temp.dnd()
        .args(&["call", "setInterruptionFilter"])
        .passes()
        .stdout_eq("[null]\n");
}

#[test]
fn unknown_method_is_not_implemented() {
    let temp = Project::empty();
    temp.dnd()
        .args(&["call", "getVolume"])
        .exits_with(3)
        .stdout_eq("")
        .stderr_has("method not implemented: getVolume");
}

#[test]
fn json_output_labels_status() {
    let temp = Project::empty();
    let run = temp
        .dnd()
        .args(&["-o", "json", "call", "getInterruptionFilter"])
        .passes();
    let value = run.json();
    assert_eq!(value["status"], "success");
    assert_eq!(value["method"], "getInterruptionFilter");
    assert!(value["result"].is_null());
}
