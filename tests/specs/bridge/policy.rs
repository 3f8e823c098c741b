//! Access and filter command specs on a system without policy control

use crate::prelude::*;

#[test]
fn access_status_reports_not_granted() {
    let temp = Project::empty();
    temp.dnd()
        .args(&["access", "status"])
        .passes()
        .stdout_eq("not granted\npolicy control is not available on this system\n");
}

#[test]
fn access_request_does_not_claim_settings_opened() {
    let temp = Project::empty();
    let run = temp
        .dnd()
        .args(&["-o", "json", "access", "request"])
        .passes();
    assert_eq!(
        run.json(),
        serde_json::json!({ "granted": false, "supported": false, "settings_opened": false })
    );
}

#[test]
fn filter_get_is_unsupported() {
    let temp = Project::empty();
    temp.dnd()
        .args(&["filter", "get"])
        .passes()
        .stdout_eq("unsupported\n");
}

#[test]
fn filter_set_changes_nothing() {
    let temp = Project::empty();
    temp.dnd()
        .args(&["filter", "set", "priority"])
        .passes()
        .stdout_eq("policy control is not available on this system; nothing changed\n");
}

#[test]
fn filter_get_twice_agrees() {
    let temp = Project::empty();
    let first = temp.dnd().args(&["-o", "json", "filter", "get"]).passes().json();
    let second = temp.dnd().args(&["-o", "json", "filter", "get"]).passes().json();
    assert_eq!(first, second);
}
