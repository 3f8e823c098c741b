//! Session flag specs

use crate::prelude::*;

#[test]
fn status_without_file_is_stopped() {
    let temp = Project::empty();
    temp.dnd()
        .args(&["session", "status"])
        .passes()
        .stdout_eq("session stopped\n");
    assert!(!temp.session_file().exists());
}

#[test]
fn start_then_status_is_running() {
    let temp = Project::empty();
    temp.dnd()
        .args(&["session", "start"])
        .passes()
        .stdout_eq("session running\n");
    temp.dnd()
        .args(&["session", "status"])
        .passes()
        .stdout_eq("session running\n");
}

#[test]
fn stop_clears_the_flag() {
    let temp = Project::empty();
    temp.dnd().args(&["session", "start"]).passes();
    temp.dnd().args(&["session", "stop"]).passes();
    temp.dnd()
        .args(&["session", "status"])
        .passes()
        .stdout_eq("session stopped\n");
}

#[test]
fn flag_is_namespaced_by_app_id() {
    let temp = Project::empty();
    temp.dnd()
        .env("DND_APP_ID", "timer")
        .args(&["session", "start"])
        .passes();

    let raw = std::fs::read_to_string(temp.session_file()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["timer.session_running"], true);

    // The default namespace is untouched.
    temp.dnd()
        .args(&["session", "status"])
        .passes()
        .stdout_eq("session stopped\n");
}

#[test]
fn json_status_names_the_key() {
    let temp = Project::empty();
    let run = temp
        .dnd()
        .args(&["-o", "json", "session", "status"])
        .passes();
    assert_eq!(
        run.json(),
        serde_json::json!({ "key": "focus_bridge.session_running", "running": false })
    );
}
