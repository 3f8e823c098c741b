//! CLI error handling specs
//!
//! Verify error messages and exit codes for bad input and configuration.

use crate::prelude::*;

#[test]
fn unknown_filter_name_is_a_usage_error() {
    let temp = Project::empty();
    temp.dnd()
        .args(&["filter", "set", "silent"])
        .exits_with(2)
        .stderr_has("invalid filter level 'silent'");
}

#[test]
fn unknown_adapter_is_reported() {
    let temp = Project::empty();
    temp.dnd()
        .env("DND_ADAPTER", "kde")
        .args(&["status"])
        .exits_with(1)
        .stderr_has("unknown adapter 'kde'");
}

#[test]
fn malformed_call_args_are_reported() {
    let temp = Project::empty();
    temp.dnd()
        .args(&["call", "setInterruptionFilter", "--args", "{filter"])
        .exits_with(1)
        .stderr_has("invalid --args JSON");
}

#[test]
fn corrupt_session_file_fails_status_read() {
    let temp = Project::empty();
    temp.file("session.json", "not json");
    temp.dnd()
        .args(&["session", "status"])
        .exits_with(1)
        .stderr_has("corrupt flag file");
}
