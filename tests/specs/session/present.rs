//! Presentation decision specs

use crate::prelude::*;

#[test]
fn idle_session_uses_default_presentation() {
    let temp = Project::empty();
    temp.dnd()
        .args(&["present", "--payload", "session_alert"])
        .passes()
        .stdout_eq("default\n");
}

#[test]
fn session_alert_during_session_is_sound_only() {
    let temp = Project::empty();
    temp.dnd().args(&["session", "start"]).passes();
    temp.dnd()
        .args(&["present", "--payload", "session_alert"])
        .passes()
        .stdout_eq("sound-only\n");
}

#[test]
fn other_notifications_during_session_are_suppressed() {
    let temp = Project::empty();
    temp.dnd().args(&["session", "start"]).passes();
    temp.dnd()
        .args(&["present", "--payload", "chat"])
        .passes()
        .stdout_eq("fully-suppressed\n");
    temp.dnd()
        .args(&["present"])
        .passes()
        .stdout_eq("fully-suppressed\n");
}

#[test]
fn unreadable_flag_file_falls_back_to_default() {
    let temp = Project::empty();
    temp.file("session.json", "{broken");
    temp.dnd()
        .args(&["present", "--payload", "chat"])
        .passes()
        .stdout_eq("default\n");
}

#[test]
fn present_does_not_write_the_flag() {
    let temp = Project::empty();
    temp.dnd().args(&["present"]).passes();
    assert!(!temp.session_file().exists());
}
