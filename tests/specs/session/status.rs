//! Status overview specs

use crate::prelude::*;

#[test]
fn status_text_layout() {
    let temp = Project::empty();
    temp.dnd().args(&["status"]).passes().stdout_eq(
        "adapter:   noop\n\
         supported: no\n\
         access:    not granted\n\
         filter:    unsupported\n\
         session:   stopped\n",
    );
}

#[test]
fn status_json_reflects_session() {
    let temp = Project::empty();
    temp.dnd().args(&["session", "start"]).passes();
    let run = temp.dnd().args(&["-o", "json", "status"]).passes();
    assert_eq!(
        run.json(),
        serde_json::json!({
            "adapter": "noop",
            "supported": false,
            "access": false,
            "filter": null,
            "filter_name": null,
            "session_running": true,
        })
    );
}
