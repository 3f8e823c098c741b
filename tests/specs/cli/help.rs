//! CLI help specs

use crate::prelude::*;

#[test]
fn no_subcommand_prints_help() {
    let temp = Project::empty();
    temp.dnd()
        .passes()
        .stdout_has("Usage: dnd")
        .stdout_has("filter")
        .stdout_has("session");
}

#[test]
fn filter_help_lists_levels() {
    let temp = Project::empty();
    temp.dnd()
        .args(&["filter", "set", "--help"])
        .passes()
        .stdout_has("all, priority, none, alarms");
}
