// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dnd status` - Overview of policy and session state

use std::io::Write;

use anyhow::Result;
use dnd_adapters::{PolicyPort, SessionFlagStore};
use dnd_bridge::{PolicyChannel, PresentationDecider};
use dnd_core::FilterLevel;
use serde::Serialize;

use crate::output::{self, yes_no, OutputFormat};

#[derive(Debug, Serialize)]
pub(crate) struct StatusReport {
    pub adapter: String,
    pub supported: bool,
    pub access: bool,
    pub filter: Option<i32>,
    pub filter_name: Option<String>,
    pub session_running: bool,
}

pub async fn handle<P: PolicyPort, S: SessionFlagStore>(
    adapter: &str,
    channel: &PolicyChannel<P>,
    decider: &PresentationDecider<S>,
    format: OutputFormat,
) -> Result<()> {
    let filter = channel.get_filter().await?;
    let report = StatusReport {
        adapter: adapter.to_string(),
        supported: channel.supports_policy_control(),
        access: channel.has_authority().await?,
        filter: filter.map(FilterLevel::as_i32),
        filter_name: filter.map(FilterLevel::name),
        session_running: decider.session_active(),
    };
    format_status(&mut std::io::stdout(), &report, format)
}

pub(crate) fn format_status(
    out: &mut impl Write,
    report: &StatusReport,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "adapter:   {}", report.adapter)?;
            writeln!(out, "supported: {}", yes_no(report.supported))?;
            let access = if report.access { "granted" } else { "not granted" };
            writeln!(out, "access:    {}", access)?;
            match (report.filter, &report.filter_name) {
                (Some(filter), Some(name)) => writeln!(out, "filter:    {} ({})", name, filter)?,
                _ => writeln!(out, "filter:    unsupported")?,
            }
            let session = if report.session_running {
                "running"
            } else {
                "stopped"
            };
            writeln!(out, "session:   {}", session)?;
        }
        OutputFormat::Json => output::write_json(out, report)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
