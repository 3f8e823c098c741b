// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dnd present` - Foreground presentation decision

use std::io::Write;

use anyhow::Result;
use clap::Args;
use dnd_adapters::SessionFlagStore;
use dnd_bridge::PresentationDecider;
use dnd_core::{NotificationPayload, Presentation, PresentationOptions};
use serde::Serialize;

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct PresentArgs {
    /// Payload tag of the incoming notification (e.g. session_alert)
    #[arg(long)]
    pub payload: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PresentReport {
    pub presentation: Presentation,
    pub session_running: bool,
    pub payload: Option<String>,
    /// `None` defers to the platform's own handling
    pub options: Option<PresentationOptions>,
}

pub fn handle<S: SessionFlagStore>(
    args: PresentArgs,
    decider: &PresentationDecider<S>,
    format: OutputFormat,
) -> Result<()> {
    let payload = match args.payload.as_deref() {
        Some(tag) => NotificationPayload::tagged(tag),
        None => NotificationPayload::default(),
    };
    let presentation = decider.decide(&payload);
    let report = PresentReport {
        presentation,
        // An active session never yields the default presentation.
        session_running: presentation != Presentation::Default,
        payload: args.payload,
        options: presentation.options(),
    };
    format_present(&mut std::io::stdout(), &report, format)
}

pub(crate) fn format_present(
    out: &mut impl Write,
    report: &PresentReport,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", report.presentation)?,
        OutputFormat::Json => output::write_json(out, report)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "present_tests.rs"]
mod tests;
