// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dnd session` - Session-active flag
//!
//! Stands in for the app's session layer, which owns this flag.

use std::io::Write;

use anyhow::Result;
use clap::{Args, Subcommand};
use dnd_adapters::SessionFlagStore;
use serde::Serialize;

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand)]
pub enum SessionCommand {
    /// Mark a focus session as running
    Start,
    /// Mark the focus session as finished
    Stop,
    /// Show whether a focus session is running
    Status,
}

#[derive(Debug, Serialize)]
pub(crate) struct SessionReport<'a> {
    pub key: &'a str,
    pub running: bool,
}

pub fn handle<S: SessionFlagStore>(
    command: SessionCommand,
    store: &S,
    key: &str,
    format: OutputFormat,
) -> Result<()> {
    let running = match command {
        SessionCommand::Start => {
            store.set(key, true)?;
            tracing::info!(key, "session started");
            true
        }
        SessionCommand::Stop => {
            store.set(key, false)?;
            tracing::info!(key, "session stopped");
            false
        }
        SessionCommand::Status => store.is_set(key)?,
    };
    format_session(
        &mut std::io::stdout(),
        &SessionReport { key, running },
        format,
    )
}

pub(crate) fn format_session(
    out: &mut impl Write,
    report: &SessionReport<'_>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let state = if report.running { "running" } else { "stopped" };
            writeln!(out, "session {}", state)?;
        }
        OutputFormat::Json => output::write_json(out, report)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
