// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dnd access` - Notification-policy authority

use std::io::Write;

use anyhow::Result;
use clap::{Args, Subcommand};
use dnd_adapters::PolicyPort;
use dnd_bridge::PolicyChannel;
use dnd_core::{Method, MethodCall};
use serde::Serialize;

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct AccessArgs {
    #[command(subcommand)]
    pub command: AccessCommand,
}

#[derive(Subcommand)]
pub enum AccessCommand {
    /// Show whether policy access is granted
    Status,
    /// Open the system settings screen for granting access
    ///
    /// Prints the access state from before the screen opened. Run
    /// `dnd access status` after granting to see the new state.
    Request,
}

#[derive(Debug, Serialize)]
pub(crate) struct AccessReport {
    pub granted: bool,
    pub supported: bool,
    pub settings_opened: bool,
}

pub async fn handle<P: PolicyPort>(
    command: AccessCommand,
    channel: &PolicyChannel<P>,
    format: OutputFormat,
) -> Result<()> {
    let method = match command {
        AccessCommand::Status => Method::HasPolicyAccess,
        AccessCommand::Request => Method::RequestPolicyAccess,
    };
    let response = channel
        .handle(&MethodCall::without_args(method.name()))
        .await;
    let granted = output::into_result(method.name(), response)?
        .as_bool()
        .unwrap_or(false);

    let supported = channel.supports_policy_control();
    let report = AccessReport {
        granted,
        supported,
        settings_opened: supported && method == Method::RequestPolicyAccess,
    };
    format_access(&mut std::io::stdout(), &report, format)
}

pub(crate) fn format_access(
    out: &mut impl Write,
    report: &AccessReport,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if report.granted {
                writeln!(out, "granted")?;
            } else {
                writeln!(out, "not granted")?;
            }
            if !report.supported {
                writeln!(out, "policy control is not available on this system")?;
            } else if report.settings_opened && !report.granted {
                writeln!(
                    out,
                    "settings opened; run `dnd access status` after granting access"
                )?;
            }
        }
        OutputFormat::Json => output::write_json(out, report)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "access_tests.rs"]
mod tests;
