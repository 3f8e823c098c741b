// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dnd filter` - Interruption filter

use std::io::Write;

use anyhow::Result;
use clap::{Args, Subcommand};
use dnd_adapters::PolicyPort;
use dnd_bridge::PolicyChannel;
use dnd_core::{FilterLevel, Method, MethodCall, FILTER_ARG};
use serde::Serialize;
use serde_json::json;

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct FilterArgs {
    #[command(subcommand)]
    pub command: FilterCommand,
}

#[derive(Subcommand)]
pub enum FilterCommand {
    /// Show the current interruption filter
    Get,
    /// Change the interruption filter
    Set {
        /// Level: all, priority, none, alarms, or a raw integer
        level: FilterLevel,
    },
}

#[derive(Debug, Serialize)]
pub(crate) struct FilterReport {
    /// Raw level; `None` when the system has no policy control
    pub filter: Option<i32>,
    pub name: Option<String>,
    /// Whether a `set` reached the system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied: Option<bool>,
}

impl FilterReport {
    fn level(level: Option<FilterLevel>) -> Self {
        Self {
            filter: level.map(FilterLevel::as_i32),
            name: level.map(FilterLevel::name),
            applied: None,
        }
    }
}

pub async fn handle<P: PolicyPort>(
    command: FilterCommand,
    channel: &PolicyChannel<P>,
    format: OutputFormat,
) -> Result<()> {
    let report = match command {
        FilterCommand::Get => {
            let method = Method::GetInterruptionFilter.name();
            let response = channel.handle(&MethodCall::without_args(method)).await;
            let value = output::into_result(method, response)?;
            let level = value
                .as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .map(FilterLevel::from);
            FilterReport::level(level)
        }
        FilterCommand::Set { level } => {
            let method = Method::SetInterruptionFilter.name();
            let call = MethodCall::new(method, json!({ FILTER_ARG: level.as_i32() }));
            let response = channel.handle(&call).await;
            output::into_result(method, response)?;
            FilterReport {
                applied: Some(channel.supports_policy_control()),
                ..FilterReport::level(Some(level))
            }
        }
    };
    format_filter(&mut std::io::stdout(), &report, format)
}

pub(crate) fn format_filter(
    out: &mut impl Write,
    report: &FilterReport,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => match (report.applied, report.filter, &report.name) {
            (Some(false), _, _) => {
                writeln!(out, "policy control is not available on this system; nothing changed")?
            }
            (Some(true), Some(filter), Some(name)) => {
                writeln!(out, "filter set to {} ({})", name, filter)?
            }
            (None, Some(filter), Some(name)) => writeln!(out, "{} ({})", name, filter)?,
            _ => writeln!(out, "unsupported")?,
        },
        OutputFormat::Json => output::write_json(out, report)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
