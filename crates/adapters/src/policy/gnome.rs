// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! GNOME desktop policy adapter.
//!
//! GNOME exposes Do Not Disturb as the `show-banners` key of the
//! `org.gnome.desktop.notifications` schema. There is only an on/off switch,
//! so only `all` (banners on) and `none` (banners off) can be set and read
//! back. Other levels are refused rather than collapsed onto the switch.
//! Authority maps to the key being writable for this user (a locked-down
//! dconf profile makes it read-only).

use super::{PolicyPort, PortError};
use crate::subprocess::{run_with_timeout, spawn_detached};
use async_trait::async_trait;
use dnd_core::FilterLevel;
use std::time::Duration;
use tokio::process::Command;

pub const SCHEMA: &str = "org.gnome.desktop.notifications";
pub const KEY: &str = "show-banners";

/// Policy adapter driving `gsettings`
///
/// The capability gate is probed once by [`GnomePolicyAdapter::detect`] and
/// holds for the adapter's lifetime. Build a new adapter to re-probe; the
/// CLI does so on every invocation.
#[derive(Clone, Debug)]
pub struct GnomePolicyAdapter {
    program: String,
    settings_program: String,
    timeout: Duration,
    supported: bool,
}

impl GnomePolicyAdapter {
    /// Probe the desktop for a readable `show-banners` key.
    pub async fn detect() -> Self {
        Self::detect_with("gsettings", crate::env::gsettings_timeout()).await
    }

    pub async fn detect_with(program: impl Into<String>, timeout: Duration) -> Self {
        let mut adapter = Self {
            program: program.into(),
            settings_program: "gnome-control-center".to_string(),
            timeout,
            supported: false,
        };
        adapter.supported = match adapter.read_banners().await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(error = %e, "gsettings probe failed, policy control unavailable");
                false
            }
        };
        adapter
    }

    async fn gsettings(
        &self,
        args: &[&str],
        description: &str,
    ) -> Result<std::process::Output, PortError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        run_with_timeout(cmd, self.timeout, description)
            .await
            .map_err(PortError::Unavailable)
    }

    async fn read_bool(&self, verb: &str, description: &str) -> Result<bool, PortError> {
        let output = self.gsettings(&[verb, SCHEMA, KEY], description).await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PortError::Unavailable(format!(
                "{} failed: {}",
                description,
                stderr.trim()
            )));
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_bool(&stdout).ok_or_else(|| {
            PortError::Unavailable(format!(
                "{} returned unexpected output: {}",
                description,
                stdout.trim()
            ))
        })
    }

    async fn read_banners(&self) -> Result<bool, PortError> {
        self.read_bool("get", "gsettings get").await
    }
}

#[async_trait]
impl PolicyPort for GnomePolicyAdapter {
    fn supports_policy_control(&self) -> bool {
        self.supported
    }

    async fn has_authority(&self) -> Result<bool, PortError> {
        self.read_bool("writable", "gsettings writable").await
    }

    async fn open_authority_settings(&self) -> Result<(), PortError> {
        let mut cmd = Command::new(&self.settings_program);
        cmd.arg("notifications");
        spawn_detached(cmd, "gnome-control-center").map_err(PortError::Unavailable)
    }

    async fn current_filter(&self) -> Result<FilterLevel, PortError> {
        Ok(level_for_banners(self.read_banners().await?))
    }

    async fn set_filter(&self, level: FilterLevel) -> Result<(), PortError> {
        let banners = banners_for_level(level).ok_or_else(|| {
            PortError::SecurityRejected(format!(
                "filter level {} has no GNOME equivalent",
                level.name()
            ))
        })?;
        let value = if banners { "true" } else { "false" };
        let output = self
            .gsettings(&["set", SCHEMA, KEY, value], "gsettings set")
            .await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PortError::SecurityRejected(stderr.trim().to_string()));
        }
        Ok(())
    }
}

/// Parse gsettings' `true`/`false` output.
pub(crate) fn parse_bool(stdout: &str) -> Option<bool> {
    match stdout.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

pub(crate) fn level_for_banners(show_banners: bool) -> FilterLevel {
    if show_banners {
        FilterLevel::All
    } else {
        FilterLevel::None
    }
}

/// Only levels that read back unchanged are settable.
pub(crate) fn banners_for_level(level: FilterLevel) -> Option<bool> {
    match level {
        FilterLevel::All => Some(true),
        FilterLevel::None => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "gnome_tests.rs"]
mod tests;
