// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// App namespace used when `DND_APP_ID` is unset
pub const DEFAULT_APP_ID: &str = "focus_bridge";

/// Session flag file inside the state directory
pub const SESSION_FILE: &str = "session.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvError {
    #[error("could not determine state directory (set DND_STATE_DIR or HOME)")]
    NoStateDir,
    #[error("unknown adapter '{0}': expected auto, gnome or noop")]
    UnknownAdapter(String),
}

// --- State directory ---

/// Resolve state directory: DND_STATE_DIR > XDG_STATE_HOME/dnd > ~/.local/state/dnd
pub fn state_dir() -> Result<PathBuf, EnvError> {
    if let Ok(dir) = std::env::var("DND_STATE_DIR") {
        return Ok(PathBuf::from(dir));
    }
    if let Ok(xdg) = std::env::var("XDG_STATE_HOME") {
        return Ok(PathBuf::from(xdg).join("dnd"));
    }
    let home = dirs::home_dir().ok_or(EnvError::NoStateDir)?;
    Ok(home.join(".local/state/dnd"))
}

pub fn session_file() -> Result<PathBuf, EnvError> {
    Ok(state_dir()?.join(SESSION_FILE))
}

// --- App identity ---

pub fn app_id() -> String {
    std::env::var("DND_APP_ID")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_APP_ID.to_string())
}

// --- Adapter selection ---

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdapterKind {
    /// GNOME when `gsettings` answers, otherwise no-op
    #[default]
    Auto,
    Gnome,
    NoOp,
}

impl FromStr for AdapterKind {
    type Err = EnvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(AdapterKind::Auto),
            "gnome" => Ok(AdapterKind::Gnome),
            "noop" | "none" => Ok(AdapterKind::NoOp),
            other => Err(EnvError::UnknownAdapter(other.to_string())),
        }
    }
}

pub fn adapter() -> Result<AdapterKind, EnvError> {
    match std::env::var("DND_ADAPTER") {
        Ok(value) => value.parse(),
        Err(_) => Ok(AdapterKind::default()),
    }
}

// --- Logging ---

pub fn log_file() -> Option<PathBuf> {
    std::env::var("DND_LOG_FILE")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
