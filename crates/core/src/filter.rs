// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! System interruption filter levels.
//!
//! Values follow Android's `NotificationManager.INTERRUPTION_FILTER_*`
//! constants. Platforms with a different vocabulary map onto these; any
//! integer outside the known set is preserved as [`FilterLevel::Other`] so it
//! can be handed back to the OS untouched.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Global interruption filter level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum FilterLevel {
    /// The OS could not report a filter (`0`).
    Unknown,
    /// Normal interruptions, no suppression (`1`).
    All,
    /// Priority interruptions only (`2`).
    Priority,
    /// Total silence (`3`).
    None,
    /// Alarms only (`4`).
    Alarms,
    /// A platform value this crate has no name for.
    Other(i32),
}

impl FilterLevel {
    pub const UNKNOWN: i32 = 0;
    pub const ALL: i32 = 1;
    pub const PRIORITY: i32 = 2;
    pub const NONE: i32 = 3;
    pub const ALARMS: i32 = 4;

    pub fn as_i32(self) -> i32 {
        match self {
            FilterLevel::Unknown => Self::UNKNOWN,
            FilterLevel::All => Self::ALL,
            FilterLevel::Priority => Self::PRIORITY,
            FilterLevel::None => Self::NONE,
            FilterLevel::Alarms => Self::ALARMS,
            FilterLevel::Other(v) => v,
        }
    }

    /// Short lowercase name, or the raw integer for [`FilterLevel::Other`].
    pub fn name(self) -> String {
        match self {
            FilterLevel::Unknown => "unknown".to_string(),
            FilterLevel::All => "all".to_string(),
            FilterLevel::Priority => "priority".to_string(),
            FilterLevel::None => "none".to_string(),
            FilterLevel::Alarms => "alarms".to_string(),
            FilterLevel::Other(v) => v.to_string(),
        }
    }
}

impl From<i32> for FilterLevel {
    fn from(value: i32) -> Self {
        match value {
            Self::UNKNOWN => FilterLevel::Unknown,
            Self::ALL => FilterLevel::All,
            Self::PRIORITY => FilterLevel::Priority,
            Self::NONE => FilterLevel::None,
            Self::ALARMS => FilterLevel::Alarms,
            other => FilterLevel::Other(other),
        }
    }
}

impl From<FilterLevel> for i32 {
    fn from(level: FilterLevel) -> Self {
        level.as_i32()
    }
}

impl fmt::Display for FilterLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid filter level '{0}': expected an integer or one of all, priority, none, alarms")]
pub struct ParseFilterError(pub String);

impl FromStr for FilterLevel {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i32>() {
            return Ok(FilterLevel::from(value));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "unknown" => Ok(FilterLevel::Unknown),
            "all" => Ok(FilterLevel::All),
            "priority" => Ok(FilterLevel::Priority),
            "none" => Ok(FilterLevel::None),
            "alarms" => Ok(FilterLevel::Alarms),
            _ => Err(ParseFilterError(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
