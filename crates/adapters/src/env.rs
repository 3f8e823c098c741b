// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the adapters crate.

use std::time::Duration;

use crate::subprocess::GSETTINGS_TIMEOUT;

fn parse_duration_ms(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// gsettings subprocess timeout (default: 5000ms).
pub fn gsettings_timeout() -> Duration {
    parse_duration_ms("DND_GSETTINGS_TIMEOUT_MS").unwrap_or(GSETTINGS_TIMEOUT)
}
