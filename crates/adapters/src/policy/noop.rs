// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op policy adapter.

use super::{PolicyPort, PortError};
use async_trait::async_trait;
use dnd_core::FilterLevel;

/// Policy adapter for targets with no controllable notification policy.
///
/// Reports the capability gate as closed, so callers never reach the
/// remaining methods through the channel. Called directly they answer with
/// the same benign values the channel would.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpPolicyAdapter;

impl NoOpPolicyAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PolicyPort for NoOpPolicyAdapter {
    fn supports_policy_control(&self) -> bool {
        false
    }

    async fn has_authority(&self) -> Result<bool, PortError> {
        Ok(false)
    }

    async fn open_authority_settings(&self) -> Result<(), PortError> {
        Ok(())
    }

    async fn current_filter(&self) -> Result<FilterLevel, PortError> {
        Ok(FilterLevel::Unknown)
    }

    async fn set_filter(&self, _level: FilterLevel) -> Result<(), PortError> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
