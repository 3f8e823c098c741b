// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake policy adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{PolicyPort, PortError};
use async_trait::async_trait;
use dnd_core::FilterLevel;
use parking_lot::Mutex;
use std::sync::Arc;

/// Recorded policy call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyCall {
    HasAuthority,
    OpenAuthoritySettings,
    CurrentFilter,
    SetFilter { level: FilterLevel },
}

struct FakePolicyState {
    supported: bool,
    authority: bool,
    filter: FilterLevel,
    security_rejection: Option<String>,
    unavailable: Option<String>,
    grant_when_user_returns: bool,
    settings_open: bool,
    calls: Vec<PolicyCall>,
}

/// Fake policy adapter with an in-memory OS.
///
/// Starts supported, without authority, at [`FilterLevel::All`].
#[derive(Clone)]
pub struct FakePolicyAdapter {
    inner: Arc<Mutex<FakePolicyState>>,
}

impl Default for FakePolicyAdapter {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakePolicyState {
                supported: true,
                authority: false,
                filter: FilterLevel::All,
                security_rejection: None,
                unavailable: None,
                grant_when_user_returns: false,
                settings_open: false,
                calls: Vec::new(),
            })),
        }
    }
}

impl FakePolicyAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fake an OS that predates policy control.
    pub fn unsupported() -> Self {
        let fake = Self::default();
        fake.set_supported(false);
        fake
    }

    /// Fake a supported OS where authority is already granted.
    pub fn granted() -> Self {
        let fake = Self::default();
        fake.set_authority(true);
        fake
    }

    pub fn set_supported(&self, supported: bool) {
        self.inner.lock().supported = supported;
    }

    pub fn set_authority(&self, granted: bool) {
        self.inner.lock().authority = granted;
    }

    /// Overwrite the OS filter without recording a call.
    pub fn set_os_filter(&self, level: FilterLevel) {
        self.inner.lock().filter = level;
    }

    /// The OS filter as it stands, without recording a call.
    pub fn os_filter(&self) -> FilterLevel {
        self.inner.lock().filter
    }

    /// Make the next filter mutations fail at the security layer.
    pub fn reject_with_security(&self, message: impl Into<String>) {
        self.inner.lock().security_rejection = Some(message.into());
    }

    /// Make every OS call fail as unreachable.
    pub fn set_unavailable(&self, message: impl Into<String>) {
        self.inner.lock().unavailable = Some(message.into());
    }

    /// Have the user grant authority once they come back from settings.
    pub fn grant_when_user_returns(&self) {
        self.inner.lock().grant_when_user_returns = true;
    }

    /// Simulate the user leaving the settings screen.
    pub fn user_returns_from_settings(&self) {
        let mut inner = self.inner.lock();
        if inner.settings_open && inner.grant_when_user_returns {
            inner.authority = true;
        }
        inner.settings_open = false;
    }

    pub fn settings_open(&self) -> bool {
        self.inner.lock().settings_open
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<PolicyCall> {
        self.inner.lock().calls.clone()
    }

    /// Number of filter mutations that reached the OS
    pub fn set_filter_calls(&self) -> usize {
        self.inner
            .lock()
            .calls
            .iter()
            .filter(|c| matches!(c, PolicyCall::SetFilter { .. }))
            .count()
    }
}

#[async_trait]
impl PolicyPort for FakePolicyAdapter {
    fn supports_policy_control(&self) -> bool {
        self.inner.lock().supported
    }

    async fn has_authority(&self) -> Result<bool, PortError> {
        let mut inner = self.inner.lock();
        inner.calls.push(PolicyCall::HasAuthority);
        if let Some(ref msg) = inner.unavailable {
            return Err(PortError::Unavailable(msg.clone()));
        }
        Ok(inner.authority)
    }

    async fn open_authority_settings(&self) -> Result<(), PortError> {
        let mut inner = self.inner.lock();
        inner.calls.push(PolicyCall::OpenAuthoritySettings);
        if let Some(ref msg) = inner.unavailable {
            return Err(PortError::Unavailable(msg.clone()));
        }
        inner.settings_open = true;
        Ok(())
    }

    async fn current_filter(&self) -> Result<FilterLevel, PortError> {
        let mut inner = self.inner.lock();
        inner.calls.push(PolicyCall::CurrentFilter);
        if let Some(ref msg) = inner.unavailable {
            return Err(PortError::Unavailable(msg.clone()));
        }
        Ok(inner.filter)
    }

    async fn set_filter(&self, level: FilterLevel) -> Result<(), PortError> {
        let mut inner = self.inner.lock();
        inner.calls.push(PolicyCall::SetFilter { level });
        if let Some(ref msg) = inner.unavailable {
            return Err(PortError::Unavailable(msg.clone()));
        }
        if let Some(ref msg) = inner.security_rejection {
            return Err(PortError::SecurityRejected(msg.clone()));
        }
        // The real OS ignores mutations from apps without authority.
        if inner.authority {
            inner.filter = level;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
