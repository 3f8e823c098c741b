// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification-policy adapters

mod android;
mod gnome;
mod noop;

pub use android::{
    AndroidPolicyAdapter, HostError, NotificationManagerHost,
    ACTION_NOTIFICATION_POLICY_ACCESS_SETTINGS, FLAG_ACTIVITY_NEW_TASK, MIN_POLICY_SDK,
};
pub use gnome::GnomePolicyAdapter;
pub use noop::NoOpPolicyAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakePolicyAdapter, PolicyCall};

use async_trait::async_trait;
use dnd_core::{FilterLevel, PolicyError};
use thiserror::Error;

/// Errors from policy port operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PortError {
    /// The OS rejected the call at its security layer.
    #[error("{0}")]
    SecurityRejected(String),
    /// The OS surface could not be reached at all.
    #[error("{0}")]
    Unavailable(String),
}

impl From<PortError> for PolicyError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::SecurityRejected(msg) => PolicyError::Security(msg),
            PortError::Unavailable(msg) => PolicyError::Unavailable(msg),
        }
    }
}

/// Port onto the OS-wide notification policy.
///
/// Implementations never cache: every call reflects the OS state at the
/// moment it is made.
#[async_trait]
pub trait PolicyPort: Clone + Send + Sync + 'static {
    /// Whether policy changes can be attempted on this OS at all.
    fn supports_policy_control(&self) -> bool;

    /// Whether the app currently holds policy-change authority.
    async fn has_authority(&self) -> Result<bool, PortError>;

    /// Open the OS screen where the user grants authority.
    ///
    /// Returns as soon as the launch has been handed off; it does not wait
    /// for the user. Callers learn the outcome by polling
    /// [`PolicyPort::has_authority`] later.
    async fn open_authority_settings(&self) -> Result<(), PortError>;

    /// Current global interruption filter.
    async fn current_filter(&self) -> Result<FilterLevel, PortError>;

    /// Replace the global interruption filter.
    async fn set_filter(&self, level: FilterLevel) -> Result<(), PortError>;
}
