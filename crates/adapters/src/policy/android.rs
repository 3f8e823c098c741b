// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Android notification-policy adapter.
//!
//! The adapter talks to `android.app.NotificationManager` through a
//! [`NotificationManagerHost`], which the embedding activity implements on
//! top of its JNI environment. Policy access exists from API 23
//! (Marshmallow); older devices report the gate as closed.
//!
//! Granting access happens in a system settings activity. It is started
//! with `FLAG_ACTIVITY_NEW_TASK` so it lives in its own task and does not
//! depend on the calling activity staying alive.

use super::{PolicyPort, PortError};
use async_trait::async_trait;
use dnd_core::FilterLevel;
use std::sync::Arc;
use thiserror::Error;

/// First SDK level with `NotificationManager` policy access (`Build.VERSION_CODES.M`).
pub const MIN_POLICY_SDK: u32 = 23;

/// `Settings.ACTION_NOTIFICATION_POLICY_ACCESS_SETTINGS`
pub const ACTION_NOTIFICATION_POLICY_ACCESS_SETTINGS: &str =
    "android.settings.NOTIFICATION_POLICY_ACCESS_SETTINGS";

/// `Intent.FLAG_ACTIVITY_NEW_TASK`
pub const FLAG_ACTIVITY_NEW_TASK: i32 = 0x1000_0000;

/// Errors surfaced by the host's Java side
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    /// `java.lang.SecurityException`, with its message when it had one.
    #[error("SecurityException: {}", .0.as_deref().unwrap_or("<no message>"))]
    Security(Option<String>),
    /// Any other failure crossing into the Java side.
    #[error("host call failed: {0}")]
    Call(String),
}

impl From<HostError> for PortError {
    fn from(err: HostError) -> Self {
        match err {
            HostError::Security(msg) => PortError::SecurityRejected(
                msg.unwrap_or_else(|| "notification policy change rejected".to_string()),
            ),
            HostError::Call(msg) => PortError::Unavailable(msg),
        }
    }
}

/// The subset of the Android framework this adapter needs.
pub trait NotificationManagerHost: Send + Sync + 'static {
    /// `Build.VERSION.SDK_INT`
    fn sdk_int(&self) -> u32;

    /// `NotificationManager.isNotificationPolicyAccessGranted()`
    fn is_notification_policy_access_granted(&self) -> Result<bool, HostError>;

    /// `NotificationManager.getCurrentInterruptionFilter()`
    fn current_interruption_filter(&self) -> Result<i32, HostError>;

    /// `NotificationManager.setInterruptionFilter(int)`
    fn set_interruption_filter(&self, filter: i32) -> Result<(), HostError>;

    /// `Context.startActivity(new Intent(action).addFlags(flags))`
    fn start_activity(&self, action: &str, flags: i32) -> Result<(), HostError>;
}

/// Policy adapter backed by the Android `NotificationManager`
pub struct AndroidPolicyAdapter<H> {
    host: Arc<H>,
}

impl<H> Clone for AndroidPolicyAdapter<H> {
    fn clone(&self) -> Self {
        Self {
            host: Arc::clone(&self.host),
        }
    }
}

impl<H: NotificationManagerHost> AndroidPolicyAdapter<H> {
    pub fn new(host: H) -> Self {
        Self {
            host: Arc::new(host),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

#[async_trait]
impl<H: NotificationManagerHost> PolicyPort for AndroidPolicyAdapter<H> {
    fn supports_policy_control(&self) -> bool {
        self.host.sdk_int() >= MIN_POLICY_SDK
    }

    async fn has_authority(&self) -> Result<bool, PortError> {
        Ok(self.host.is_notification_policy_access_granted()?)
    }

    async fn open_authority_settings(&self) -> Result<(), PortError> {
        tracing::info!(
            action = ACTION_NOTIFICATION_POLICY_ACCESS_SETTINGS,
            "starting policy access settings"
        );
        Ok(self
            .host
            .start_activity(ACTION_NOTIFICATION_POLICY_ACCESS_SETTINGS, FLAG_ACTIVITY_NEW_TASK)?)
    }

    async fn current_filter(&self) -> Result<FilterLevel, PortError> {
        Ok(FilterLevel::from(self.host.current_interruption_filter()?))
    }

    async fn set_filter(&self, level: FilterLevel) -> Result<(), PortError> {
        Ok(self.host.set_interruption_filter(level.as_i32())?)
    }
}

#[cfg(test)]
#[path = "android_tests.rs"]
mod tests;
