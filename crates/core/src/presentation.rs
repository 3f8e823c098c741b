// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Foreground presentation rule for notifications delivered mid-session.
//!
//! The rule is a pure function of two inputs: whether a session is running
//! (an externally persisted flag) and the notification's payload tag.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload key holding the notification's tag.
pub const PAYLOAD_KEY: &str = "payload";

/// Tag marking a cue scheduled by the session itself.
pub const SESSION_ALERT_TAG: &str = "session_alert";

/// Suffix of the persisted flag key, appended to the app namespace.
pub const SESSION_FLAG_SUFFIX: &str = "session_running";

/// Build the persisted flag key for an app namespace, e.g. `"focus_bridge.session_running"`.
pub fn session_flag_key(app_id: &str) -> String {
    if app_id.is_empty() {
        SESSION_FLAG_SUFFIX.to_string()
    } else {
        format!("{}.{}", app_id, SESSION_FLAG_SUFFIX)
    }
}

/// How an incoming notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Presentation {
    /// No override; the platform decides.
    Default,
    /// Play the sound, show nothing.
    SoundOnly,
    /// Neither sound nor any visual.
    FullySuppressed,
}

/// Explicit option set for hosts whose callback wants flags rather than a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PresentationOptions {
    pub sound: bool,
    pub banner: bool,
    pub badge: bool,
    pub list: bool,
}

impl Presentation {
    /// Options to hand the host, or `None` to defer to its default handling.
    pub fn options(self) -> Option<PresentationOptions> {
        match self {
            Presentation::Default => None,
            Presentation::SoundOnly => Some(PresentationOptions {
                sound: true,
                ..PresentationOptions::default()
            }),
            Presentation::FullySuppressed => Some(PresentationOptions::default()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Presentation::Default => "default",
            Presentation::SoundOnly => "sound-only",
            Presentation::FullySuppressed => "fully-suppressed",
        }
    }
}

impl std::fmt::Display for Presentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user-info dictionary attached to an incoming notification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationPayload {
    user_info: Map<String, Value>,
}

impl NotificationPayload {
    pub fn new(user_info: Map<String, Value>) -> Self {
        Self { user_info }
    }

    /// Payload carrying only a tag.
    pub fn tagged(tag: impl Into<String>) -> Self {
        let mut user_info = Map::new();
        user_info.insert(PAYLOAD_KEY.to_string(), Value::String(tag.into()));
        Self { user_info }
    }

    /// The tag, when present and a string.
    pub fn tag(&self) -> Option<&str> {
        self.user_info.get(PAYLOAD_KEY).and_then(Value::as_str)
    }

    pub fn is_session_alert(&self) -> bool {
        self.tag() == Some(SESSION_ALERT_TAG)
    }
}

/// Classify a notification against the session state.
pub fn decide(session_active: bool, payload: &NotificationPayload) -> Presentation {
    if !session_active {
        return Presentation::Default;
    }
    if payload.is_session_alert() {
        Presentation::SoundOnly
    } else {
        Presentation::FullySuppressed
    }
}

#[cfg(test)]
#[path = "presentation_tests.rs"]
mod tests;
