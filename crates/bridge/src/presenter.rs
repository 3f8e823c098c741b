// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Foreground notification presentation while a session runs.

use dnd_adapters::SessionFlagStore;
use dnd_core::{decide, session_flag_key, NotificationPayload, Presentation, PresentationOptions};

/// Reads the session flag and applies the presentation rule.
///
/// Never writes the flag and never touches the interruption filter.
#[derive(Clone)]
pub struct PresentationDecider<S> {
    store: S,
    key: String,
}

impl<S: SessionFlagStore> PresentationDecider<S> {
    /// Decider reading `<app_id>.session_running`.
    pub fn new(store: S, app_id: &str) -> Self {
        Self::with_key(store, session_flag_key(app_id))
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Session flag as currently stored. An unreadable flag counts as unset.
    pub fn session_active(&self) -> bool {
        match self.store.is_set(&self.key) {
            Ok(active) => active,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "session flag unreadable, using default presentation");
                false
            }
        }
    }

    pub fn decide(&self, payload: &NotificationPayload) -> Presentation {
        let presentation = decide(self.session_active(), payload);
        tracing::debug!(tag = ?payload.tag(), %presentation, "decided presentation");
        presentation
    }

    /// Option set to hand the OS, or `None` to defer to its default handling.
    pub fn options_for(&self, payload: &NotificationPayload) -> Option<PresentationOptions> {
        self.decide(payload).options()
    }
}

#[cfg(test)]
#[path = "presenter_tests.rs"]
mod tests;
