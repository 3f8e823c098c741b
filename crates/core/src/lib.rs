// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dnd-core: shared vocabulary for the session notification-policy bridge

pub mod error;
pub mod filter;
pub mod method;
pub mod presentation;

pub use error::PolicyError;
pub use filter::{FilterLevel, ParseFilterError};
pub use method::{Method, MethodCall, MethodResponse, DEFAULT_CHANNEL, FILTER_ARG};
pub use presentation::{
    decide, session_flag_key, NotificationPayload, Presentation, PresentationOptions,
    PAYLOAD_KEY, SESSION_ALERT_TAG,
};
