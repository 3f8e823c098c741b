// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification-policy bridge
//!
//! Dispatches method-channel calls from the shared app layer onto a
//! [`PolicyPort`](dnd_adapters::PolicyPort), and classifies inbound
//! notifications while a focus session is running.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod channel;
pub mod codec;
pub mod presenter;

pub use channel::PolicyChannel;
pub use codec::{
    decode_call, decode_response, encode_call, encode_response, CodecError, MAX_MESSAGE_SIZE,
};
pub use presenter::PresentationDecider;
