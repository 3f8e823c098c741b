// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for the OS notification policy and the session flag store

mod env;
pub mod flags;
pub mod policy;
pub mod subprocess;
pub mod traced;

pub use flags::{FileFlagStore, FlagError, MemoryFlagStore, SessionFlagStore};
pub use policy::{
    AndroidPolicyAdapter, GnomePolicyAdapter, HostError, NoOpPolicyAdapter,
    NotificationManagerHost, PolicyPort, PortError,
};
pub use traced::TracedPolicy;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use flags::FakeFlagStore;
#[cfg(any(test, feature = "test-support"))]
pub use policy::{FakePolicyAdapter, PolicyCall};
