// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake flag store for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{FlagError, MemoryFlagStore, SessionFlagStore};
use parking_lot::Mutex;
use std::sync::Arc;

/// Memory-backed flag store that can be told to fail reads
#[derive(Clone, Default)]
pub struct FakeFlagStore {
    flags: MemoryFlagStore,
    read_failure: Arc<Mutex<Option<String>>>,
    reads: Arc<Mutex<Vec<String>>>,
}

impl FakeFlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with one flag already written.
    pub fn with_flag(key: &str, value: bool) -> Self {
        let store = Self::default();
        let _ = store.flags.set(key, value);
        store
    }

    /// Make every subsequent read fail with an IO error.
    pub fn fail_reads(&self, message: impl Into<String>) {
        *self.read_failure.lock() = Some(message.into());
    }

    /// Keys read so far, in order
    pub fn reads(&self) -> Vec<String> {
        self.reads.lock().clone()
    }
}

impl SessionFlagStore for FakeFlagStore {
    fn is_set(&self, key: &str) -> Result<bool, FlagError> {
        self.reads.lock().push(key.to_string());
        if let Some(ref msg) = *self.read_failure.lock() {
            return Err(FlagError::Io(std::io::Error::other(msg.clone())));
        }
        self.flags.is_set(key)
    }

    fn set(&self, key: &str, value: bool) -> Result<(), FlagError> {
        self.flags.set(key, value)
    }
}
