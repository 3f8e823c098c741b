// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session flag stores
//!
//! The session-active flag is owned by the app's session layer. The bridge
//! only reads it; `set` exists so that layer (or a CLI standing in for it)
//! has a way to write through the same store.

mod file;
mod memory;

pub use file::FileFlagStore;
pub use memory::MemoryFlagStore;

#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeFlagStore;

use thiserror::Error;

/// Errors from flag store operations
#[derive(Debug, Error)]
pub enum FlagError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt flag file: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Key-value boolean store, read like platform user defaults.
pub trait SessionFlagStore: Clone + Send + Sync + 'static {
    /// Read a flag. A key that was never written reads as `false`.
    fn is_set(&self, key: &str) -> Result<bool, FlagError>;

    /// Write a flag.
    fn set(&self, key: &str, value: bool) -> Result<(), FlagError>;
}
