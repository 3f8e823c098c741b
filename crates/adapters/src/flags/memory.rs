// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process flag store.

use super::{FlagError, SessionFlagStore};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Flag store shared by clones within one process
#[derive(Clone, Debug, Default)]
pub struct MemoryFlagStore {
    flags: Arc<RwLock<HashMap<String, bool>>>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionFlagStore for MemoryFlagStore {
    fn is_set(&self, key: &str) -> Result<bool, FlagError> {
        Ok(self.flags.read().get(key).copied().unwrap_or(false))
    }

    fn set(&self, key: &str, value: bool) -> Result<(), FlagError> {
        self.flags.write().insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
