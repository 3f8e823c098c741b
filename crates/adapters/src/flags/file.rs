// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON file flag store.
//!
//! The file holds one JSON object of `key: bool` pairs. Writes go to a
//! `.tmp` sibling first and are renamed into place, so a reader never sees a
//! half-written file.

use super::{FlagError, SessionFlagStore};
use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Flag store persisted as a JSON object on disk
#[derive(Clone, Debug)]
pub struct FileFlagStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl FileFlagStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Map<String, Value>, FlagError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let reader = BufReader::new(File::open(&self.path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    fn save(&self, flags: &Map<String, Value>) -> Result<(), FlagError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.path.with_extension("tmp");
        {
            let file = File::create(&tmp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, flags)?;
            let file = writer.into_inner().map_err(|e| e.into_error())?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl SessionFlagStore for FileFlagStore {
    fn is_set(&self, key: &str) -> Result<bool, FlagError> {
        Ok(self
            .load()?
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(false))
    }

    fn set(&self, key: &str, value: bool) -> Result<(), FlagError> {
        let _guard = self.write_lock.lock();
        let mut flags = match self.load() {
            Ok(flags) => flags,
            Err(FlagError::Corrupt(e)) => {
                tracing::warn!(
                    error = %e,
                    path = %self.path.display(),
                    "corrupt flag file, starting fresh",
                );
                Map::new()
            }
            Err(e) => return Err(e),
        };
        flags.insert(key.to_string(), Value::Bool(value));
        self.save(&flags)
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
