// ABOUTME: JSON-file key-value store that survives process restarts on one device
// ABOUTME: Writes go through a temp file and rename so readers never see a torn file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::KeyValueStore;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Key-value store persisted as a flat JSON object in a single file
///
/// Writers within one process are serialized; separate processes are not
/// coordinated, matching browser local storage semantics.
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Create a store at `path`; the file and parent directory are created on first write
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_raw(&self) -> AppResult<Option<Vec<u8>>> {
        match fs::read(&self.path).await {
            Ok(raw) if raw.is_empty() => Ok(None),
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!(
                "Failed to read {}: {e}",
                self.path.display()
            ))
            .with_source(e)),
        }
    }

    async fn load(&self) -> AppResult<BTreeMap<String, String>> {
        let Some(raw) = self.read_raw().await? else {
            return Ok(BTreeMap::new());
        };
        serde_json::from_slice(&raw).map_err(|e| {
            AppError::storage(format!(
                "Corrupt local state file {}: {e}",
                self.path.display()
            ))
        })
    }

    /// Current slots for a read-modify-write; corrupt contents start over empty
    async fn load_for_update(&self) -> AppResult<BTreeMap<String, String>> {
        let Some(raw) = self.read_raw().await? else {
            return Ok(BTreeMap::new());
        };
        Ok(serde_json::from_slice(&raw).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "discarding corrupt local state file");
            BTreeMap::new()
        }))
    }

    async fn persist(&self, slots: &BTreeMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(slots)?).await?;
        fs::rename(&tmp, &self.path).await?;
        debug!(path = %self.path.display(), slots = slots.len(), "local state written");
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut slots = self.load_for_update().await?;
        slots.insert(key.to_owned(), value.to_owned());
        self.persist(&slots).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut slots = self.load_for_update().await?;
        if slots.remove(key).is_some() {
            self.persist(&slots).await?;
        }
        Ok(())
    }
}
