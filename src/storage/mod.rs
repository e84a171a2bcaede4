// ABOUTME: Device-local key-value persistence used for small durable markers
// ABOUTME: Pluggable backends (in-memory, JSON file) behind the KeyValueStore trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Local key-value persistence
//!
//! Plays the role browser local storage plays for a web client: a handful of
//! string slots that survive restarts on one device. The retention sweep keeps
//! its last-run cursor here.

/// JSON-file backed store
pub mod file;
/// In-memory store for tests and ephemeral runs
pub mod memory;

pub use file::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;

use crate::errors::AppResult;
use async_trait::async_trait;
use std::sync::Arc;

/// String key-value slot store
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a slot, `None` if absent
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Write a slot, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove a slot; removing an absent key is not an error
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written
    async fn remove(&self, key: &str) -> AppResult<()>;
}

#[async_trait]
impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        (**self).remove(key).await
    }
}
