// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, a scripted in-memory post store, and a failing key-value store
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `vigor`

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};
use uuid::Uuid;
use vigor::errors::{AppError, AppResult};
use vigor::models::{CommentRef, PostRef, RecordRef};
use vigor::services::PostStore;
use vigor::storage::KeyValueStore;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Fixed reference instant so tests do not depend on the wall clock
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap()
}

pub fn days_ago(days: i64) -> DateTime<Utc> {
    fixed_now() - Duration::days(days)
}

/// In-memory post store with call counting and failure injection
#[derive(Default)]
pub struct ScriptedPostStore {
    posts: Mutex<BTreeMap<Uuid, DateTime<Utc>>>,
    comments: Mutex<BTreeMap<Uuid, Vec<Uuid>>>,
    fail_query: Mutex<bool>,
    fail_list_for: Mutex<HashSet<Uuid>>,
    fail_delete_for: Mutex<HashSet<Uuid>>,
    calls: AtomicUsize,
}

impl ScriptedPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a post created at `created_at` with `comments` comments; returns its id
    pub fn add_post(&self, created_at: DateTime<Utc>, comments: usize) -> Uuid {
        let id = Uuid::new_v4();
        self.posts.lock().unwrap().insert(id, created_at);
        let comment_ids = (0..comments).map(|_| Uuid::new_v4()).collect();
        self.comments.lock().unwrap().insert(id, comment_ids);
        id
    }

    pub fn fail_query(&self) {
        *self.fail_query.lock().unwrap() = true;
    }

    pub fn fail_listing_comments_of(&self, post_id: Uuid) {
        self.fail_list_for.lock().unwrap().insert(post_id);
    }

    /// Make deletes of this post or comment id fail
    pub fn fail_delete_of(&self, id: Uuid) {
        self.fail_delete_for.lock().unwrap().insert(id);
    }

    pub fn comment_ids(&self, post_id: Uuid) -> Vec<Uuid> {
        self.comments
            .lock()
            .unwrap()
            .get(&post_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn has_post(&self, id: Uuid) -> bool {
        self.posts.lock().unwrap().contains_key(&id)
    }

    pub fn post_count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    pub fn comment_count(&self) -> usize {
        self.comments.lock().unwrap().values().map(Vec::len).sum()
    }

    /// Total number of store operations performed
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PostStore for ScriptedPostStore {
    async fn query_posts_older_than(&self, cutoff: DateTime<Utc>) -> AppResult<Vec<PostRef>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if *self.fail_query.lock().unwrap() {
            return Err(AppError::unavailable("post store offline"));
        }
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, created_at)| **created_at < cutoff)
            .map(|(id, created_at)| PostRef {
                id: *id,
                created_at: *created_at,
            })
            .collect())
    }

    async fn list_comments(&self, post: &PostRef) -> AppResult<Vec<CommentRef>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list_for.lock().unwrap().contains(&post.id) {
            return Err(AppError::unavailable("comment listing rejected"));
        }
        Ok(self
            .comment_ids(post.id)
            .into_iter()
            .map(|id| CommentRef {
                post_id: post.id,
                id,
            })
            .collect())
    }

    async fn delete(&self, record: &RecordRef) -> AppResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match record {
            RecordRef::Post(post) => {
                if self.fail_delete_for.lock().unwrap().contains(&post.id) {
                    return Err(AppError::database("post delete rejected"));
                }
                let has_comments = !self.comment_ids(post.id).is_empty();
                assert!(!has_comments, "post {} deleted before its comments", post.id);
                self.posts.lock().unwrap().remove(&post.id);
                self.comments.lock().unwrap().remove(&post.id);
            }
            RecordRef::Comment(comment) => {
                if self.fail_delete_for.lock().unwrap().contains(&comment.id) {
                    return Err(AppError::database("comment delete rejected"));
                }
                if let Some(ids) = self.comments.lock().unwrap().get_mut(&comment.post_id) {
                    ids.retain(|id| *id != comment.id);
                }
            }
        }
        Ok(())
    }
}

/// Key-value store whose reads and writes can be made to fail
#[derive(Default)]
pub struct FlakyKeyValueStore {
    values: Mutex<BTreeMap<String, String>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl FlakyKeyValueStore {
    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl KeyValueStore for FlakyKeyValueStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        if self.fail_reads {
            return Err(AppError::storage("local storage unavailable"));
        }
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::storage("local storage quota exceeded"));
        }
        self.values
            .lock()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}
