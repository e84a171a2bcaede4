// ABOUTME: Rate-limited retention sweep deleting community posts past the retention window
// ABOUTME: Deletes each post's comments before the post; per-post failures never abort the batch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Community Cleanup Service
//!
//! A maintenance job that runs at most once per sweep interval on a device:
//!
//! 1. **Gate**: read the last-run cursor from the local key-value store. If
//!    less than `interval_days` has elapsed, skip without touching the post store.
//! 2. **Scan**: query every post created before `now - retention_days`.
//! 3. **Delete**: for each matched post delete its comments, then the post.
//!    A failure on one post is logged and the sweep moves on.
//! 4. **Record**: write `now` to the cursor, even if some posts failed.
//!
//! If the scan itself fails the cursor is left untouched so the next
//! invocation retries. No error ever escapes [`CommunityCleanup::run_if_due`];
//! callers inspect the returned [`SweepOutcome`] instead.

use crate::config::RetentionConfig;
use crate::constants::retention::LAST_SWEEP_KEY;
use crate::errors::{AppError, AppResult};
use crate::models::{CommentRef, PostRef, RecordRef};
use crate::storage::KeyValueStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// Post store operations needed by the sweep
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts whose `created_at` is strictly before `cutoff`
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreachable or the query is rejected
    async fn query_posts_older_than(&self, cutoff: DateTime<Utc>) -> AppResult<Vec<PostRef>>;

    /// All comments nested under `post`
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreachable or the query is rejected
    async fn list_comments(&self, post: &PostRef) -> AppResult<Vec<CommentRef>>;

    /// Delete one record; deleting a record that no longer exists succeeds
    ///
    /// # Errors
    ///
    /// Returns an error if the delete is rejected
    async fn delete(&self, record: &RecordRef) -> AppResult<()>;
}

#[async_trait]
impl<T: PostStore + ?Sized> PostStore for Arc<T> {
    async fn query_posts_older_than(&self, cutoff: DateTime<Utc>) -> AppResult<Vec<PostRef>> {
        (**self).query_posts_older_than(cutoff).await
    }

    async fn list_comments(&self, post: &PostRef) -> AppResult<Vec<CommentRef>> {
        (**self).list_comments(post).await
    }

    async fn delete(&self, record: &RecordRef) -> AppResult<()> {
        (**self).delete(record).await
    }
}

/// Failures the sweep can hit; all are logged, none propagate
#[derive(Debug, Error)]
pub enum SweepError {
    /// The initial scan failed; nothing was deleted
    #[error("post store query failed: {0}")]
    StoreQuery(#[source] AppError),

    /// Listing a post's comments failed; the post was left in place
    #[error("failed to list comments for post {post_id}: {source}")]
    CommentQuery {
        /// Post whose comments could not be listed
        post_id: Uuid,
        /// Underlying store error
        #[source]
        source: AppError,
    },

    /// Deleting a single comment or post failed
    #[error("failed to delete {record}: {source}")]
    StoreDelete {
        /// Record that could not be deleted
        record: RecordRef,
        /// Underlying store error
        #[source]
        source: AppError,
    },

    /// Writing the last-run cursor failed after deletions happened
    #[error("failed to persist sweep cursor: {0}")]
    Persistence(#[source] AppError),
}

/// Why a sweep did not run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// Cleanup is switched off in configuration
    Disabled,
    /// The previous sweep is more recent than the sweep interval
    NotDue {
        /// When the previous sweep completed
        last_sweep_at: DateTime<Utc>,
        /// Earliest time the next sweep may run
        next_due_at: DateTime<Utc>,
    },
}

/// Counts from a sweep that scanned successfully
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    /// Posts created before this instant were eligible
    pub cutoff: DateTime<Utc>,
    /// Posts returned by the scan
    pub matched: usize,
    /// Posts deleted (with all of their comments)
    pub deleted_posts: usize,
    /// Comments deleted, including those of posts that later failed
    pub deleted_comments: usize,
    /// Posts left in place because a delete failed
    pub failed_posts: usize,
    /// Whether the last-run cursor was written
    pub cursor_persisted: bool,
}

/// Result of one sweep invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SweepOutcome {
    /// Gate closed; the post store was not touched
    Skipped {
        /// Why the sweep did not run
        reason: SkipReason,
    },
    /// Scan succeeded and every matched post was attempted
    Completed(SweepReport),
    /// Scan failed; cursor untouched so the next invocation retries
    Failed {
        /// Human-readable failure description
        reason: String,
    },
}

impl SweepOutcome {
    /// Number of posts successfully deleted (zero unless completed)
    #[must_use]
    pub const fn deleted_count(&self) -> usize {
        match self {
            Self::Completed(report) => report.deleted_posts,
            Self::Skipped { .. } | Self::Failed { .. } => 0,
        }
    }

    /// Whether the sweep was skipped by the gate or configuration
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

/// Partial progress when a single post could not be purged
struct PurgeFailure {
    comments_deleted: usize,
    error: SweepError,
}

/// Community retention sweep
pub struct CommunityCleanup<P, K> {
    posts: P,
    cursor: K,
    config: RetentionConfig,
}

impl<P: PostStore, K: KeyValueStore> CommunityCleanup<P, K> {
    /// Create a sweep over `posts`, tracking its last run in `cursor`
    #[must_use]
    pub const fn new(posts: P, cursor: K, config: RetentionConfig) -> Self {
        Self {
            posts,
            cursor,
            config,
        }
    }

    /// Active retention policy
    #[must_use]
    pub const fn config(&self) -> &RetentionConfig {
        &self.config
    }

    /// Time of the last completed sweep
    ///
    /// An unreadable or malformed cursor reads as `None`, which makes the sweep due.
    pub async fn last_sweep_at(&self) -> Option<DateTime<Utc>> {
        match self.cursor.get(LAST_SWEEP_KEY).await {
            Ok(None) => None,
            Ok(Some(raw)) => {
                let parsed = parse_cursor(&raw);
                if parsed.is_none() {
                    warn!(cursor = %raw, "ignoring malformed community cleanup cursor");
                }
                parsed
            }
            Err(e) => {
                warn!(error = %e, "could not read community cleanup cursor");
                None
            }
        }
    }

    /// Run the sweep if the interval gate allows it
    ///
    /// Never fails; inspect the returned outcome.
    pub async fn run_if_due(&self, now: DateTime<Utc>) -> SweepOutcome {
        if !self.config.enabled {
            debug!("community cleanup disabled");
            return SweepOutcome::Skipped {
                reason: SkipReason::Disabled,
            };
        }

        if let Some(last_sweep_at) = self.last_sweep_at().await {
            if last_sweep_at > now {
                warn!(
                    last_sweep_at = %last_sweep_at,
                    now = %now,
                    "community cleanup cursor is in the future; sweeping anyway"
                );
            } else {
                let Some(next_due_at) =
                    last_sweep_at.checked_add_signed(self.config.sweep_interval())
                else {
                    warn!(
                        last_sweep_at = %last_sweep_at,
                        interval_days = self.config.interval_days,
                        "community cleanup interval overflows the calendar; not due"
                    );
                    return SweepOutcome::Skipped {
                        reason: SkipReason::NotDue {
                            last_sweep_at,
                            next_due_at: DateTime::<Utc>::MAX_UTC,
                        },
                    };
                };
                if now < next_due_at {
                    debug!(
                        last_sweep_at = %last_sweep_at,
                        next_due_at = %next_due_at,
                        "community cleanup not due"
                    );
                    return SweepOutcome::Skipped {
                        reason: SkipReason::NotDue {
                            last_sweep_at,
                            next_due_at,
                        },
                    };
                }
            }
        }

        self.run_now(now).await
    }

    /// Run the sweep unconditionally, bypassing the interval gate
    ///
    /// Never fails; inspect the returned outcome.
    #[instrument(skip(self), fields(retention_days = self.config.retention_days))]
    pub async fn run_now(&self, now: DateTime<Utc>) -> SweepOutcome {
        let Some(cutoff) = now.checked_sub_signed(self.config.retention_window()) else {
            let reason = format!(
                "retention window of {} days reaches before the earliest representable time",
                self.config.retention_days
            );
            warn!(reason = %reason, "community cleanup skipped scan");
            return SweepOutcome::Failed { reason };
        };

        let stale = match self.posts.query_posts_older_than(cutoff).await {
            Ok(stale) => stale,
            Err(e) => {
                let error = SweepError::StoreQuery(e);
                warn!(error = %error, "community cleanup scan failed; will retry next run");
                return SweepOutcome::Failed {
                    reason: error.to_string(),
                };
            }
        };

        let mut report = SweepReport {
            cutoff,
            matched: stale.len(),
            deleted_posts: 0,
            deleted_comments: 0,
            failed_posts: 0,
            cursor_persisted: false,
        };

        for post in &stale {
            match self.purge_post(post).await {
                Ok(comments) => {
                    report.deleted_posts += 1;
                    report.deleted_comments += comments;
                }
                Err(failure) => {
                    report.failed_posts += 1;
                    report.deleted_comments += failure.comments_deleted;
                    warn!(
                        post_id = %post.id,
                        error = %failure.error,
                        "skipping community post that could not be deleted"
                    );
                }
            }
        }

        match self.record_sweep(now).await {
            Ok(()) => report.cursor_persisted = true,
            Err(e) => error!(error = %e, "community cleanup finished but cursor was not saved"),
        }

        info!(
            matched = report.matched,
            deleted_posts = report.deleted_posts,
            deleted_comments = report.deleted_comments,
            failed_posts = report.failed_posts,
            cutoff = %cutoff,
            "community cleanup completed"
        );

        SweepOutcome::Completed(report)
    }

    /// Delete a post's comments and then the post, returning the comment count
    async fn purge_post(&self, post: &PostRef) -> Result<usize, PurgeFailure> {
        let comments = self
            .posts
            .list_comments(post)
            .await
            .map_err(|source| PurgeFailure {
                comments_deleted: 0,
                error: SweepError::CommentQuery {
                    post_id: post.id,
                    source,
                },
            })?;

        let mut deleted = 0;
        for comment in comments {
            let record = RecordRef::Comment(comment);
            self.posts
                .delete(&record)
                .await
                .map_err(|source| PurgeFailure {
                    comments_deleted: deleted,
                    error: SweepError::StoreDelete { record, source },
                })?;
            deleted += 1;
        }

        let record = RecordRef::Post(*post);
        self.posts
            .delete(&record)
            .await
            .map_err(|source| PurgeFailure {
                comments_deleted: deleted,
                error: SweepError::StoreDelete { record, source },
            })?;

        debug!(post_id = %post.id, comments = deleted, "community post deleted");
        Ok(deleted)
    }

    async fn record_sweep(&self, now: DateTime<Utc>) -> Result<(), SweepError> {
        self.cursor
            .set(LAST_SWEEP_KEY, &format_cursor(now))
            .await
            .map_err(SweepError::Persistence)
    }
}

/// Cursor wire format: Unix epoch milliseconds
#[must_use]
pub fn format_cursor(at: DateTime<Utc>) -> String {
    at.timestamp_millis().to_string()
}

/// Parse a cursor written by [`format_cursor`]
#[must_use]
pub fn parse_cursor(raw: &str) -> Option<DateTime<Utc>> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(DateTime::from_timestamp_millis)
}
