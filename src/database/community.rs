// ABOUTME: Community post and comment storage with the post-store operations used for retention
// ABOUTME: Comments reference their post without cascade, so a post with comments cannot be deleted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{decode_timestamp, decode_uuid, encode_timestamp, Database};
use crate::errors::AppResult;
use crate::models::{CommentRef, CommunityPost, PostComment, PostRef, RecordRef};
use crate::services::PostStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

impl Database {
    pub(super) async fn migrate_community(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS community_posts (
                id TEXT PRIMARY KEY,
                author_id TEXT NOT NULL,
                content TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_community_posts_created_at ON community_posts(created_at)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS post_comments (
                id TEXT PRIMARY KEY,
                post_id TEXT NOT NULL REFERENCES community_posts(id),
                author_id TEXT NOT NULL,
                content TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_post_comments_post_id ON post_comments(post_id)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Store a new post
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_post(&self, post: &CommunityPost) -> AppResult<Uuid> {
        sqlx::query(
            r"
            INSERT INTO community_posts (id, author_id, content, created_at)
            VALUES (?1, ?2, ?3, ?4)
            ",
        )
        .bind(post.id.to_string())
        .bind(post.author_id.to_string())
        .bind(&post.content)
        .bind(encode_timestamp(post.created_at))
        .execute(&self.pool)
        .await?;

        Ok(post.id)
    }

    /// Store a new comment; the parent post must exist
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails or the parent post is missing
    pub async fn create_comment(&self, comment: &PostComment) -> AppResult<Uuid> {
        sqlx::query(
            r"
            INSERT INTO post_comments (id, post_id, author_id, content, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ",
        )
        .bind(comment.id.to_string())
        .bind(comment.post_id.to_string())
        .bind(comment.author_id.to_string())
        .bind(&comment.content)
        .bind(encode_timestamp(comment.created_at))
        .execute(&self.pool)
        .await?;

        Ok(comment.id)
    }

    /// Get a post by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row is corrupt
    pub async fn get_post(&self, id: Uuid) -> AppResult<Option<CommunityPost>> {
        let row = sqlx::query(
            r"
            SELECT id, author_id, content, created_at
            FROM community_posts
            WHERE id = ?1
            ",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| Self::row_to_post(&r)).transpose()
    }

    /// All comments on a post, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row is corrupt
    pub async fn get_post_comments(&self, post_id: Uuid) -> AppResult<Vec<PostComment>> {
        let rows = sqlx::query(
            r"
            SELECT id, post_id, author_id, content, created_at
            FROM post_comments
            WHERE post_id = ?1
            ORDER BY created_at ASC
            ",
        )
        .bind(post_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_comment).collect()
    }

    /// Total number of stored posts
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count_posts(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM community_posts")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    fn row_to_post(row: &SqliteRow) -> AppResult<CommunityPost> {
        Ok(CommunityPost {
            id: decode_uuid(&row.try_get::<String, _>("id")?)?,
            author_id: decode_uuid(&row.try_get::<String, _>("author_id")?)?,
            content: row.try_get("content")?,
            created_at: decode_timestamp(&row.try_get::<String, _>("created_at")?)?,
        })
    }

    fn row_to_comment(row: &SqliteRow) -> AppResult<PostComment> {
        Ok(PostComment {
            id: decode_uuid(&row.try_get::<String, _>("id")?)?,
            post_id: decode_uuid(&row.try_get::<String, _>("post_id")?)?,
            author_id: decode_uuid(&row.try_get::<String, _>("author_id")?)?,
            content: row.try_get("content")?,
            created_at: decode_timestamp(&row.try_get::<String, _>("created_at")?)?,
        })
    }
}

#[async_trait]
impl PostStore for Database {
    async fn query_posts_older_than(&self, cutoff: DateTime<Utc>) -> AppResult<Vec<PostRef>> {
        let rows = sqlx::query(
            r"
            SELECT id, created_at
            FROM community_posts
            WHERE created_at < ?1
            ORDER BY created_at ASC
            ",
        )
        .bind(encode_timestamp(cutoff))
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> AppResult<PostRef> {
                Ok(PostRef {
                    id: decode_uuid(&row.try_get::<String, _>("id")?)?,
                    created_at: decode_timestamp(&row.try_get::<String, _>("created_at")?)?,
                })
            })
            .collect()
    }

    async fn list_comments(&self, post: &PostRef) -> AppResult<Vec<CommentRef>> {
        let ids: Vec<String> =
            sqlx::query_scalar("SELECT id FROM post_comments WHERE post_id = ?1")
                .bind(post.id.to_string())
                .fetch_all(&self.pool)
                .await?;

        ids.iter()
            .map(|id| -> AppResult<CommentRef> {
                Ok(CommentRef {
                    post_id: post.id,
                    id: decode_uuid(id)?,
                })
            })
            .collect()
    }

    async fn delete(&self, record: &RecordRef) -> AppResult<()> {
        match record {
            RecordRef::Post(post) => {
                sqlx::query("DELETE FROM community_posts WHERE id = ?1")
                    .bind(post.id.to_string())
                    .execute(&self.pool)
                    .await?;
            }
            RecordRef::Comment(comment) => {
                sqlx::query("DELETE FROM post_comments WHERE id = ?1 AND post_id = ?2")
                    .bind(comment.id.to_string())
                    .bind(comment.post_id.to_string())
                    .execute(&self.pool)
                    .await?;
            }
        }
        Ok(())
    }
}
