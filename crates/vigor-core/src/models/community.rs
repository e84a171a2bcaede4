// ABOUTME: Community post and comment models plus lightweight store references
// ABOUTME: References carry only what the retention sweep needs: identity and age
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A post on the community feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityPost {
    /// Post identifier
    pub id: Uuid,
    /// Author user identifier
    pub author_id: Uuid,
    /// Post body
    pub content: String,
    /// Creation time, used for retention
    pub created_at: DateTime<Utc>,
}

impl CommunityPost {
    /// Create a new post authored now
    #[must_use]
    pub fn new(author_id: Uuid, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// Reference used by the post store
    #[must_use]
    pub const fn post_ref(&self) -> PostRef {
        PostRef {
            id: self.id,
            created_at: self.created_at,
        }
    }
}

/// A comment nested under a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostComment {
    /// Comment identifier
    pub id: Uuid,
    /// Parent post
    pub post_id: Uuid,
    /// Author user identifier
    pub author_id: Uuid,
    /// Comment body
    pub content: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl PostComment {
    /// Create a new comment on `post_id` authored now
    #[must_use]
    pub fn new(post_id: Uuid, author_id: Uuid, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            post_id,
            author_id,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// Identity and age of a stored post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostRef {
    /// Post identifier
    pub id: Uuid,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Identity of a stored comment within its post's collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentRef {
    /// Parent post
    pub post_id: Uuid,
    /// Comment identifier
    pub id: Uuid,
}

/// Any deletable record in the post store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordRef {
    /// A top-level post
    Post(PostRef),
    /// A comment under a post
    Comment(CommentRef),
}

impl From<PostRef> for RecordRef {
    fn from(post: PostRef) -> Self {
        Self::Post(post)
    }
}

impl From<CommentRef> for RecordRef {
    fn from(comment: CommentRef) -> Self {
        Self::Comment(comment)
    }
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Post(post) => write!(f, "posts/{}", post.id),
            Self::Comment(comment) => {
                write!(f, "posts/{}/comments/{}", comment.post_id, comment.id)
            }
        }
    }
}
