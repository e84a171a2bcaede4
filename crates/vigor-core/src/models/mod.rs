// ABOUTME: Core data models shared across the Vigor workspace
// ABOUTME: Re-exports readiness check-in and community post types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Community posts, comments, and store references
pub mod community;
/// Daily readiness inputs, results, and stored check-ins
pub mod readiness;

pub use community::{CommentRef, CommunityPost, PostComment, PostRef, RecordRef};
pub use readiness::{
    ReadinessCheckin, ReadinessForm, ReadinessInput, ReadinessResult, ReadinessTier,
};
