// ABOUTME: Domain services coordinating engines, stores, and local persistence
// ABOUTME: Readiness check-in submission and the community retention sweep
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Best-effort deletion of stale community posts and their comments
pub mod community_cleanup;
/// Daily readiness check-in submission and lookup
pub mod readiness_checkin;

pub use community_cleanup::{
    CommunityCleanup, PostStore, SkipReason, SweepError, SweepOutcome, SweepReport,
};
pub use readiness_checkin::{ReadinessCheckinService, ReadinessStore};
