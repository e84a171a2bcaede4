// ABOUTME: Daily readiness check-in: validate inputs, score them, and upsert one record per day
// ABOUTME: Resubmitting for the same user and date overwrites the earlier values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::intelligence::ReadinessCalculator;
use crate::models::{ReadinessCheckin, ReadinessInput};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Durable sink for readiness check-ins keyed by `(user_id, checkin_date)`
#[async_trait]
pub trait ReadinessStore: Send + Sync {
    /// Insert or overwrite the check-in for its user and date, returning the stored row
    ///
    /// The first submission's `created_at` is preserved on overwrite.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    async fn upsert_checkin(&self, checkin: &ReadinessCheckin) -> AppResult<ReadinessCheckin>;

    /// Check-in for one user on one date
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails or the stored row is corrupt
    async fn get_checkin(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Option<ReadinessCheckin>>;

    /// Most recent check-ins for a user, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails or a stored row is corrupt
    async fn list_checkins(
        &self,
        user_id: Uuid,
        since: Option<NaiveDate>,
        limit: u32,
    ) -> AppResult<Vec<ReadinessCheckin>>;
}

#[async_trait]
impl<T: ReadinessStore + ?Sized> ReadinessStore for Arc<T> {
    async fn upsert_checkin(&self, checkin: &ReadinessCheckin) -> AppResult<ReadinessCheckin> {
        (**self).upsert_checkin(checkin).await
    }

    async fn get_checkin(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Option<ReadinessCheckin>> {
        (**self).get_checkin(user_id, date).await
    }

    async fn list_checkins(
        &self,
        user_id: Uuid,
        since: Option<NaiveDate>,
        limit: u32,
    ) -> AppResult<Vec<ReadinessCheckin>> {
        (**self).list_checkins(user_id, since, limit).await
    }
}

/// Readiness check-in service
pub struct ReadinessCheckinService<S> {
    store: S,
    calculator: ReadinessCalculator,
}

impl<S: ReadinessStore> ReadinessCheckinService<S> {
    /// Create a service writing to `store`
    #[must_use]
    pub const fn new(store: S, calculator: ReadinessCalculator) -> Self {
        Self { store, calculator }
    }

    /// Score and persist today's inputs for a user
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` naming the field if an input is outside its
    /// domain, or a database error if the upsert fails
    pub async fn submit(
        &self,
        user_id: Uuid,
        checkin_date: NaiveDate,
        input: ReadinessInput,
    ) -> AppResult<ReadinessCheckin> {
        let result = self.calculator.assess(&input).map_err(AppError::from)?;
        let now = Utc::now();

        let checkin = ReadinessCheckin {
            user_id,
            checkin_date,
            input,
            result,
            created_at: now,
            updated_at: now,
        };
        let stored = self.store.upsert_checkin(&checkin).await?;

        info!(
            user_id = %user_id,
            date = %checkin_date,
            score = stored.result.score,
            tier = %stored.result.recommendation,
            "readiness check-in saved"
        );
        Ok(stored)
    }

    /// Stored check-in for a user on a date
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails
    pub async fn for_day(
        &self,
        user_id: Uuid,
        checkin_date: NaiveDate,
    ) -> AppResult<Option<ReadinessCheckin>> {
        self.store.get_checkin(user_id, checkin_date).await
    }

    /// Recent check-ins for a user, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails
    pub async fn history(
        &self,
        user_id: Uuid,
        since: Option<NaiveDate>,
        limit: u32,
    ) -> AppResult<Vec<ReadinessCheckin>> {
        self.store.list_checkins(user_id, since, limit).await
    }
}
