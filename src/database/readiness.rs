// ABOUTME: Readiness check-in persistence keyed by user and calendar date
// ABOUTME: Upserts overwrite same-day submissions while keeping the original creation time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{decode_timestamp, encode_timestamp, Database};
use crate::errors::{AppError, AppResult};
use crate::models::{ReadinessCheckin, ReadinessInput, ReadinessResult, ReadinessTier};
use crate::services::ReadinessStore;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use std::collections::BTreeSet;
use uuid::Uuid;

const DATE_FORMAT: &str = "%Y-%m-%d";

impl Database {
    pub(super) async fn migrate_readiness(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS readiness_checkins (
                user_id TEXT NOT NULL,
                checkin_date TEXT NOT NULL,
                sleep_quality INTEGER NOT NULL CHECK (sleep_quality BETWEEN 1 AND 10),
                stress_level INTEGER NOT NULL CHECK (stress_level BETWEEN 1 AND 10),
                soreness INTEGER NOT NULL CHECK (soreness BETWEEN 1 AND 10),
                fatigue REAL NOT NULL,
                soreness_zones TEXT NOT NULL DEFAULT '[]',
                notes TEXT,
                score REAL NOT NULL,
                recommendation TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                PRIMARY KEY (user_id, checkin_date)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    fn row_to_checkin(row: &SqliteRow) -> AppResult<ReadinessCheckin> {
        let user_id: String = row.try_get("user_id")?;
        let date: String = row.try_get("checkin_date")?;
        let zones: String = row.try_get("soreness_zones")?;
        let recommendation: String = row.try_get("recommendation")?;

        let input = ReadinessInput {
            sleep_quality: scale_value(row, "sleep_quality")?,
            stress_level: scale_value(row, "stress_level")?,
            soreness: scale_value(row, "soreness")?,
            fatigue: row.try_get("fatigue")?,
            soreness_zones: serde_json::from_str::<BTreeSet<String>>(&zones)?,
            notes: row.try_get("notes")?,
        };

        Ok(ReadinessCheckin {
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| AppError::database(format!("Invalid stored user id: {e}")))?,
            checkin_date: NaiveDate::parse_from_str(&date, DATE_FORMAT)
                .map_err(|e| AppError::database(format!("Invalid stored date {date}: {e}")))?,
            input,
            result: ReadinessResult {
                score: row.try_get("score")?,
                recommendation: recommendation.parse::<ReadinessTier>()?,
            },
            created_at: decode_timestamp(&row.try_get::<String, _>("created_at")?)?,
            updated_at: decode_timestamp(&row.try_get::<String, _>("updated_at")?)?,
        })
    }
}

fn scale_value(row: &SqliteRow, column: &str) -> AppResult<u8> {
    let raw: i64 = row.try_get(column)?;
    u8::try_from(raw)
        .map_err(|_| AppError::database(format!("Stored {column} out of range: {raw}")))
}

#[async_trait]
impl ReadinessStore for Database {
    async fn upsert_checkin(&self, checkin: &ReadinessCheckin) -> AppResult<ReadinessCheckin> {
        let zones = serde_json::to_string(&checkin.input.soreness_zones)?;

        sqlx::query(
            r"
            INSERT INTO readiness_checkins (
                user_id, checkin_date, sleep_quality, stress_level, soreness, fatigue,
                soreness_zones, notes, score, recommendation, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            ON CONFLICT(user_id, checkin_date) DO UPDATE SET
                sleep_quality = excluded.sleep_quality,
                stress_level = excluded.stress_level,
                soreness = excluded.soreness,
                fatigue = excluded.fatigue,
                soreness_zones = excluded.soreness_zones,
                notes = excluded.notes,
                score = excluded.score,
                recommendation = excluded.recommendation,
                updated_at = excluded.updated_at
            ",
        )
        .bind(checkin.user_id.to_string())
        .bind(checkin.checkin_date.format(DATE_FORMAT).to_string())
        .bind(i64::from(checkin.input.sleep_quality))
        .bind(i64::from(checkin.input.stress_level))
        .bind(i64::from(checkin.input.soreness))
        .bind(checkin.input.fatigue)
        .bind(zones)
        .bind(checkin.input.notes.as_deref())
        .bind(checkin.result.score)
        .bind(checkin.result.recommendation.as_str())
        .bind(encode_timestamp(checkin.created_at))
        .bind(encode_timestamp(checkin.updated_at))
        .execute(&self.pool)
        .await?;

        self.get_checkin(checkin.user_id, checkin.checkin_date)
            .await?
            .ok_or_else(|| AppError::internal("Check-in missing after upsert"))
    }

    async fn get_checkin(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Option<ReadinessCheckin>> {
        let row = sqlx::query(
            r"
            SELECT * FROM readiness_checkins
            WHERE user_id = ?1 AND checkin_date = ?2
            ",
        )
        .bind(user_id.to_string())
        .bind(date.format(DATE_FORMAT).to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| Self::row_to_checkin(&r)).transpose()
    }

    async fn list_checkins(
        &self,
        user_id: Uuid,
        since: Option<NaiveDate>,
        limit: u32,
    ) -> AppResult<Vec<ReadinessCheckin>> {
        // ISO dates compare correctly as text
        let since = since.map_or_else(String::new, |d| d.format(DATE_FORMAT).to_string());

        let rows = sqlx::query(
            r"
            SELECT * FROM readiness_checkins
            WHERE user_id = ?1 AND checkin_date >= ?2
            ORDER BY checkin_date DESC
            LIMIT ?3
            ",
        )
        .bind(user_id.to_string())
        .bind(since)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_checkin).collect()
    }
}
