// ABOUTME: Readiness commands for vigor-cli
// ABOUTME: Scores inputs, stores per-day check-ins, and prints stored check-ins as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Local, NaiveDate};
use serde_json::json;
use tracing::info;
use uuid::Uuid;
use vigor::config::AppConfig;
use vigor::database::Database;
use vigor::errors::{AppError, AppResult};
use vigor::intelligence::ReadinessCalculator;
use vigor::models::{ReadinessForm, ReadinessInput};
use vigor::services::ReadinessCheckinService;

use super::print_json;

/// Score inputs and print the result with its component breakdown
pub fn score(form: ReadinessForm) -> AppResult<()> {
    let input = ReadinessInput::try_from(form)?;
    let calculator = ReadinessCalculator::default();
    let result = calculator.assess(&input)?;

    print_json(&json!({
        "score": result.score,
        "recommendation": result.recommendation,
        "guidance": result.recommendation.guidance(),
        "components": ReadinessCalculator::components(&input),
    }))
}

/// Score and store a check-in, overwriting any earlier one for the same day
pub async fn submit(
    config: &AppConfig,
    user_id: Uuid,
    date: Option<NaiveDate>,
    form: ReadinessForm,
) -> AppResult<()> {
    let input = ReadinessInput::try_from(form)?;
    let date = date.unwrap_or_else(|| Local::now().date_naive());

    let database = Database::new(&config.database_url).await?;
    let service = ReadinessCheckinService::new(database.clone(), ReadinessCalculator::default());
    let stored = service.submit(user_id, date, input).await?;
    database.close().await;

    print_json(&stored)
}

/// Print the check-in for one day, or the most recent ones when no date is given
pub async fn show(
    config: &AppConfig,
    user_id: Uuid,
    date: Option<NaiveDate>,
    limit: u32,
) -> AppResult<()> {
    let database = Database::new(&config.database_url).await?;
    let service = ReadinessCheckinService::new(database.clone(), ReadinessCalculator::default());

    let outcome = match date {
        Some(date) => {
            let checkin = service.for_day(user_id, date).await?.ok_or_else(|| {
                AppError::not_found(format!("No check-in for user {user_id} on {date}"))
            })?;
            print_json(&checkin)
        }
        None => {
            let history = service.history(user_id, None, limit).await?;
            info!(user_id = %user_id, count = history.len(), "listing recent check-ins");
            print_json(&history)
        }
    };

    database.close().await;
    outcome
}
