// ABOUTME: Community maintenance commands for vigor-cli
// ABOUTME: Runs the retention sweep against the configured database and local cursor file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Utc;
use tracing::{info, warn};
use vigor::config::AppConfig;
use vigor::database::Database;
use vigor::errors::AppResult;
use vigor::services::{CommunityCleanup, SweepOutcome};
use vigor::storage::FileKeyValueStore;

use super::print_json;

/// Run the retention sweep, honouring the interval gate unless `force` is set
pub async fn cleanup(config: &AppConfig, force: bool) -> AppResult<()> {
    config.retention.validate()?;

    let database = Database::new(&config.database_url).await?;
    let cursor = FileKeyValueStore::new(config.local_state_path());
    let sweep = CommunityCleanup::new(database.clone(), cursor, config.retention.clone());

    let now = Utc::now();
    let outcome = if force {
        info!("forcing community cleanup");
        sweep.run_now(now).await
    } else {
        sweep.run_if_due(now).await
    };
    database.close().await;

    if let SweepOutcome::Failed { reason } = &outcome {
        warn!(reason = %reason, "community cleanup failed");
    }
    print_json(&outcome)
}
