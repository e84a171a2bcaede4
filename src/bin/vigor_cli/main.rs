// ABOUTME: Vigor CLI - command-line tool for readiness scoring and community retention
// ABOUTME: Scores and stores daily check-ins and runs the community cleanup sweep
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Score inputs without storing anything
//! vigor-cli readiness score --sleep 8 --stress 3 --soreness 2 --fatigue 20
//!
//! # Store today's check-in for a user (resubmitting overwrites it)
//! vigor-cli readiness submit --user-id <uuid> --sleep 8 --stress 3 --soreness 2 --fatigue 20 --zone quads
//!
//! # Show a stored check-in, or recent history without --date
//! vigor-cli readiness show --user-id <uuid> --date 2025-03-14
//!
//! # Run the retention sweep if it is due (or immediately with --force)
//! vigor-cli community cleanup --force
//! ```

mod commands;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;
use vigor::config::AppConfig;
use vigor::logging::LoggingConfig;
use vigor::models::ReadinessForm;

#[derive(Parser)]
#[command(
    name = "vigor-cli",
    about = "Vigor readiness and community retention CLI",
    long_about = "Scores daily readiness check-ins, stores them per user and day, and purges stale community posts."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Directory holding local sweep state
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Readiness scoring and check-ins
    Readiness {
        #[command(subcommand)]
        action: ReadinessCommand,
    },

    /// Community data maintenance
    Community {
        #[command(subcommand)]
        action: CommunityCommand,
    },
}

/// Raw check-in inputs; missing values are reported by field name
#[derive(Args)]
struct ScoreArgs {
    /// Sleep quality, 1 (poor) to 10 (excellent)
    #[arg(long)]
    sleep: Option<u8>,

    /// Stress level, 1 (calm) to 10 (very stressed)
    #[arg(long)]
    stress: Option<u8>,

    /// Muscle soreness, 1 (none) to 10 (severe)
    #[arg(long)]
    soreness: Option<u8>,

    /// Fatigue, 0 (fresh) to 100 (exhausted)
    #[arg(long)]
    fatigue: Option<f64>,

    /// Sore body region (repeatable)
    #[arg(long = "zone")]
    zones: Vec<String>,

    /// Free-form notes
    #[arg(long)]
    notes: Option<String>,
}

impl From<ScoreArgs> for ReadinessForm {
    fn from(args: ScoreArgs) -> Self {
        Self {
            sleep_quality: args.sleep,
            stress_level: args.stress,
            soreness: args.soreness,
            fatigue: args.fatigue,
            soreness_zones: args.zones,
            notes: args.notes,
        }
    }
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ReadinessCommand {
    /// Score inputs and print the result without storing it
    Score {
        #[command(flatten)]
        inputs: ScoreArgs,
    },

    /// Score and store a check-in for a user and date
    Submit {
        /// User ID
        #[arg(long)]
        user_id: Uuid,

        /// Check-in date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        #[command(flatten)]
        inputs: ScoreArgs,
    },

    /// Show a stored check-in, or recent ones when no date is given
    Show {
        /// User ID
        #[arg(long)]
        user_id: Uuid,

        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Number of recent check-ins to list
        #[arg(long, default_value = "7")]
        limit: u32,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum CommunityCommand {
    /// Delete posts older than the retention window together with their comments
    Cleanup {
        /// Run even if the last sweep is more recent than the interval
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.verbose();
    }
    logging.init()?;

    let mut config = AppConfig::from_env()?;
    if let Some(url) = cli.database_url {
        config = config.with_database_url(url);
    }
    if let Some(dir) = cli.state_dir {
        config = config.with_state_dir(dir);
    }
    debug!(
        database_url = %config.database_url,
        state_dir = %config.state_dir.display(),
        "effective storage locations"
    );

    match cli.command {
        Command::Readiness { action } => match action {
            ReadinessCommand::Score { inputs } => {
                commands::readiness::score(inputs.into())?;
            }
            ReadinessCommand::Submit {
                user_id,
                date,
                inputs,
            } => {
                commands::readiness::submit(&config, user_id, date, inputs.into()).await?;
            }
            ReadinessCommand::Show {
                user_id,
                date,
                limit,
            } => {
                commands::readiness::show(&config, user_id, date, limit).await?;
            }
        },
        Command::Community { action } => match action {
            CommunityCommand::Cleanup { force } => {
                commands::community::cleanup(&config, force).await?;
            }
        },
    }

    Ok(())
}
