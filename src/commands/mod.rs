//! CLI command definitions and dispatch.

pub mod config;
pub mod dashboard;
pub mod presence;

use std::path::Path;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;

use crate::output::OutputFormat;
use docdash_core::clock::Clock;
use docdash_core::config::AppConfig;
use docdash_core::error::{AppError, ErrorKind};
use docdash_core::result::AppResult;
use docdash_realtime::{ConnectionRecord, PresenceTracker};

/// DocDash: presence and dashboard view models for the classification console
#[derive(Debug, Parser)]
#[command(name = "docdash", version, about, long_about = None)]
pub struct Cli {
    /// Base configuration file (extension optional)
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Environment overlay loaded from the same directory
    #[arg(short, long, env = "DOCDASH_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the dashboard view model from processed documents
    Dashboard(dashboard::DashboardArgs),
    /// Summarize connected users
    Presence(presence::PresenceArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Load the effective configuration for this invocation
    pub fn load_config(&self) -> AppResult<AppConfig> {
        AppConfig::load_from(&self.config, &self.env)
    }

    /// Execute the CLI command
    pub async fn execute(&self, app_config: &AppConfig) -> AppResult<()> {
        match &self.command {
            Commands::Dashboard(args) => dashboard::execute(args, app_config, self.format).await,
            Commands::Presence(args) => presence::execute(args, app_config, self.format).await,
            Commands::Config(args) => {
                config::execute(args, app_config, &self.config, self.format).await
            }
        }
    }
}

/// Helper: load a connection list into a fresh tracker
pub async fn load_tracker(
    path: &Path,
    config: &AppConfig,
    clock: Arc<dyn Clock>,
) -> AppResult<PresenceTracker> {
    let records: Vec<ConnectionRecord> = read_json(path).await?;
    let tracker = PresenceTracker::new(&config.presence, clock)?;
    for record in records {
        tracker.ingest(record);
    }
    Ok(tracker)
}

/// Helper: read and parse a JSON file
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    tracing::debug!(path = %path.display(), "Reading input");

    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Io,
            format!("Failed to read '{}': {}", path.display(), e),
            e,
        )
    })?;

    serde_json::from_str(&raw).map_err(|e| {
        AppError::with_source(
            ErrorKind::Serialization,
            format!("Invalid JSON in '{}': {}", path.display(), e),
            e,
        )
    })
}
