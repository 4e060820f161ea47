//! Presence CLI command.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use docdash_core::clock::{Clock, SystemClock};
use docdash_core::config::AppConfig;
use docdash_core::result::AppResult;

/// Arguments for the presence command
#[derive(Debug, Args)]
pub struct PresenceArgs {
    /// JSON file containing an array of connected users or connection handshakes
    #[arg(short, long)]
    pub connections: PathBuf,

    /// Drop connections idle past the stale threshold before summarizing
    #[arg(long)]
    pub prune: bool,
}

/// Connected user display row
#[derive(Debug, Serialize, Tabled)]
struct ConnectionRow {
    /// User
    user: String,
    /// Email
    email: String,
    /// IP Address
    ip: String,
    /// Online
    online: String,
    /// Status
    status: String,
}

/// Execute the presence command
pub async fn execute(
    args: &PresenceArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> AppResult<()> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let tracker = super::load_tracker(&args.connections, config, clock).await?;

    if args.prune {
        let pruned = tracker.prune_stale();
        tracing::info!(pruned = pruned.len(), "Stale connections removed");
    }

    let stats = tracker.snapshot();

    match format {
        OutputFormat::Json => output::print_json(&stats),
        OutputFormat::Table => {
            output::print_heading("Connected users");
            output::print_kv("Total", &stats.total_users.to_string());
            output::print_kv("Active", &stats.active_users.to_string());
            output::print_kv("Inactive", &stats.inactive_users.to_string());
            output::print_kv("Absent", &stats.absent_users.to_string());
            output::print_kv("Distinct users", &tracker.unique_users().to_string());
            output::print_kv(
                "Updated",
                &stats.last_updated.format("%Y-%m-%d %H:%M:%S").to_string(),
            );
            println!();

            let rows: Vec<ConnectionRow> = stats
                .users
                .iter()
                .map(|u| {
                    let view = u.view_with(stats.last_updated, tracker.thresholds());
                    ConnectionRow {
                        user: u.user_name.clone(),
                        email: u.email.clone(),
                        ip: u.ip_address.clone(),
                        online: view.online_time,
                        status: view.activity_status.to_string(),
                    }
                })
                .collect();
            output::print_table(&rows);
        }
    }

    Ok(())
}
