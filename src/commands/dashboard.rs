//! Dashboard CLI command.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use docdash_core::clock::{Clock, SystemClock};
use docdash_core::config::AppConfig;
use docdash_core::result::AppResult;
use docdash_entity::DashboardViewModel;
use docdash_service::{DashboardBuilder, ProcessedDocument};

/// Arguments for the dashboard command
#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// JSON file containing an array of processed documents
    #[arg(short, long)]
    pub documents: PathBuf,

    /// Active user count shown in the header
    #[arg(long, conflicts_with = "connections")]
    pub active_users: Option<u64>,

    /// JSON file of connected users or handshakes to derive the active user count from
    #[arg(long)]
    pub connections: Option<PathBuf>,
}

/// Recent activity display row
#[derive(Debug, Serialize, Tabled)]
struct ActivityRow {
    /// File
    file: String,
    /// Classification
    classification: String,
    /// Extension
    ext: String,
    /// When
    when: String,
}

/// Type statistic display row
#[derive(Debug, Serialize, Tabled)]
struct TypeRow {
    /// Classification
    classification: String,
    /// Count
    count: u64,
    /// Share
    share: String,
}

/// Chart point display row
#[derive(Debug, Serialize, Tabled)]
struct ChartRow {
    /// Day
    day: String,
    /// Documents
    documents: u64,
}

/// Execute the dashboard command
pub async fn execute(
    args: &DashboardArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> AppResult<()> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let documents: Vec<ProcessedDocument> = super::read_json(&args.documents).await?;

    let active_users = match (&args.active_users, &args.connections) {
        (Some(n), _) => *n,
        (None, Some(path)) => {
            let tracker = super::load_tracker(path, config, Arc::clone(&clock)).await?;
            tracker.snapshot().active_users as u64
        }
        (None, None) => 0,
    };

    let builder = DashboardBuilder::new(config.dashboard.clone(), clock)?;
    let vm = builder.build(&documents, active_users);

    tracing::info!(
        documents = documents.len(),
        active_users,
        "Dashboard built"
    );

    match format {
        OutputFormat::Json => output::print_json(&vm),
        OutputFormat::Table => print_dashboard(&vm),
    }

    Ok(())
}

fn print_dashboard(vm: &DashboardViewModel) {
    output::print_heading("Overview");
    output::print_kv("Total documents", &vm.stats.total_documents.to_string());
    output::print_kv("Success rate", &format!("{:.1}%", vm.stats.success_rate));
    output::print_kv("Active users", &vm.stats.active_users.to_string());
    output::print_kv("Processing", &vm.stats.processing_count.to_string());

    output::print_heading("Recent activity");
    let rows: Vec<ActivityRow> = vm
        .recent_activities
        .iter()
        .map(|a| ActivityRow {
            file: a.file_name.clone(),
            classification: a.classification.clone(),
            ext: a.file_extension.clone(),
            when: a.time_ago.clone(),
        })
        .collect();
    output::print_table(&rows);

    output::print_heading("Documents per day");
    let rows: Vec<ChartRow> = vm
        .chart_data
        .points()
        .map(|(label, value)| ChartRow {
            day: label.to_string(),
            documents: value as u64,
        })
        .collect();
    output::print_table(&rows);

    output::print_heading("By classification");
    let rows: Vec<TypeRow> = vm
        .type_statistics
        .iter()
        .map(|t| TypeRow {
            classification: t.type_name.clone(),
            count: t.count,
            share: format!("{:.1}%", t.percentage),
        })
        .collect();
    output::print_table(&rows);
}
