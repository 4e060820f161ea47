//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use docdash_core::config::AppConfig;
use docdash_core::result::AppResult;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Report whether the configuration loaded and validated
    Validate,
    /// Write the default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config/generated.toml")]
        output: String,
    },
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config: &AppConfig,
    config_path: &str,
    format: OutputFormat,
) -> AppResult<()> {
    match &args.command {
        ConfigCommand::Show => match format {
            OutputFormat::Json => output::print_json(config),
            OutputFormat::Table => println!("{:#?}", config),
        },
        ConfigCommand::Validate => {
            output::print_success(&format!("Configuration '{}' is valid", config_path));
            output::print_kv(
                "Presence thresholds",
                &format!(
                    "{}s / {}s (stale after {}s)",
                    config.presence.active_threshold_seconds,
                    config.presence.inactive_threshold_seconds,
                    config.presence.stale_after_seconds
                ),
            );
            output::print_kv(
                "Recent activity limit",
                &config.dashboard.recent_activity_limit.to_string(),
            );
            output::print_kv("Chart days", &config.dashboard.chart_days.to_string());
            output::print_kv("Log level", &config.logging.level);
        }
        ConfigCommand::Generate { output: out_path } => {
            let default_config = include_str!("../../config/default.toml");

            if let Some(parent) = std::path::Path::new(out_path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(out_path, default_config).await?;

            output::print_success(&format!("Default config written to '{}'", out_path));
        }
    }

    Ok(())
}
