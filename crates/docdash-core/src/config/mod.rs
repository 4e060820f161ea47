//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every field carries a serde default so an empty file is
//! a valid configuration.

pub mod dashboard;
pub mod logging;
pub mod presence;

use serde::{Deserialize, Serialize};

use self::dashboard::{DashboardConfig, MAX_CHART_DAYS};
use self::logging::LoggingConfig;
use self::presence::PresenceConfig;

use crate::error::AppError;
use crate::result::AppResult;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Presence classification settings.
    #[serde(default)]
    pub presence: PresenceConfig,
    /// Dashboard assembly settings.
    #[serde(default)]
    pub dashboard: DashboardConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the `config/` directory.
    ///
    /// Merges `config/default.toml` with the `config/{env}.toml` overlay
    /// and environment variables prefixed with `DOCDASH__`.
    pub fn load(env: &str) -> AppResult<Self> {
        Self::load_from("config/default", env)
    }

    /// Load configuration with an explicit base file.
    ///
    /// The overlay is looked up next to `base` as `{dir}/{env}`.
    pub fn load_from(base: &str, env: &str) -> AppResult<Self> {
        let base_path = std::path::Path::new(base);
        let overlay = base_path
            .parent()
            .map(|dir| dir.join(env))
            .unwrap_or_else(|| std::path::PathBuf::from(env));

        tracing::debug!(base = %base, env = %env, "Loading configuration");

        let config = config::Config::builder()
            .add_source(config::File::with_name(base).required(false))
            .add_source(config::File::from(overlay).required(false))
            .add_source(
                config::Environment::with_prefix("DOCDASH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let app: AppConfig = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        app.validate()?;
        Ok(app)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> AppResult<()> {
        let presence = &self.presence;
        presence.active_threshold()?;
        presence.inactive_threshold()?;
        presence.stale_after()?;
        if presence.inactive_threshold_seconds <= presence.active_threshold_seconds {
            return Err(AppError::configuration(format!(
                "presence.inactive_threshold_seconds ({}) must be greater than \
                 presence.active_threshold_seconds ({})",
                presence.inactive_threshold_seconds, presence.active_threshold_seconds
            )));
        }
        if self.dashboard.chart_days == 0 || self.dashboard.chart_days > MAX_CHART_DAYS {
            return Err(AppError::configuration(format!(
                "dashboard.chart_days ({}) must be between 1 and {MAX_CHART_DAYS}",
                self.dashboard.chart_days
            )));
        }
        if self.dashboard.badge_palette.is_empty() {
            return Err(AppError::configuration(
                "dashboard.badge_palette must contain at least one class",
            ));
        }
        Ok(())
    }
}
