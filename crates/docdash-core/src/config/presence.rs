//! Presence classification configuration.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// Upper bound for every presence duration setting (one year).
pub const MAX_PRESENCE_SECONDS: u64 = 365 * 24 * 60 * 60;

/// Thresholds used to bucket connections by recency of activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenceConfig {
    /// Seconds since last activity below which a connection is active.
    #[serde(default = "default_active_threshold")]
    pub active_threshold_seconds: u64,
    /// Seconds since last activity below which a connection is inactive
    /// rather than absent.
    #[serde(default = "default_inactive_threshold")]
    pub inactive_threshold_seconds: u64,
    /// Seconds without activity after which a connection is pruned.
    #[serde(default = "default_stale_after")]
    pub stale_after_seconds: u64,
}

impl PresenceConfig {
    /// Active threshold as a duration.
    pub fn active_threshold(&self) -> AppResult<Duration> {
        bounded_seconds("presence.active_threshold_seconds", self.active_threshold_seconds)
    }

    /// Inactive threshold as a duration.
    pub fn inactive_threshold(&self) -> AppResult<Duration> {
        bounded_seconds(
            "presence.inactive_threshold_seconds",
            self.inactive_threshold_seconds,
        )
    }

    /// Stale cut-off as a duration.
    pub fn stale_after(&self) -> AppResult<Duration> {
        bounded_seconds("presence.stale_after_seconds", self.stale_after_seconds)
    }
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            active_threshold_seconds: default_active_threshold(),
            inactive_threshold_seconds: default_inactive_threshold(),
            stale_after_seconds: default_stale_after(),
        }
    }
}

fn bounded_seconds(field: &str, seconds: u64) -> AppResult<Duration> {
    if seconds > MAX_PRESENCE_SECONDS {
        return Err(AppError::configuration(format!(
            "{field} ({seconds}) must not exceed {MAX_PRESENCE_SECONDS}"
        )));
    }
    i64::try_from(seconds)
        .ok()
        .and_then(Duration::try_seconds)
        .ok_or_else(|| AppError::configuration(format!("{field} ({seconds}) is out of range")))
}

fn default_active_threshold() -> u64 {
    120
}

fn default_inactive_threshold() -> u64 {
    600
}

fn default_stale_after() -> u64 {
    1800
}
