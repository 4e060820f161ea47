//! Presence domain records.

pub mod stats;
pub mod user;

pub use stats::ConnectedUsersStats;
pub use user::{ConnectedUser, ConnectedUserView};

use chrono::Duration;
use serde::{Deserialize, Serialize};

use docdash_core::config::presence::PresenceConfig;
use docdash_core::result::AppResult;

/// CSS class used when a status label is not recognized.
pub const FALLBACK_STATUS_CLASS: &str = "text-secondary";

/// Icon used when a status label is not recognized.
pub const FALLBACK_STATUS_ICON: &str = "fas fa-question-circle";

/// Recency bucket for a connection, based on time since last activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActivityStatus {
    /// Interacted within the active threshold.
    #[default]
    #[serde(rename = "Ativo")]
    Active,
    /// Quiet for longer than the active threshold.
    #[serde(rename = "Inativo")]
    Inactive,
    /// Quiet for longer than the inactive threshold.
    #[serde(rename = "Ausente")]
    Absent,
}

impl ActivityStatus {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Ativo",
            Self::Inactive => "Inativo",
            Self::Absent => "Ausente",
        }
    }

    /// Text colour class for the status indicator.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Active => "text-success",
            Self::Inactive => "text-warning",
            Self::Absent => "text-muted",
        }
    }

    /// Icon class for the status indicator.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Active => "fas fa-circle",
            Self::Inactive => "fas fa-clock",
            Self::Absent => "fas fa-moon",
        }
    }

    /// Parse a display label, case-insensitively.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "ativo" => Some(Self::Active),
            "inativo" => Some(Self::Inactive),
            "ausente" => Some(Self::Absent),
            _ => None,
        }
    }
}

impl std::fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Text colour class for a status label, with a fallback for unknown labels.
pub fn status_class_for(label: &str) -> &'static str {
    ActivityStatus::from_label(label)
        .map(|s| s.css_class())
        .unwrap_or(FALLBACK_STATUS_CLASS)
}

/// Icon class for a status label, with a fallback for unknown labels.
pub fn status_icon_for(label: &str) -> &'static str {
    ActivityStatus::from_label(label)
        .map(|s| s.icon())
        .unwrap_or(FALLBACK_STATUS_ICON)
}

/// Cut-offs between the activity buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenceThresholds {
    /// Below this a connection is [`ActivityStatus::Active`].
    pub active: Duration,
    /// Below this (and at or above `active`) it is [`ActivityStatus::Inactive`].
    pub inactive: Duration,
}

impl PresenceThresholds {
    /// Build thresholds from configuration.
    pub fn from_config(config: &PresenceConfig) -> AppResult<Self> {
        Ok(Self {
            active: config.active_threshold()?,
            inactive: config.inactive_threshold()?,
        })
    }

    /// Bucket an elapsed time since last activity.
    pub fn classify(&self, since_last_activity: Duration) -> ActivityStatus {
        if since_last_activity < self.active {
            ActivityStatus::Active
        } else if since_last_activity < self.inactive {
            ActivityStatus::Inactive
        } else {
            ActivityStatus::Absent
        }
    }
}

impl Default for PresenceThresholds {
    fn default() -> Self {
        Self {
            active: Duration::minutes(2),
            inactive: Duration::minutes(10),
        }
    }
}
