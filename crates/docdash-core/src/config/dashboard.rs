//! Dashboard assembly configuration.

use serde::{Deserialize, Serialize};

/// Longest chart window, in days.
pub const MAX_CHART_DAYS: u32 = 366;

/// Dashboard view-model assembly settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Maximum number of entries in the recent activity list.
    #[serde(default = "default_recent_limit")]
    pub recent_activity_limit: usize,
    /// Number of days covered by the processing chart, ending today.
    #[serde(default = "default_chart_days")]
    pub chart_days: u32,
    /// Label used for documents without a classification.
    #[serde(default = "default_unclassified_label")]
    pub unclassified_label: String,
    /// CSS classes cycled across classifications for badges and progress bars.
    #[serde(default = "default_badge_palette")]
    pub badge_palette: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_activity_limit: default_recent_limit(),
            chart_days: default_chart_days(),
            unclassified_label: default_unclassified_label(),
            badge_palette: default_badge_palette(),
        }
    }
}

fn default_recent_limit() -> usize {
    10
}

fn default_chart_days() -> u32 {
    7
}

fn default_unclassified_label() -> String {
    "Não classificado".to_string()
}

fn default_badge_palette() -> Vec<String> {
    vec![
        "bg-primary".to_string(),
        "bg-success".to_string(),
        "bg-info".to_string(),
        "bg-warning".to_string(),
        "bg-danger".to_string(),
        "bg-secondary".to_string(),
    ]
}
