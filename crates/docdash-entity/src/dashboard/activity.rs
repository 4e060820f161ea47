//! Recent activity feed entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row in the recent activity feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecentActivity {
    pub file_name: String,
    pub classification: String,
    pub processed_at: DateTime<Utc>,
    /// Lowercase, without the dot.
    pub file_extension: String,
    pub time_ago: String,
    pub badge_class: String,
    pub icon_class: String,
}
