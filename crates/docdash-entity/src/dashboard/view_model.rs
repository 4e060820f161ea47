//! Top-level dashboard page model.

use serde::{Deserialize, Serialize};

use super::{ChartData, DashboardStats, RecentActivity, TypeStatistic};

/// Everything the dashboard page needs in one value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardViewModel {
    /// Header counters.
    pub stats: DashboardStats,
    /// Most recent documents, newest first.
    pub recent_activities: Vec<RecentActivity>,
    /// Processing volume over time.
    pub chart_data: ChartData,
    /// Breakdown by classification.
    pub type_statistics: Vec<TypeStatistic>,
}
