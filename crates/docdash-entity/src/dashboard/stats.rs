//! Headline counters.

use serde::{Deserialize, Serialize};

/// Counters shown in the dashboard header cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Documents received.
    pub total_documents: u64,
    /// Percentage of finished documents that succeeded.
    pub success_rate: f64,
    /// Users currently active.
    pub active_users: u64,
    /// Documents still being processed.
    pub processing_count: u64,
}
