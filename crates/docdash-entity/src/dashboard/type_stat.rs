//! Per-classification breakdown row.

use serde::{Deserialize, Serialize};

/// Share of documents for one classification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeStatistic {
    /// Classification label.
    pub type_name: String,
    /// Documents with this classification.
    pub count: u64,
    /// Share of all documents, 0–100.
    pub percentage: f64,
    /// Progress bar colour class.
    pub progress_class: String,
}
