//! Dashboard assembly.

pub mod builder;
pub mod document;
pub mod icons;

pub use builder::DashboardBuilder;
pub use document::{ProcessedDocument, ProcessingStatus};
