//! # docdash-service
//!
//! Builds dashboard view models from processed document records. The
//! records come from whatever data-access layer the host application uses;
//! nothing here performs I/O.

pub mod dashboard;

pub use dashboard::{DashboardBuilder, ProcessedDocument, ProcessingStatus};
