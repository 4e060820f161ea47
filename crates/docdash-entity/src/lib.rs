//! # docdash-entity
//!
//! Presence records and dashboard view models for DocDash. Every struct
//! in this crate is a transient value built per render cycle by whichever
//! caller owns it. All records derive `Debug`, `Clone`, `Default`,
//! `Serialize`, and `Deserialize`.

pub mod dashboard;
pub mod format;
pub mod presence;

pub use dashboard::{ChartData, DashboardStats, DashboardViewModel, RecentActivity, TypeStatistic};
pub use presence::{
    ActivityStatus, ConnectedUser, ConnectedUserView, ConnectedUsersStats, PresenceThresholds,
};
