//! Dashboard view models.
//!
//! These shapes exist only to be rendered. They are populated by
//! `docdash-service` or by any other caller and carry no behavior beyond
//! defaults and the chart length check.

pub mod activity;
pub mod chart;
pub mod stats;
pub mod type_stat;
pub mod view_model;

pub use activity::RecentActivity;
pub use chart::ChartData;
pub use stats::DashboardStats;
pub use type_stat::TypeStatistic;
pub use view_model::DashboardViewModel;
