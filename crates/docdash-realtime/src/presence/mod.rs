//! User presence tracking.

pub mod connection;
pub mod tracker;

pub use connection::{ConnectionInfo, ConnectionRecord};
pub use tracker::PresenceTracker;
