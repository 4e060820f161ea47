//! # docdash-realtime
//!
//! Presence registry for DocDash. A transport layer calls into
//! [`PresenceTracker`] on connect, heartbeat, and disconnect; the tracker
//! produces [`ConnectedUsersStats`](docdash_entity::ConnectedUsersStats)
//! snapshots for the admin view.

pub mod presence;

pub use presence::{ConnectionInfo, ConnectionRecord, PresenceTracker};
