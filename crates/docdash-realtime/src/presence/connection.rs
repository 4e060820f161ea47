//! Connection handshake details.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use docdash_entity::ConnectedUser;

/// What the transport knows about a connection when it opens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectionInfo {
    /// Transport connection ID.
    pub connection_id: String,
    /// User ID.
    pub user_id: String,
    /// Display name.
    pub user_name: String,
    /// Email.
    #[serde(default)]
    pub email: String,
    /// Remote IP.
    #[serde(default)]
    pub ip_address: String,
    /// Browser user agent.
    #[serde(default)]
    pub user_agent: String,
}

/// One entry of a connection list loaded from outside the tracker.
///
/// Full records carry their own timestamps and are restored as-is;
/// handshakes are stamped with the tracker's clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConnectionRecord {
    /// A previously tracked connection.
    Restored(ConnectedUser),
    /// A connection that is opening now.
    Handshake(ConnectionInfo),
}

impl ConnectionInfo {
    /// Turn the handshake into a presence record opened at `now`.
    pub fn into_connected_user(self, now: DateTime<Utc>) -> ConnectedUser {
        ConnectedUser {
            connection_id: self.connection_id,
            user_id: self.user_id,
            user_name: self.user_name,
            email: self.email,
            connected_at: now,
            last_activity: now,
            ip_address: self.ip_address,
            user_agent: self.user_agent,
            is_active: true,
        }
    }
}
