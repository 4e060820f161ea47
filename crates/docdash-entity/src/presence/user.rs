//! Connected user presence record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ActivityStatus, PresenceThresholds};
use crate::format::format_online_time;

/// A live connection held by a signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectedUser {
    /// Transport connection ID.
    pub connection_id: String,
    /// User ID.
    pub user_id: String,
    /// Display name.
    pub user_name: String,
    /// Email address.
    pub email: String,
    /// When the connection was opened.
    pub connected_at: DateTime<Utc>,
    /// Last heartbeat or interaction.
    pub last_activity: DateTime<Utc>,
    /// Remote IP address.
    pub ip_address: String,
    /// Browser user agent.
    pub user_agent: String,
    /// Whether the connection is still open.
    pub is_active: bool,
}

impl ConnectedUser {
    /// How long the connection has been open, as display text.
    pub fn online_time_at(&self, now: DateTime<Utc>) -> String {
        format_online_time(now - self.connected_at)
    }

    /// Activity bucket using the default two/ten minute thresholds.
    pub fn activity_status_at(&self, now: DateTime<Utc>) -> ActivityStatus {
        self.activity_status_with(now, &PresenceThresholds::default())
    }

    /// Activity bucket using explicit thresholds.
    pub fn activity_status_with(
        &self,
        now: DateTime<Utc>,
        thresholds: &PresenceThresholds,
    ) -> ActivityStatus {
        thresholds.classify(now - self.last_activity)
    }

    /// Text colour class for the activity bucket.
    pub fn status_class_at(&self, now: DateTime<Utc>) -> &'static str {
        self.activity_status_at(now).css_class()
    }

    /// Icon class for the activity bucket.
    pub fn status_icon_at(&self, now: DateTime<Utc>) -> &'static str {
        self.activity_status_at(now).icon()
    }

    /// [`Self::online_time_at`] against the system clock.
    pub fn online_time(&self) -> String {
        self.online_time_at(Utc::now())
    }

    /// [`Self::activity_status_at`] against the system clock.
    pub fn activity_status(&self) -> ActivityStatus {
        self.activity_status_at(Utc::now())
    }

    /// [`Self::status_class_at`] against the system clock.
    pub fn status_class(&self) -> &'static str {
        self.status_class_at(Utc::now())
    }

    /// [`Self::status_icon_at`] against the system clock.
    pub fn status_icon(&self) -> &'static str {
        self.status_icon_at(Utc::now())
    }

    /// Freeze the record and its derived strings for a template.
    pub fn view_at(&self, now: DateTime<Utc>) -> ConnectedUserView {
        self.view_with(now, &PresenceThresholds::default())
    }

    /// [`Self::view_at`] with explicit thresholds.
    pub fn view_with(
        &self,
        now: DateTime<Utc>,
        thresholds: &PresenceThresholds,
    ) -> ConnectedUserView {
        let status = self.activity_status_with(now, thresholds);
        ConnectedUserView {
            user: self.clone(),
            online_time: self.online_time_at(now),
            activity_status: status,
            status_class: status.css_class().to_string(),
            status_icon: status.icon().to_string(),
        }
    }
}

/// A [`ConnectedUser`] with its derived strings resolved at one instant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectedUserView {
    /// The underlying record.
    #[serde(flatten)]
    pub user: ConnectedUser,
    /// Time since connect.
    pub online_time: String,
    /// Activity bucket.
    pub activity_status: ActivityStatus,
    /// Status colour class.
    pub status_class: String,
    /// Status icon class.
    pub status_icon: String,
}
