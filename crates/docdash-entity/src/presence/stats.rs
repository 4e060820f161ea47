//! Connected users aggregate snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ActivityStatus, ConnectedUser, PresenceThresholds};

/// Point-in-time breakdown of connected users by activity bucket.
///
/// Fields are public and unchecked; use [`ConnectedUsersStats::from_users`]
/// to get counts that agree with `users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectedUsersStats {
    /// Number of entries in `users`.
    pub total_users: usize,
    /// Entries currently active.
    pub active_users: usize,
    /// Entries currently inactive.
    pub inactive_users: usize,
    /// Entries currently absent.
    pub absent_users: usize,
    /// The connections, in display order.
    pub users: Vec<ConnectedUser>,
    /// When the snapshot was taken.
    pub last_updated: DateTime<Utc>,
}

impl ConnectedUsersStats {
    /// Build a snapshot with counts derived from `users` at `now`.
    pub fn from_users(users: Vec<ConnectedUser>, now: DateTime<Utc>) -> Self {
        Self::from_users_with(users, now, &PresenceThresholds::default())
    }

    /// [`Self::from_users`] with explicit thresholds.
    pub fn from_users_with(
        users: Vec<ConnectedUser>,
        now: DateTime<Utc>,
        thresholds: &PresenceThresholds,
    ) -> Self {
        let (active, inactive, absent) = count_buckets(&users, now, thresholds);
        Self {
            total_users: users.len(),
            active_users: active,
            inactive_users: inactive,
            absent_users: absent,
            users,
            last_updated: now,
        }
    }

    /// Whether the stored counts match a recount of `users` at `now`.
    pub fn is_consistent(&self, now: DateTime<Utc>) -> bool {
        let (active, inactive, absent) =
            count_buckets(&self.users, now, &PresenceThresholds::default());
        self.total_users == self.users.len()
            && self.active_users == active
            && self.inactive_users == inactive
            && self.absent_users == absent
    }
}

fn count_buckets(
    users: &[ConnectedUser],
    now: DateTime<Utc>,
    thresholds: &PresenceThresholds,
) -> (usize, usize, usize) {
    users.iter().fold((0, 0, 0), |(a, i, x), u| {
        match u.activity_status_with(now, thresholds) {
            ActivityStatus::Active => (a + 1, i, x),
            ActivityStatus::Inactive => (a, i + 1, x),
            ActivityStatus::Absent => (a, i, x + 1),
        }
    })
}
