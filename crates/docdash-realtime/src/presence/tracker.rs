//! Presence tracker. Keeps the set of open connections and their activity.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Duration;
use dashmap::DashMap;

use docdash_core::clock::Clock;
use docdash_core::config::presence::PresenceConfig;
use docdash_core::error::AppError;
use docdash_core::result::AppResult;
use docdash_entity::{ConnectedUser, ConnectedUsersStats, PresenceThresholds};

use super::connection::{ConnectionInfo, ConnectionRecord};

/// Tracks presence for every open connection.
#[derive(Debug)]
pub struct PresenceTracker {
    /// Connection ID → presence record
    connections: DashMap<String, ConnectedUser>,
    /// Activity bucket cut-offs
    thresholds: PresenceThresholds,
    /// Idle time after which a connection is pruned
    stale_after: Duration,
    /// Time source
    clock: Arc<dyn Clock>,
}

impl PresenceTracker {
    /// Create a tracker from configuration.
    pub fn new(config: &PresenceConfig, clock: Arc<dyn Clock>) -> AppResult<Self> {
        Ok(Self {
            connections: DashMap::new(),
            thresholds: PresenceThresholds::from_config(config)?,
            stale_after: config.stale_after()?,
            clock,
        })
    }

    /// Register a newly opened connection.
    ///
    /// A repeated connection ID replaces the earlier record.
    pub fn connect(&self, info: ConnectionInfo) -> ConnectedUser {
        let user = info.into_connected_user(self.clock.now());

        tracing::debug!(
            connection_id = %user.connection_id,
            user_id = %user.user_id,
            "Connection registered"
        );

        if let Some(previous) = self
            .connections
            .insert(user.connection_id.clone(), user.clone())
        {
            tracing::warn!(
                connection_id = %previous.connection_id,
                previous_user = %previous.user_id,
                "Connection ID reused, replacing record"
            );
        }

        user
    }

    /// Insert an existing record unchanged, e.g. when reloading state.
    pub fn restore(&self, user: ConnectedUser) {
        self.connections.insert(user.connection_id.clone(), user);
    }

    /// Load one externally supplied entry.
    ///
    /// Handshakes go through [`connect`](Self::connect), full records
    /// through [`restore`](Self::restore).
    pub fn ingest(&self, record: ConnectionRecord) {
        match record {
            ConnectionRecord::Restored(user) => self.restore(user),
            ConnectionRecord::Handshake(info) => {
                self.connect(info);
            }
        }
    }

    /// Remove a connection.
    pub fn disconnect(&self, connection_id: &str) -> Option<ConnectedUser> {
        let removed = self.connections.remove(connection_id).map(|(_, mut u)| {
            u.is_active = false;
            u
        });

        match &removed {
            Some(u) => tracing::debug!(
                connection_id = %connection_id,
                user_id = %u.user_id,
                "Connection closed"
            ),
            None => tracing::debug!(connection_id = %connection_id, "Disconnect for unknown connection"),
        }

        removed
    }

    /// Touch a connection's last activity.
    pub fn record_activity(&self, connection_id: &str) -> AppResult<()> {
        match self.connections.get_mut(connection_id) {
            Some(mut entry) => {
                entry.last_activity = self.clock.now();
                Ok(())
            }
            None => {
                tracing::warn!(connection_id = %connection_id, "Activity for unknown connection");
                Err(AppError::not_found(format!(
                    "Connection '{connection_id}' is not registered"
                )))
            }
        }
    }

    /// Look up one connection.
    pub fn get(&self, connection_id: &str) -> Option<ConnectedUser> {
        self.connections
            .get(connection_id)
            .map(|r| r.value().clone())
    }

    /// Number of open connections.
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Number of distinct users with at least one open connection.
    pub fn unique_users(&self) -> usize {
        self.connections
            .iter()
            .map(|r| r.value().user_id.clone())
            .collect::<HashSet<_>>()
            .len()
    }

    /// All open connections for one user.
    pub fn connections_for_user(&self, user_id: &str) -> Vec<ConnectedUser> {
        let mut found: Vec<ConnectedUser> = self
            .connections
            .iter()
            .filter(|r| r.value().user_id == user_id)
            .map(|r| r.value().clone())
            .collect();
        sort_for_display(&mut found);
        found
    }

    /// Snapshot of all connections with counts recomputed from the list.
    pub fn snapshot(&self) -> ConnectedUsersStats {
        let mut users: Vec<ConnectedUser> =
            self.connections.iter().map(|r| r.value().clone()).collect();
        sort_for_display(&mut users);

        ConnectedUsersStats::from_users_with(users, self.clock.now(), &self.thresholds)
    }

    /// Drop connections idle for longer than the stale threshold.
    pub fn prune_stale(&self) -> Vec<ConnectedUser> {
        let Some(cutoff) = self.clock.now().checked_sub_signed(self.stale_after) else {
            return Vec::new();
        };

        let stale: Vec<String> = self
            .connections
            .iter()
            .filter(|r| r.value().last_activity < cutoff)
            .map(|r| r.key().clone())
            .collect();

        let mut pruned: Vec<ConnectedUser> = stale
            .iter()
            .filter_map(|id| {
                self.connections
                    .remove_if(id, |_, u| u.last_activity < cutoff)
                    .map(|(_, mut u)| {
                        u.is_active = false;
                        u
                    })
            })
            .collect();
        sort_for_display(&mut pruned);

        if !pruned.is_empty() {
            tracing::info!(count = pruned.len(), "Pruned stale connections");
        }

        pruned
    }

    /// The thresholds used for snapshots.
    pub fn thresholds(&self) -> &PresenceThresholds {
        &self.thresholds
    }
}

fn sort_for_display(users: &mut [ConnectedUser]) {
    users.sort_by(|a, b| {
        a.connected_at
            .cmp(&b.connected_at)
            .then_with(|| a.connection_id.cmp(&b.connection_id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use docdash_core::clock::FixedClock;
    use docdash_core::error::ErrorKind;

    fn setup() -> (Arc<FixedClock>, PresenceTracker) {
        let clock = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2024, 6, 3, 8, 0, 0).unwrap(),
        ));
        let tracker = PresenceTracker::new(&PresenceConfig::default(), clock.clone()).unwrap();
        (clock, tracker)
    }

    fn info(conn: &str, user: &str) -> ConnectionInfo {
        ConnectionInfo {
            connection_id: conn.to_string(),
            user_id: user.to_string(),
            user_name: format!("User {user}"),
            ..Default::default()
        }
    }

    #[test]
    fn test_connect_stamps_clock() {
        let (clock, tracker) = setup();
        let user = tracker.connect(info("c1", "u1"));
        assert_eq!(user.connected_at, clock.now());
        assert_eq!(user.last_activity, clock.now());
        assert!(user.is_active);
        assert_eq!(tracker.connection_count(), 1);
    }

    #[test]
    fn test_new_rejects_out_of_range_config() {
        let clock = Arc::new(FixedClock::new(Utc::now()));

        let config = PresenceConfig {
            active_threshold_seconds: 100_000_000_000_000_000,
            inactive_threshold_seconds: 200_000_000_000_000_000,
            ..Default::default()
        };
        let err = PresenceTracker::new(&config, clock.clone()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);

        let config = PresenceConfig {
            stale_after_seconds: 10_000_000_000_000,
            ..Default::default()
        };
        assert!(PresenceTracker::new(&config, clock).is_err());
    }

    #[test]
    fn test_prune_near_start_of_time() {
        let clock = Arc::new(FixedClock::new(DateTime::<Utc>::MIN_UTC));
        let tracker = PresenceTracker::new(&PresenceConfig::default(), clock.clone()).unwrap();
        tracker.connect(info("c1", "u1"));

        assert!(tracker.prune_stale().is_empty());
        assert_eq!(tracker.connection_count(), 1);
    }

    #[test]
    fn test_connect_reused_id_replaces_record() {
        let (clock, tracker) = setup();
        tracker.connect(info("c1", "u1"));
        clock.advance(Duration::minutes(3));
        tracker.connect(info("c1", "u2"));

        assert_eq!(tracker.connection_count(), 1);
        let current = tracker.get("c1").unwrap();
        assert_eq!(current.user_id, "u2");
        assert_eq!(current.connected_at, clock.now());
    }

    #[test]
    fn test_ingest_routes_by_shape() {
        let (clock, tracker) = setup();
        let earlier = clock.now() - Duration::hours(1);
        tracker.ingest(ConnectionRecord::Restored(ConnectedUser {
            connection_id: "old".to_string(),
            user_id: "u1".to_string(),
            connected_at: earlier,
            last_activity: earlier,
            is_active: true,
            ..Default::default()
        }));
        tracker.ingest(ConnectionRecord::Handshake(info("new", "u2")));

        assert_eq!(tracker.get("old").unwrap().connected_at, earlier);
        assert_eq!(tracker.get("new").unwrap().connected_at, clock.now());
    }

    #[test]
    fn test_record_activity_unknown() {
        let (_, tracker) = setup();
        let err = tracker.record_activity("missing").unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[test]
    fn test_unique_users_counts_distinct() {
        let (_, tracker) = setup();
        tracker.connect(info("c1", "u1"));
        tracker.connect(info("c2", "u1"));
        tracker.connect(info("c3", "u2"));
        assert_eq!(tracker.connection_count(), 3);
        assert_eq!(tracker.unique_users(), 2);
        assert_eq!(tracker.connections_for_user("u1").len(), 2);
    }

    #[test]
    fn test_disconnect_marks_inactive() {
        let (_, tracker) = setup();
        tracker.connect(info("c1", "u1"));
        let removed = tracker.disconnect("c1").unwrap();
        assert!(!removed.is_active);
        assert!(tracker.get("c1").is_none());
        assert!(tracker.disconnect("c1").is_none());
    }

    #[test]
    fn test_snapshot_buckets_and_order() {
        let (clock, tracker) = setup();
        tracker.connect(info("c1", "u1"));
        clock.advance(Duration::minutes(1));
        tracker.connect(info("c2", "u2"));
        clock.advance(Duration::minutes(1));
        tracker.connect(info("c3", "u3"));

        clock.advance(Duration::minutes(4));
        tracker.record_activity("c3").unwrap();
        clock.advance(Duration::seconds(30));

        // c1 idle 6m30s, c2 idle 5m30s, c3 idle 30s
        let stats = tracker.snapshot();
        assert_eq!(stats.total_users, 3);
        assert_eq!(stats.active_users, 1);
        assert_eq!(stats.inactive_users, 2);
        assert_eq!(stats.absent_users, 0);
        assert_eq!(stats.last_updated, clock.now());

        let order: Vec<_> = stats.users.iter().map(|u| u.connection_id.as_str()).collect();
        assert_eq!(order, vec!["c1", "c2", "c3"]);
    }

    #[test]
    fn test_prune_stale() {
        let (clock, tracker) = setup();
        tracker.connect(info("old", "u1"));
        clock.advance(Duration::minutes(25));
        tracker.connect(info("fresh", "u2"));
        clock.advance(Duration::minutes(10));

        let pruned = tracker.prune_stale();
        assert_eq!(pruned.len(), 1);
        assert_eq!(pruned[0].connection_id, "old");
        assert!(!pruned[0].is_active);
        assert_eq!(tracker.connection_count(), 1);
        assert!(tracker.get("fresh").is_some());
    }
}
