//! Integration tests for presence tracking and connected-user snapshots.

mod helpers;

use chrono::Duration;

use docdash_entity::ActivityStatus;
use docdash_realtime::{ConnectionInfo, ConnectionRecord};

#[test]
fn test_fixture_snapshot_counts() {
    let ctx = helpers::TestContext::new().with_connections();

    let stats = ctx.tracker.snapshot();

    // ana-1 idle 90s, ana-2 idle 5m, bruno idle 20m, carla idle 5h30m
    assert_eq!(stats.total_users, 4);
    assert_eq!(stats.active_users, 1);
    assert_eq!(stats.inactive_users, 1);
    assert_eq!(stats.absent_users, 2);
    assert!(stats.is_consistent(helpers::fixture_now()));
    assert_eq!(ctx.tracker.unique_users(), 3);
}

#[test]
fn test_fixture_snapshot_order_and_views() {
    let ctx = helpers::TestContext::new().with_connections();
    let stats = ctx.tracker.snapshot();

    let order: Vec<_> = stats.users.iter().map(|u| u.connection_id.as_str()).collect();
    assert_eq!(order, vec!["c-carla", "c-bruno", "c-ana-1", "c-ana-2"]);

    let ana = &stats.users[2];
    assert_eq!(ana.online_time_at(stats.last_updated), "1h 1m");
    assert_eq!(ana.activity_status_at(stats.last_updated), ActivityStatus::Active);
    assert_eq!(ana.status_class_at(stats.last_updated), "text-success");

    let bruno = stats.users[1].view_at(stats.last_updated);
    assert_eq!(bruno.online_time, "3h 0m");
    assert_eq!(bruno.activity_status, ActivityStatus::Absent);
    assert_eq!(bruno.status_class, "text-muted");
}

#[test]
fn test_heartbeat_moves_user_between_buckets() {
    let ctx = helpers::TestContext::new();
    ctx.tracker.connect(ConnectionInfo {
        connection_id: "c1".to_string(),
        user_id: "u1".to_string(),
        user_name: "Davi".to_string(),
        ..Default::default()
    });

    ctx.clock.advance(Duration::minutes(5));
    assert_eq!(ctx.tracker.snapshot().inactive_users, 1);

    ctx.tracker.record_activity("c1").unwrap();
    ctx.clock.advance(Duration::seconds(45));
    let stats = ctx.tracker.snapshot();
    assert_eq!(stats.active_users, 1);
    assert_eq!(stats.users[0].online_time_at(stats.last_updated), "5m");

    ctx.clock.advance(Duration::minutes(15));
    assert_eq!(ctx.tracker.snapshot().absent_users, 1);
}

#[test]
fn test_prune_fixture_connections() {
    let ctx = helpers::TestContext::new().with_connections();

    let pruned = ctx.tracker.prune_stale();
    assert_eq!(pruned.len(), 1);
    assert_eq!(pruned[0].connection_id, "c-carla");
    assert_eq!(ctx.tracker.connection_count(), 3);
}

#[test]
fn test_snapshot_json_shape() {
    let ctx = helpers::TestContext::new().with_connections();
    let json = serde_json::to_value(ctx.tracker.snapshot()).unwrap();

    assert_eq!(json["total_users"], 4);
    assert!(json["users"].is_array());
    assert_eq!(json["users"][0]["user_name"], "Carla Dias");
    assert!(json["last_updated"].is_string());
}

#[test]
fn test_handshake_fixture_is_stamped_with_clock() {
    let ctx = helpers::TestContext::new();
    let records = helpers::handshakes();
    assert!(matches!(records[0], ConnectionRecord::Handshake(_)));
    assert!(matches!(records[2], ConnectionRecord::Restored(_)));

    for record in records {
        ctx.tracker.ingest(record);
    }

    let elisa = ctx.tracker.get("c-elisa").unwrap();
    assert_eq!(elisa.connected_at, helpers::fixture_now());
    assert_eq!(elisa.ip_address, "10.0.0.21");
    assert!(elisa.is_active);
    assert_eq!(ctx.tracker.get("c-fabio").unwrap().email, "");

    // two fresh handshakes plus bruno idle 20m
    let stats = ctx.tracker.snapshot();
    assert_eq!(stats.total_users, 3);
    assert_eq!(stats.active_users, 2);
    assert_eq!(stats.absent_users, 1);
    assert_eq!(stats.users[0].connection_id, "c-bruno");
}
