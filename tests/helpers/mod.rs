//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use serde::de::DeserializeOwned;

use docdash_core::clock::FixedClock;
use docdash_core::config::AppConfig;
use docdash_entity::ConnectedUser;
use docdash_realtime::{ConnectionRecord, PresenceTracker};
use docdash_service::{DashboardBuilder, ProcessedDocument};

/// The instant all fixtures are written against.
pub fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 10, 15, 0, 0).unwrap()
}

/// Test context wired like the CLI, with a frozen clock
pub struct TestContext {
    /// Frozen clock shared by all components
    pub clock: Arc<FixedClock>,
    /// Default configuration
    pub config: AppConfig,
    /// Presence tracker
    pub tracker: PresenceTracker,
    /// Dashboard builder
    pub builder: DashboardBuilder,
}

impl TestContext {
    /// Create a new context at [`fixture_now`]
    pub fn new() -> Self {
        let clock = Arc::new(FixedClock::new(fixture_now()));
        let config = AppConfig::default();
        let tracker = PresenceTracker::new(&config.presence, clock.clone())
            .expect("default presence config is valid");
        let builder = DashboardBuilder::new(config.dashboard.clone(), clock.clone())
            .expect("default dashboard config is valid");

        Self {
            clock,
            config,
            tracker,
            builder,
        }
    }

    /// Load the connection fixture into the tracker
    pub fn with_connections(self) -> Self {
        for user in connections() {
            self.tracker.restore(user);
        }
        self
    }
}

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load<T: DeserializeOwned>(name: &str) -> T {
    let raw = std::fs::read_to_string(fixture_path(name)).expect("fixture should exist");
    serde_json::from_str(&raw).expect("fixture should parse")
}

/// Processed document fixture
pub fn documents() -> Vec<ProcessedDocument> {
    load("documents.json")
}

/// Connected user fixture
pub fn connections() -> Vec<ConnectedUser> {
    load("connections.json")
}

/// Mixed handshake and full-record fixture
pub fn handshakes() -> Vec<ConnectionRecord> {
    load("handshakes.json")
}
