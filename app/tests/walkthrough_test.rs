//! Walkthrough over the composed services.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use chrono::Duration;
use eventease_app::{AppServices, Config, walkthrough};
use eventease_core::attendance::AttendanceStatus;
use eventease_testing::helpers::init_test_tracing;
use eventease_testing::test_clock;
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_walkthrough_spreads_visitors_over_events() {
    init_test_tracing();
    let services = AppServices::new(&Config::default(), Arc::new(test_clock()));

    let report = walkthrough::run(&services, 9).await.unwrap();

    assert_eq!(report.visitors, 9);
    assert_eq!(report.events.len(), 3);
    for summary in &report.events {
        // Visitors i, i+3, i+6 share event i and finish checked in, confirmed
        // and cancelled in that order.
        assert_eq!(summary.registrations, 3);
        assert_eq!(summary.active_attendees, 2);
        assert_eq!(summary.checked_in, 1);
    }
    // Visitors 0, 1, 2 checked in and stay logged in.
    assert_eq!(report.active_sessions, 3);
}

#[tokio::test]
async fn test_each_event_sees_every_outcome() {
    let services = AppServices::new(&Config::default(), Arc::new(test_clock()));

    walkthrough::run(&services, 9).await.unwrap();

    for event in services.catalog.list_upcoming() {
        let statuses: Vec<AttendanceStatus> = services
            .attendance
            .list_by_event(event.id)
            .into_iter()
            .map(|a| a.status)
            .collect();
        assert_eq!(statuses.len(), 3, "event {}", event.id);
        for outcome in [
            AttendanceStatus::CheckedIn,
            AttendanceStatus::Confirmed,
            AttendanceStatus::Cancelled,
        ] {
            assert!(statuses.contains(&outcome), "event {} missing {outcome}", event.id);
        }
    }
}

#[tokio::test]
async fn test_walkthrough_with_empty_catalog_does_nothing() {
    let mut config = Config::default();
    config.catalog.seed_sample_events = false;
    let services = AppServices::new(&config, Arc::new(test_clock()));

    let report = walkthrough::run(&services, 5).await.unwrap();

    assert_eq!(report.visitors, 0);
    assert!(report.events.is_empty());
    assert_eq!(report.active_sessions, 0);
}

#[tokio::test]
async fn test_sessions_expire_with_configured_timeout() {
    let clock = test_clock();
    let config = Config::from_lookup(|key| {
        (key == "EVENTEASE_SESSION_TIMEOUT_SECS").then(|| "600".to_string())
    })
    .unwrap();
    let services = AppServices::new(&config, Arc::new(clock.clone()));

    walkthrough::run(&services, 6).await.unwrap();
    assert_eq!(services.sessions.list_active().len(), 3);

    clock.advance(Duration::minutes(11));
    assert!(services.sessions.list_active().is_empty());
}
