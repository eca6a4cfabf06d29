//! # EventEase Testing
//!
//! Testing utilities and helpers for the EventEase core.
//!
//! This crate provides:
//! - A controllable [`Clock`] implementation
//! - Fixtures for catalog events
//! - Property-based testing strategies for domain types
//!
//! ## Example
//!
//! ```
//! use eventease_testing::test_clock;
//! use eventease_core::environment::Clock;
//! use chrono::Duration;
//!
//! let clock = test_clock();
//! let start = clock.now();
//! clock.advance(Duration::hours(3));
//! assert_eq!(clock.now() - start, Duration::hours(3));
//! ```

use chrono::{DateTime, Utc};
use eventease_core::environment::Clock;

pub mod fixtures;

/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};
    use chrono::Duration;
    use std::sync::{Arc, Mutex, PoisonError};

    /// Fixed clock for deterministic tests
    ///
    /// Returns the same time until a test moves it with [`FixedClock::advance`]
    /// or [`FixedClock::set`]. Clones share the same time, so a test can keep
    /// one handle while a manager owns another.
    ///
    /// # Example
    ///
    /// ```
    /// use eventease_testing::mocks::FixedClock;
    /// use eventease_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: Arc<Mutex<DateTime<Utc>>>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub fn new(time: DateTime<Utc>) -> Self {
            Self {
                time: Arc::new(Mutex::new(time)),
            }
        }

        /// Move the clock forward (or backward, for a negative duration)
        pub fn advance(&self, by: Duration) {
            let mut time = self.time.lock().unwrap_or_else(PoisonError::into_inner);
            *time += by;
        }

        /// Jump to an absolute time
        pub fn set(&self, to: DateTime<Utc>) {
            *self.time.lock().unwrap_or_else(PoisonError::into_inner) = to;
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            *self.time.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

/// Test helpers and utilities
pub mod helpers {
    /// Install a `tracing` subscriber that writes through the test harness.
    ///
    /// Safe to call from every test; only the first call installs it.
    pub fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "eventease_services=debug,eventease_app=debug".into()),
            )
            .with_test_writer()
            .try_init();
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use eventease_core::attendance::AttendanceStatus;
    use eventease_core::types::{EventId, UserId};
    use proptest::prelude::*;
    use proptest::sample::select;

    /// Any attendance status
    pub fn status() -> impl Strategy<Value = AttendanceStatus> {
        select(AttendanceStatus::ALL.to_vec())
    }

    /// Event ids drawn from a small range so registrations collide
    pub fn event_id() -> impl Strategy<Value = EventId> {
        (1u32..=4).prop_map(EventId::new)
    }

    /// User ids drawn from a small pool so registrations collide
    pub fn user_id() -> impl Strategy<Value = UserId> {
        select(vec!["u1", "u2", "u3", "u4", "u5"]).prop_map(UserId::new)
    }

    /// A registration request: `(event, user, status to apply afterwards, minutes to advance)`
    pub fn registration() -> impl Strategy<Value = (EventId, UserId, AttendanceStatus, i64)> {
        (event_id(), user_id(), status(), 0i64..=90)
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, test_clock};
