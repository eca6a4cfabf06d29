//! # EventEase Core
//!
//! Domain types and injected dependencies for the EventEase event-management core.
//!
//! This crate provides the vocabulary shared by the in-memory managers in
//! `eventease-services`:
//!
//! - **Event**: a scheduled occasion, seeded once and never mutated
//! - **Attendance**: a user's registration against an event, with a status lifecycle
//! - **`UserSession`**: a time-bounded activity token for a user
//! - **Clock**: the time source every manager reads `now` from
//!
//! ## Example
//!
//! ```
//! use eventease_core::attendance::{Attendance, AttendanceStatus};
//! use eventease_core::types::{AttendanceId, EventId, UserId};
//! use chrono::Utc;
//!
//! let attendance = Attendance::new(
//!     AttendanceId::new(1),
//!     EventId::new(3),
//!     UserId::new("u1"),
//!     Utc::now(),
//! );
//!
//! assert_eq!(attendance.status, AttendanceStatus::Registered);
//! assert_eq!(
//!     attendance.to_string(),
//!     "Attendance[1]: Event 3, User u1, Status: Registered"
//! );
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Duration, Utc};
pub use serde::{Deserialize, Serialize};

pub mod attendance;
pub mod error;
pub mod event;
pub mod session;
pub mod types;

/// Environment module - Dependency injection traits
///
/// Everything a manager needs from the outside world is abstracted behind a
/// trait here and injected at construction.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use eventease_core::environment::{Clock, SystemClock};
    ///
    /// let clock = SystemClock;
    /// let earlier = clock.now();
    /// assert!(clock.now() >= earlier);
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}
