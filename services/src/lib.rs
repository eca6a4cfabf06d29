//! # EventEase Services
//!
//! The three in-memory managers behind the EventEase application:
//!
//! - [`EventCatalog`]: the seeded list of events, read-only
//! - [`AttendanceRegistry`]: registrations and their status changes
//! - [`SessionRegistry`]: logged-in user sessions with lazy idle expiry
//!
//! The managers are independent of one another. Each wraps its collection in
//! a single `Mutex` held for the whole of every operation, so operations on
//! one instance are linearized and no operation ever takes a second lock.
//! Queries return owned snapshots.
//!
//! None of the operations fail: a missing record is reported as `None` or
//! `false`. A poisoned lock is recovered rather than propagated, since the
//! guarded data is a plain collection that is never left half-updated.
//!
//! Construct each manager once and share it behind an `Arc`:
//!
//! ```
//! use std::sync::Arc;
//! use eventease_core::environment::SystemClock;
//! use eventease_core::types::UserId;
//! use eventease_services::{AttendanceRegistry, EventCatalog};
//!
//! let clock = Arc::new(SystemClock);
//! let catalog = Arc::new(EventCatalog::new(clock.clone()));
//! let attendance = Arc::new(AttendanceRegistry::new(clock));
//!
//! let event = &catalog.list_upcoming()[0];
//! let user = UserId::new("u1");
//! if !attendance.has_registered(event.id, &user) {
//!     attendance.register(event.id, user);
//! }
//! assert_eq!(attendance.count_active_attendees(event.id), 1);
//! ```

pub mod attendance;
pub mod catalog;
pub mod seed;
pub mod sessions;

pub use attendance::AttendanceRegistry;
pub use catalog::EventCatalog;
pub use sessions::{DEFAULT_SESSION_TIMEOUT_SECS, SessionRegistry};
