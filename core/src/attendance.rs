//! Attendance records and their status lifecycle.

use crate::types::{AttendanceId, EventId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an attendance record sits in its lifecycle.
///
/// The usual path is `Registered → Confirmed → CheckedIn`, with `Cancelled`
/// reachable from anywhere. Transitions are not restricted: any status can be
/// replaced by any other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Initial status after registration
    #[default]
    Registered,
    /// Attendance confirmed by the user or organiser
    Confirmed,
    /// User arrived at the event
    CheckedIn,
    /// Registration withdrawn; the record is kept
    Cancelled,
}

impl AttendanceStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [Self; 4] = [
        Self::Registered,
        Self::Confirmed,
        Self::CheckedIn,
        Self::Cancelled,
    ];

    /// Whether a record with this status counts as an active attendee.
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Registered => "Registered",
            Self::Confirmed => "Confirmed",
            Self::CheckedIn => "CheckedIn",
            Self::Cancelled => "Cancelled",
        };
        f.write_str(name)
    }
}

/// A user's registration against an event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendance {
    /// Sequential identifier assigned by the registry
    pub id: AttendanceId,
    /// Event the user registered for (not checked against the catalog)
    pub event_id: EventId,
    /// Registering user
    pub user_id: UserId,
    /// When the registration was made
    pub registered_at: DateTime<Utc>,
    /// Time of the most recent transition to `CheckedIn`.
    ///
    /// Left in place when the status later moves away from `CheckedIn`.
    pub checked_in_at: Option<DateTime<Utc>>,
    /// Current lifecycle status
    pub status: AttendanceStatus,
}

impl Attendance {
    /// Create a freshly registered record.
    #[must_use]
    pub const fn new(
        id: AttendanceId,
        event_id: EventId,
        user_id: UserId,
        registered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            event_id,
            user_id,
            registered_at,
            checked_in_at: None,
            status: AttendanceStatus::Registered,
        }
    }

    /// Whether the user is currently checked in with a recorded check-in time.
    #[must_use]
    pub const fn is_checked_in(&self) -> bool {
        matches!(self.status, AttendanceStatus::CheckedIn) && self.checked_in_at.is_some()
    }
}

impl fmt::Display for Attendance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Attendance[{}]: Event {}, User {}, Status: {}",
            self.id, self.event_id, self.user_id, self.status
        )
    }
}
