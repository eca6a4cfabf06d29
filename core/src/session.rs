//! User sessions.

use crate::types::{SessionId, UserId};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An activity token for a logged-in user.
///
/// Expiry is idle-based: a session times out once more than the registry's
/// timeout has passed since `last_activity`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    /// Opaque token identifying the session
    pub session_id: SessionId,
    /// Owner of the session
    pub user_id: UserId,
    /// Session creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last successful validation (or creation)
    pub last_activity: DateTime<Utc>,
    /// Cleared when the session is ended explicitly
    pub is_active: bool,
}

impl UserSession {
    /// Start a new active session for `user_id` at `now`.
    #[must_use]
    pub fn new(user_id: UserId, now: DateTime<Utc>) -> Self {
        Self {
            session_id: SessionId::new(),
            user_id,
            created_at: now,
            last_activity: now,
            is_active: true,
        }
    }

    /// Time elapsed since the session was created.
    #[must_use]
    pub fn duration(&self, now: DateTime<Utc>) -> Duration {
        now - self.created_at
    }

    /// Whether more than `timeout` has passed since the last activity.
    #[must_use]
    pub fn has_timed_out(&self, timeout: Duration, now: DateTime<Utc>) -> bool {
        now - self.last_activity > timeout
    }
}

impl fmt::Display for UserSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Session[{}] for User {} - Active: {}",
            self.session_id, self.user_id, self.is_active
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_strictly_greater_than() {
        let start = Utc::now();
        let session = UserSession::new(UserId::new("carol"), start);
        let timeout = Duration::hours(2);

        assert!(!session.has_timed_out(timeout, start + timeout));
        assert!(session.has_timed_out(timeout, start + timeout + Duration::seconds(1)));
    }

    #[test]
    fn duration_counts_from_creation() {
        let start = Utc::now();
        let mut session = UserSession::new(UserId::new("carol"), start);
        session.last_activity = start + Duration::minutes(30);
        assert_eq!(session.duration(start + Duration::minutes(45)), Duration::minutes(45));
    }

    #[test]
    fn new_sessions_are_active() {
        let session = UserSession::new(UserId::new("dave"), Utc::now());
        assert!(session.is_active);
        assert_eq!(session.created_at, session.last_activity);
        assert!(session.to_string().ends_with("for User dave - Active: true"));
    }
}
