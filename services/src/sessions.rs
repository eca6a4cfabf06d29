//! Session registry with lazy idle expiry.

use chrono::Duration;
use eventease_core::environment::Clock;
use eventease_core::session::UserSession;
use eventease_core::types::{SessionId, UserId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Idle timeout applied by [`SessionRegistry::new`]: two hours.
pub const DEFAULT_SESSION_TIMEOUT_SECS: i64 = 2 * 60 * 60;

/// Live user sessions keyed by token.
///
/// Expiry is lazy. A session idle for longer than the timeout is only
/// removed when someone calls [`SessionRegistry::validate`] on it;
/// [`SessionRegistry::list_active`] hides such sessions but leaves them in
/// place. There is no background sweep.
pub struct SessionRegistry {
    sessions: Mutex<HashMap<SessionId, UserSession>>,
    clock: Arc<dyn Clock>,
    timeout: Duration,
}

impl SessionRegistry {
    /// Create an empty registry with the default two-hour idle timeout.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_timeout(clock, Duration::seconds(DEFAULT_SESSION_TIMEOUT_SECS))
    }

    /// Create an empty registry with a custom idle timeout.
    #[must_use]
    pub fn with_timeout(clock: Arc<dyn Clock>, timeout: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            clock,
            timeout,
        }
    }

    /// The idle timeout this registry applies.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Open a new session for `user_id`.
    pub fn create_session(&self, user_id: UserId) -> UserSession {
        let mut sessions = self.lock();

        let session = UserSession::new(user_id, self.clock.now());
        sessions.insert(session.session_id, session.clone());

        tracing::info!(
            session_id = %session.session_id,
            user_id = %session.user_id,
            "Created new session: {session}"
        );
        session
    }

    /// Check that a session exists and has not idled out.
    ///
    /// A live session has its `last_activity` refreshed. A session idle for
    /// longer than the timeout is evicted and reported as invalid.
    pub fn validate(&self, session_id: SessionId) -> bool {
        let mut sessions = self.lock();
        let now = self.clock.now();

        let Some(session) = sessions.get_mut(&session_id) else {
            return false;
        };

        if session.has_timed_out(self.timeout, now) {
            let minutes = minutes(session.duration(now));
            tracing::warn!(
                %session_id,
                duration_minutes = minutes,
                "Session timed out: {session}"
            );
            sessions.remove(&session_id);
            return false;
        }

        session.last_activity = now;
        true
    }

    /// End a session explicitly.
    ///
    /// Returns the ended session (marked inactive), or `None` when no session
    /// has that id.
    pub fn end_session(&self, session_id: SessionId) -> Option<UserSession> {
        let mut sessions = self.lock();

        let mut session = sessions.remove(&session_id)?;
        session.is_active = false;

        tracing::info!(
            %session_id,
            duration_minutes = minutes(session.duration(self.clock.now())),
            "Ended session: {session}"
        );
        Some(session)
    }

    /// Sessions that are active and within the timeout right now, oldest first.
    ///
    /// Timed-out sessions are skipped but not evicted.
    #[must_use]
    pub fn list_active(&self) -> Vec<UserSession> {
        let sessions = self.lock();
        let now = self.clock.now();

        let mut active: Vec<UserSession> = sessions
            .values()
            .filter(|s| s.is_active && !s.has_timed_out(self.timeout, now))
            .cloned()
            .collect();
        active.sort_by_key(|s| s.created_at);
        active
    }

    /// Look up a session without refreshing or evicting it.
    #[must_use]
    pub fn get(&self, session_id: SessionId) -> Option<UserSession> {
        self.lock().get(&session_id).cloned()
    }

    /// Number of stored sessions, including timed-out ones not yet evicted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no sessions are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, UserSession>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for SessionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRegistry")
            .field("sessions", &self.len())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[allow(clippy::cast_precision_loss)]
fn minutes(duration: Duration) -> f64 {
    (duration.num_seconds() as f64 / 6.0).round() / 10.0
}
