//! Attendance registry.

use eventease_core::attendance::{Attendance, AttendanceStatus};
use eventease_core::environment::Clock;
use eventease_core::types::{AttendanceId, EventId, UserId};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Records {
    attendances: Vec<Attendance>,
    last_id: u64,
}

/// Registrations of users against events.
///
/// Ids come from a counter that lives as long as the registry: the first
/// registration gets id 1 and ids are never reused. Records are never removed;
/// cancelling is a status change.
///
/// Event ids are not checked against any catalog and duplicate registrations
/// are not prevented here. Callers that care should ask
/// [`AttendanceRegistry::has_registered`] first.
pub struct AttendanceRegistry {
    records: Mutex<Records>,
    clock: Arc<dyn Clock>,
}

impl AttendanceRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            records: Mutex::new(Records::default()),
            clock,
        }
    }

    /// Register `user_id` for `event_id`.
    ///
    /// Always succeeds and returns the new record in `Registered` status.
    pub fn register(&self, event_id: EventId, user_id: UserId) -> Attendance {
        let mut records = self.lock();

        records.last_id += 1;
        let attendance = Attendance::new(
            AttendanceId::new(records.last_id),
            event_id,
            user_id,
            self.clock.now(),
        );
        records.attendances.push(attendance.clone());

        tracing::info!(
            attendance_id = %attendance.id,
            "Registered new attendance: {attendance}"
        );
        attendance
    }

    /// Overwrite the status of an attendance record.
    ///
    /// Any status may replace any other. Moving to `CheckedIn` stamps
    /// `checked_in_at` with the current time; other moves leave it untouched.
    ///
    /// Returns `false` (and changes nothing) when no record has that id.
    pub fn update_status(&self, attendance_id: AttendanceId, new_status: AttendanceStatus) -> bool {
        let mut records = self.lock();

        let Some(attendance) = records
            .attendances
            .iter_mut()
            .find(|a| a.id == attendance_id)
        else {
            tracing::debug!(%attendance_id, "Status update for unknown attendance");
            return false;
        };

        attendance.status = new_status;
        if new_status == AttendanceStatus::CheckedIn {
            attendance.checked_in_at = Some(self.clock.now());
        }

        tracing::info!(
            attendance_id = %attendance.id,
            status = %new_status,
            "Updated attendance status: {attendance}"
        );
        true
    }

    /// Look up a single record.
    #[must_use]
    pub fn get(&self, attendance_id: AttendanceId) -> Option<Attendance> {
        self.lock()
            .attendances
            .iter()
            .find(|a| a.id == attendance_id)
            .cloned()
    }

    /// All records for an event, oldest registration first.
    #[must_use]
    pub fn list_by_event(&self, event_id: EventId) -> Vec<Attendance> {
        let records = self.lock();
        let mut matching: Vec<Attendance> = records
            .attendances
            .iter()
            .filter(|a| a.event_id == event_id)
            .cloned()
            .collect();
        matching.sort_by_key(|a| a.registered_at);
        matching
    }

    /// All records for a user, newest registration first.
    #[must_use]
    pub fn list_by_user(&self, user_id: &UserId) -> Vec<Attendance> {
        let records = self.lock();
        let mut matching: Vec<Attendance> = records
            .attendances
            .iter()
            .filter(|a| &a.user_id == user_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.registered_at.cmp(&a.registered_at));
        matching
    }

    /// Number of records for an event that are not cancelled.
    #[must_use]
    pub fn count_active_attendees(&self, event_id: EventId) -> usize {
        self.lock()
            .attendances
            .iter()
            .filter(|a| a.event_id == event_id && a.status.is_active())
            .count()
    }

    /// Whether the user holds a non-cancelled registration for the event.
    #[must_use]
    pub fn has_registered(&self, event_id: EventId, user_id: &UserId) -> bool {
        self.lock()
            .attendances
            .iter()
            .any(|a| a.event_id == event_id && &a.user_id == user_id && a.status.is_active())
    }

    fn lock(&self) -> MutexGuard<'_, Records> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for AttendanceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let records = self.lock();
        f.debug_struct("AttendanceRegistry")
            .field("attendances", &records.attendances.len())
            .field("last_id", &records.last_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use eventease_testing::{FixedClock, test_clock};

    fn registry() -> (AttendanceRegistry, FixedClock) {
        let clock = test_clock();
        (AttendanceRegistry::new(Arc::new(clock.clone())), clock)
    }

    #[test]
    fn register_then_cancel_changes_active_count() {
        let (registry, _) = registry();
        let event = EventId::new(1);

        let first = registry.register(event, UserId::new("u1"));
        assert_eq!(first.id, AttendanceId::new(1));
        assert_eq!(first.status, AttendanceStatus::Registered);

        let second = registry.register(event, UserId::new("u2"));
        assert_eq!(second.id, AttendanceId::new(2));
        assert_eq!(registry.count_active_attendees(event), 2);

        assert!(registry.update_status(first.id, AttendanceStatus::Cancelled));
        assert_eq!(registry.count_active_attendees(event), 1);
    }

    #[test]
    fn duplicate_registrations_are_allowed() {
        let (registry, _) = registry();
        let event = EventId::new(5);
        let user = UserId::new("u1");

        registry.register(event, user.clone());
        registry.register(event, user.clone());

        assert_eq!(registry.list_by_user(&user).len(), 2);
        assert_eq!(registry.count_active_attendees(event), 2);
    }

    #[test]
    fn unknown_id_update_is_a_no_op() {
        let (registry, _) = registry();
        let existing = registry.register(EventId::new(1), UserId::new("u1"));

        assert!(!registry.update_status(AttendanceId::new(99), AttendanceStatus::CheckedIn));
        assert_eq!(registry.get(existing.id), Some(existing));
    }

    #[test]
    fn check_in_stamps_time_and_keeps_it_after_leaving() {
        let (registry, clock) = registry();
        let attendance = registry.register(EventId::new(1), UserId::new("u1"));

        clock.advance(Duration::minutes(10));
        assert!(registry.update_status(attendance.id, AttendanceStatus::CheckedIn));

        let checked_in = registry.get(attendance.id);
        let stamped = checked_in.as_ref().and_then(|a| a.checked_in_at);
        assert_eq!(stamped, Some(attendance.registered_at + Duration::minutes(10)));
        assert!(checked_in.is_some_and(|a| a.is_checked_in()));

        clock.advance(Duration::minutes(10));
        assert!(registry.update_status(attendance.id, AttendanceStatus::Cancelled));
        let cancelled = registry.get(attendance.id);
        assert_eq!(cancelled.as_ref().and_then(|a| a.checked_in_at), stamped);
        assert!(cancelled.is_some_and(|a| !a.is_checked_in()));
    }

    #[test]
    fn any_status_can_follow_any_other() {
        let (registry, _) = registry();
        let attendance = registry.register(EventId::new(1), UserId::new("u1"));

        for from in AttendanceStatus::ALL {
            for to in AttendanceStatus::ALL {
                assert!(registry.update_status(attendance.id, from));
                assert!(registry.update_status(attendance.id, to));
                assert_eq!(registry.get(attendance.id).map(|a| a.status), Some(to));
            }
        }
    }

    #[test]
    fn listings_are_ordered_by_registration_time() {
        let (registry, clock) = registry();
        let event = EventId::new(1);
        let user = UserId::new("u1");

        for other_event in [event, EventId::new(2), event] {
            registry.register(other_event, user.clone());
            clock.advance(Duration::minutes(1));
        }
        registry.register(event, UserId::new("u2"));

        let by_event: Vec<u64> = registry
            .list_by_event(event)
            .iter()
            .map(|a| a.id.value())
            .collect();
        assert_eq!(by_event, vec![1, 3, 4]);

        let by_user: Vec<u64> = registry
            .list_by_user(&user)
            .iter()
            .map(|a| a.id.value())
            .collect();
        assert_eq!(by_user, vec![3, 2, 1]);
    }

    #[test]
    fn has_registered_ignores_cancelled_records() {
        let (registry, _) = registry();
        let event = EventId::new(1);
        let user = UserId::new("u1");

        assert!(!registry.has_registered(event, &user));
        let attendance = registry.register(event, user.clone());
        assert!(registry.has_registered(event, &user));
        assert!(!registry.has_registered(EventId::new(2), &user));

        registry.update_status(attendance.id, AttendanceStatus::Confirmed);
        assert!(registry.has_registered(event, &user));

        registry.update_status(attendance.id, AttendanceStatus::Cancelled);
        assert!(!registry.has_registered(event, &user));
    }
}
