//! Scripted visitor traffic over the shared managers.
//!
//! Each visitor runs as its own task, the way request handlers would in a
//! web host: log in, browse, register for an event, then confirm, check in or
//! cancel, and log out.

use crate::services::AppServices;
use eventease_core::attendance::AttendanceStatus;
use eventease_core::types::{EventId, UserId};
use serde::Serialize;
use tokio::task::{JoinError, JoinSet};

/// Attendance figures for one event after the walkthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventSummary {
    /// Event id
    pub event_id: EventId,
    /// Event name
    pub name: String,
    /// Records in any status
    pub registrations: usize,
    /// Records not cancelled
    pub active_attendees: usize,
    /// Records currently checked in
    pub checked_in: usize,
}

/// What the walkthrough did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkthroughReport {
    /// Visitors that completed their script
    pub visitors: usize,
    /// Per-event figures, in catalog order
    pub events: Vec<EventSummary>,
    /// Sessions still active at the end
    pub active_sessions: usize,
}

/// Run `visitors` concurrent visitor scripts and summarize the result.
///
/// Visitor `i` picks upcoming event `i % n` and finishes according to
/// `(i / n) % 3`: checked in, confirmed, or cancelled. With `3 * n` visitors
/// every event sees each outcome once. Visitors who check in stay logged in.
///
/// # Errors
///
/// Returns an error if a visitor task panics.
pub async fn run(services: &AppServices, visitors: usize) -> Result<WalkthroughReport, JoinError> {
    let upcoming = services.catalog.list_upcoming();
    let event_count = upcoming.len().max(1);
    let mut tasks = JoinSet::new();

    for i in 0..visitors {
        let services = services.clone();
        let Some(event) = upcoming.get(i % event_count).cloned() else {
            break;
        };

        tasks.spawn(async move {
            let user = UserId::new(format!("visitor-{i}"));
            let session = services.sessions.create_session(user.clone());

            if !services.sessions.validate(session.session_id) {
                return;
            }
            if services.attendance.has_registered(event.id, &user) {
                return;
            }

            let attendance = services.attendance.register(event.id, user);
            let round = (i / event_count) % 3;
            let outcome = match round {
                0 => AttendanceStatus::CheckedIn,
                1 => AttendanceStatus::Confirmed,
                _ => AttendanceStatus::Cancelled,
            };
            if outcome == AttendanceStatus::CheckedIn {
                services
                    .attendance
                    .update_status(attendance.id, AttendanceStatus::Confirmed);
            }
            services.attendance.update_status(attendance.id, outcome);

            if round != 0 {
                services.sessions.end_session(session.session_id);
            }
        });
    }

    let mut completed = 0;
    while let Some(result) = tasks.join_next().await {
        result?;
        completed += 1;
    }

    let events = upcoming
        .into_iter()
        .map(|event| {
            let records = services.attendance.list_by_event(event.id);
            EventSummary {
                event_id: event.id,
                name: event.name,
                registrations: records.len(),
                active_attendees: services.attendance.count_active_attendees(event.id),
                checked_in: records.iter().filter(|a| a.is_checked_in()).count(),
            }
        })
        .collect();

    Ok(WalkthroughReport {
        visitors: completed,
        events,
        active_sessions: services.sessions.list_active().len(),
    })
}
