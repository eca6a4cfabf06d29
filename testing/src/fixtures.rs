//! Catalog fixtures.

use chrono::{DateTime, Duration, Utc};
use eventease_core::event::Event;
use eventease_core::types::EventId;

/// An event dated `days` after `now` (negative for the past).
#[must_use]
pub fn event_in_days(id: u32, days: i64, now: DateTime<Utc>) -> Event {
    Event::new(
        EventId::new(id),
        format!("Event {id}"),
        now + Duration::days(days),
        format!("Venue {id}"),
    )
    .with_description(format!("Fixture event dated {days:+} days from now"))
}

/// Events dated -1, +7 and +14 days from `now`, with ids 1, 2, 3.
#[must_use]
pub fn past_and_upcoming_events(now: DateTime<Utc>) -> Vec<Event> {
    vec![
        event_in_days(1, -1, now),
        event_in_days(2, 14, now),
        event_in_days(3, 7, now),
    ]
}
