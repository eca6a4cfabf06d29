//! Sample events the catalog is seeded with.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use eventease_core::event::Event;
use eventease_core::types::EventId;

/// Midnight UTC at the start of the day containing `now`.
#[must_use]
pub fn start_of_day(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// The three demo events, dated relative to the start of `now`'s day.
#[must_use]
pub fn sample_events(now: DateTime<Utc>) -> Vec<Event> {
    let today = start_of_day(now);

    vec![
        Event::new(
            EventId::new(1),
            "Corporate Summit 2026",
            today + Duration::days(14),
            "Seattle Convention Center",
        )
        .with_description("A full-day event for corporate partners and stakeholders."),
        Event::new(
            EventId::new(2),
            "Charity Gala",
            today + Duration::days(30),
            "Grand Ballroom, City Hotel",
        )
        .with_description("An evening gala to raise funds for local charities."),
        Event::new(
            EventId::new(3),
            "Team Offsite",
            today + Duration::days(7),
            "Lakeside Retreat",
        )
        .with_description("A two-day team-building offsite with workshops and activities."),
    ]
}
