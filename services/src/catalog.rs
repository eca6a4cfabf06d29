//! Read-only event catalog.

use crate::seed::{sample_events, start_of_day};
use eventease_core::environment::Clock;
use eventease_core::event::Event;
use eventease_core::types::EventId;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// The list of events users can browse.
///
/// Seeded once at construction and never modified. Reads still go through
/// the catalog's lock so the type keeps the same shape as the mutable
/// registries.
pub struct EventCatalog {
    events: Mutex<Vec<Event>>,
    clock: Arc<dyn Clock>,
}

impl EventCatalog {
    /// Create a catalog seeded with the three sample events.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let events = sample_events(clock.now());
        Self::with_events(clock, events)
    }

    /// Create a catalog seeded with `events`.
    ///
    /// Events are stored as given; nothing is validated.
    #[must_use]
    pub fn with_events(clock: Arc<dyn Clock>, events: Vec<Event>) -> Self {
        tracing::debug!(count = events.len(), "Event catalog seeded");
        Self {
            events: Mutex::new(events),
            clock,
        }
    }

    /// Events dated today or later, earliest first.
    ///
    /// "Today" starts at midnight UTC of the clock's current day, so an
    /// event earlier today is still listed.
    #[must_use]
    pub fn list_upcoming(&self) -> Vec<Event> {
        let events = self.lock();
        let today = start_of_day(self.clock.now());

        let mut upcoming: Vec<Event> = events
            .iter()
            .filter(|event| event.date >= today)
            .cloned()
            .collect();
        upcoming.sort_by_key(|event| event.date);
        upcoming
    }

    /// Look up an event by id.
    #[must_use]
    pub fn get_by_id(&self, id: EventId) -> Option<Event> {
        self.lock().iter().find(|event| event.id == id).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Event>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for EventCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventCatalog")
            .field("events", &self.lock().len())
            .finish_non_exhaustive()
    }
}
