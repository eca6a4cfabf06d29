//! Catalog events.
//!
//! An [`Event`] is created once when the catalog is seeded and never changes
//! afterwards. Field constraints (required name and location, length limits,
//! a date in the future) are advisory: [`Event::validate`] reports them, but
//! nothing refuses to store an event that breaks them.

use crate::error::EventValidationError;
use crate::types::EventId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of [`Event::name`], in characters.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of [`Event::location`], in characters.
pub const MAX_LOCATION_LEN: usize = 200;

/// Maximum length of [`Event::description`], in characters.
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// A scheduled occasion users can register for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier, assigned at seed time
    pub id: EventId,
    /// Display name
    pub name: String,
    /// When the event takes place
    pub date: DateTime<Utc>,
    /// Where the event takes place
    pub location: String,
    /// Optional free-form description
    pub description: Option<String>,
}

impl Event {
    /// Create an event without a description.
    #[must_use]
    pub fn new(
        id: EventId,
        name: impl Into<String>,
        date: DateTime<Utc>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            date,
            location: location.into(),
            description: None,
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check the event against its field constraints, relative to `now`.
    ///
    /// Rules are checked in field order and the first violation is returned.
    ///
    /// # Errors
    ///
    /// Returns the first [`EventValidationError`] the event violates.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), EventValidationError> {
        if self.name.trim().is_empty() {
            return Err(EventValidationError::NameRequired);
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(EventValidationError::NameTooLong);
        }
        if self.date <= now {
            return Err(EventValidationError::DateNotInFuture);
        }
        if self.location.trim().is_empty() {
            return Err(EventValidationError::LocationRequired);
        }
        if self.location.chars().count() > MAX_LOCATION_LEN {
            return Err(EventValidationError::LocationTooLong);
        }
        if self
            .description
            .as_ref()
            .is_some_and(|d| d.chars().count() > MAX_DESCRIPTION_LEN)
        {
            return Err(EventValidationError::DescriptionTooLong);
        }
        Ok(())
    }

    /// Advisory validity predicate; see [`Event::validate`].
    #[must_use]
    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        self.validate(now).is_ok()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event[{}]: {} on {} at {}",
            self.id,
            self.name,
            self.date.format("%Y-%m-%d"),
            self.location
        )
    }
}
