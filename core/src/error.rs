//! Error types for advisory domain validation.

use thiserror::Error;

/// Why an [`Event`](crate::event::Event) fails its advisory validity check.
///
/// Nothing in the managers rejects data with these errors; they are reported
/// to callers that ask via [`Event::validate`](crate::event::Event::validate).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventValidationError {
    /// Name is empty or whitespace.
    #[error("Event name is required")]
    NameRequired,

    /// Name exceeds [`MAX_NAME_LEN`](crate::event::MAX_NAME_LEN) characters.
    #[error("Name is too long (100 character limit)")]
    NameTooLong,

    /// Date is not strictly after the reference time.
    #[error("Event date must be in the future")]
    DateNotInFuture,

    /// Location is empty or whitespace.
    #[error("Location is required")]
    LocationRequired,

    /// Location exceeds [`MAX_LOCATION_LEN`](crate::event::MAX_LOCATION_LEN) characters.
    #[error("Location is too long (200 character limit)")]
    LocationTooLong,

    /// Description exceeds [`MAX_DESCRIPTION_LEN`](crate::event::MAX_DESCRIPTION_LEN) characters.
    #[error("Description is too long (1000 character limit)")]
    DescriptionTooLong,
}
