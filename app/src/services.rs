//! Composition root: one shared instance of each manager per process.

use crate::config::Config;
use eventease_core::environment::Clock;
use eventease_services::{AttendanceRegistry, EventCatalog, SessionRegistry};
use std::sync::Arc;

/// The long-lived managers a host hands to its request handlers.
///
/// Cloning is cheap and every clone points at the same managers.
#[derive(Clone, Debug)]
pub struct AppServices {
    /// Event catalog
    pub catalog: Arc<EventCatalog>,
    /// Attendance registry
    pub attendance: Arc<AttendanceRegistry>,
    /// Session registry
    pub sessions: Arc<SessionRegistry>,
}

impl AppServices {
    /// Build all managers from configuration, sharing one clock.
    #[must_use]
    pub fn new(config: &Config, clock: Arc<dyn Clock>) -> Self {
        let catalog = if config.catalog.seed_sample_events {
            EventCatalog::new(Arc::clone(&clock))
        } else {
            EventCatalog::with_events(Arc::clone(&clock), Vec::new())
        };

        let services = Self {
            catalog: Arc::new(catalog),
            attendance: Arc::new(AttendanceRegistry::new(Arc::clone(&clock))),
            sessions: Arc::new(SessionRegistry::with_timeout(
                clock,
                config.session_timeout(),
            )),
        };

        tracing::info!(
            seed_sample_events = config.catalog.seed_sample_events,
            session_timeout_secs = config.sessions.timeout_secs,
            "Application services initialized"
        );
        services
    }
}
