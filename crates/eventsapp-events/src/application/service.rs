//! The event service handle.

use std::sync::Arc;

use eventsapp_core::repository::{CategoryRepository, EventRepository};

/// Event operations over injected event and category repositories.
///
/// The category repository is only read, to check references before an
/// event is written.
#[derive(Clone)]
pub struct EventService {
    pub(crate) events: Arc<dyn EventRepository>,
    pub(crate) categories: Arc<dyn CategoryRepository>,
}

impl EventService {
    /// Creates a service backed by the given repositories.
    #[must_use]
    pub fn new(
        events: Arc<dyn EventRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self { events, categories }
    }
}

impl std::fmt::Debug for EventService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventService").finish_non_exhaustive()
    }
}
