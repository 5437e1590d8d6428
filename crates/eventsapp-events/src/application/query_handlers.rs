//! Read operations of the event service.

use eventsapp_core::error::{DomainError, EntityKind};
use eventsapp_core::model::Event;
use tracing::{debug, instrument};

use super::service::EventService;

impl EventService {
    /// Returns every event with its category; empty when none exist.
    ///
    /// # Errors
    ///
    /// Propagates store failures as `DomainError::Infrastructure`.
    #[instrument(name = "events.list_all", skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Event>, DomainError> {
        let events = self.events.find_all().await?;
        debug!(count = events.len(), "listed events");
        Ok(events)
    }

    /// Retrieves an event by identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if no event has this identifier.
    #[instrument(name = "events.get", skip(self))]
    pub async fn get(&self, id: i64) -> Result<Event, DomainError> {
        self.events
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found_id(EntityKind::Event, id))
    }

    /// Returns the events that belong to the category `category_id`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the category does not exist.
    #[instrument(name = "events.list_by_category", skip(self))]
    pub async fn list_by_category(&self, category_id: i64) -> Result<Vec<Event>, DomainError> {
        if !self.categories.exists(category_id).await? {
            return Err(DomainError::not_found_id(EntityKind::Category, category_id));
        }
        self.events.find_by_category(category_id).await
    }
}
