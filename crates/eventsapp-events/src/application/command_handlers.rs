//! Write operations of the event service.

use eventsapp_core::error::{DomainError, EntityKind};
use eventsapp_core::model::{CategoryRef, Event, EventDraft};
use tracing::{info, instrument};

use super::service::EventService;

impl EventService {
    /// A referenced category must already exist; new and absent categories
    /// pass through to the store.
    async fn check_category(&self, category: &CategoryRef) -> Result<(), DomainError> {
        if let CategoryRef::Existing(id) = category
            && !self.categories.exists(*id).await?
        {
            return Err(DomainError::not_found_id(EntityKind::Category, *id));
        }
        Ok(())
    }

    /// Persists a new event. A category payload without an identifier is
    /// inserted together with the event; one with an identifier is a
    /// reference to an existing category.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the referenced category does not
    /// exist, and `DomainError::Infrastructure` if the store rejects a new
    /// category.
    #[instrument(name = "events.create", skip(self, draft), fields(title = ?draft.title))]
    pub async fn create(&self, draft: EventDraft) -> Result<Event, DomainError> {
        let new_event = draft.into_new_event();
        self.check_category(&new_event.category).await?;
        let event = self.events.insert(&new_event).await?;
        info!(event_id = event.id, category_id = ?event.category_id(), "created event");
        Ok(event)
    }

    /// Replaces every mutable field of the event `id`, category included.
    /// The path identifier wins over any `id` in the payload.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the event or a referenced category
    /// does not exist.
    #[instrument(name = "events.update", skip(self, draft))]
    pub async fn update(&self, id: i64, draft: EventDraft) -> Result<Event, DomainError> {
        if !self.events.exists(id).await? {
            return Err(DomainError::not_found_id(EntityKind::Event, id));
        }
        let new_event = draft.into_new_event();
        self.check_category(&new_event.category).await?;
        let event = self.events.update(id, &new_event).await?;
        info!(event_id = id, "updated event");
        Ok(event)
    }

    /// Deletes the event `id`. Its category is left in place.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the event does not exist.
    #[instrument(name = "events.delete", skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.events.exists(id).await? {
            return Err(DomainError::not_found_id(EntityKind::Event, id));
        }
        self.events.delete(id).await?;
        info!(event_id = id, "deleted event");
        Ok(())
    }
}
