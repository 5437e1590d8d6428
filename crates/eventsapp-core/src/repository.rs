//! Repository abstractions.
//!
//! The services depend only on these traits; the `SQLite` store and the test
//! doubles implement them.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::model::{Category, Event, NewCategory, NewEvent};

/// Persistence port for categories.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Load every category, ordered by identifier.
    async fn find_all(&self) -> Result<Vec<Category>, DomainError>;

    /// Load a category by identifier.
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, DomainError>;

    /// Load a category by exact, case-sensitive name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError>;

    /// Returns `true` if a category with this identifier exists.
    async fn exists(&self, id: i64) -> Result<bool, DomainError>;

    /// Insert a category and return it with its assigned identifier.
    async fn insert(&self, category: &NewCategory) -> Result<Category, DomainError>;

    /// Overwrite every mutable field of the category `id`.
    async fn update(&self, id: i64, category: &NewCategory) -> Result<Category, DomainError>;

    /// Delete the category `id` together with every event referencing it.
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}

/// Persistence port for events.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Load every event with its category, ordered by identifier.
    async fn find_all(&self) -> Result<Vec<Event>, DomainError>;

    /// Load an event by identifier.
    async fn find_by_id(&self, id: i64) -> Result<Option<Event>, DomainError>;

    /// Load every event that references `category_id`.
    async fn find_by_category(&self, category_id: i64) -> Result<Vec<Event>, DomainError>;

    /// Returns `true` if an event with this identifier exists.
    async fn exists(&self, id: i64) -> Result<bool, DomainError>;

    /// Insert an event. A `CategoryRef::New` category is inserted first,
    /// atomically with the event.
    async fn insert(&self, event: &NewEvent) -> Result<Event, DomainError>;

    /// Overwrite every mutable field of the event `id`, with the same
    /// category handling as `insert`.
    async fn update(&self, id: i64, event: &NewEvent) -> Result<Event, DomainError>;

    /// Delete the event `id`.
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
