//! Shared application state.

use std::sync::Arc;

use eventsapp_categories::CategoryService;
use eventsapp_core::repository::{CategoryRepository, EventRepository};
use eventsapp_events::EventService;
use eventsapp_store::{SqliteCategoryRepository, SqliteEventRepository};
use sqlx::SqlitePool;

/// Application state shared across all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Category operations.
    pub categories: CategoryService,
    /// Event operations.
    pub events: EventService,
}

impl AppState {
    /// Create new application state over the given repositories.
    #[must_use]
    pub fn new(
        category_repository: Arc<dyn CategoryRepository>,
        event_repository: Arc<dyn EventRepository>,
    ) -> Self {
        Self {
            categories: CategoryService::new(category_repository.clone()),
            events: EventService::new(event_repository, category_repository),
        }
    }

    /// Create application state backed by the `SQLite` store.
    #[must_use]
    pub fn from_pool(db_pool: SqlitePool) -> Self {
        Self::new(
            Arc::new(SqliteCategoryRepository::new(db_pool.clone())),
            Arc::new(SqliteEventRepository::new(db_pool)),
        )
    }
}
