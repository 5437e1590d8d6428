//! Shared test doubles and fixtures for the events app.

mod fixtures;
mod repository;

pub use fixtures::{category_draft, event_draft};
pub use repository::{FailingCategoryRepository, FailingEventRepository, InMemoryStore};
