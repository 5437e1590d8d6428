//! Payload builders shared by service and API tests.

use eventsapp_core::model::{CategoryDraft, EventDraft};

/// A category payload with only a name.
#[must_use]
pub fn category_draft(name: &str) -> CategoryDraft {
    CategoryDraft {
        id: None,
        name: Some(name.to_owned()),
        description: None,
        color: None,
    }
}

/// A concert payload with the given title and category.
#[must_use]
pub fn event_draft(title: &str, category: Option<CategoryDraft>) -> EventDraft {
    EventDraft {
        id: None,
        kind: Some("concert".to_owned()),
        title: Some(title.to_owned()),
        description: Some("A test event".to_owned()),
        date: Some("2024-12-25".to_owned()),
        image: None,
        category,
    }
}
