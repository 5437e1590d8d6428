//! Persisted resources and their inbound payloads.
//!
//! `Category` and `Event` are what the store hands back: identity assigned,
//! relationships resolved. The `*Draft` types are what clients send; they
//! carry an optional identifier that the services either ignore (create) or
//! override with the path identifier (update).

use serde::{Deserialize, Serialize};

/// A persisted category.
///
/// The events that point at a category are not part of it; they are looked
/// up through `EventRepository::find_by_category` when needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Store-assigned identifier.
    pub id: i64,
    /// Unique display name.
    pub name: String,
    /// Optional free text.
    pub description: Option<String>,
    /// Optional UI colour hint.
    pub color: Option<String>,
}

/// Inbound category payload.
///
/// Also used for the `category` field of an event payload, where the
/// presence of `id` decides between referencing an existing category and
/// creating a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDraft {
    /// Identifier supplied by the client, if any.
    #[serde(default)]
    pub id: Option<i64>,
    /// Category name. A missing name is rejected by the store.
    #[serde(default)]
    pub name: Option<String>,
    /// Optional free text.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional UI colour hint.
    #[serde(default)]
    pub color: Option<String>,
}

impl CategoryDraft {
    /// Drops the client-supplied identifier.
    #[must_use]
    pub fn into_new_category(self) -> NewCategory {
        NewCategory {
            name: self.name,
            description: self.description,
            color: self.color,
        }
    }
}

/// Mutable category fields, as written to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCategory {
    /// Category name; `None` violates the store's NOT NULL constraint.
    pub name: Option<String>,
    /// Optional free text.
    pub description: Option<String>,
    /// Optional UI colour hint.
    pub color: Option<String>,
}

/// A persisted event with its category eagerly resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Store-assigned identifier.
    pub id: i64,
    /// Free-text classification such as "movie" or "concert".
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Event title.
    pub title: Option<String>,
    /// Long-form description.
    pub description: Option<String>,
    /// Free-text date; never parsed.
    pub date: Option<String>,
    /// Optional image reference or URL.
    pub image: Option<String>,
    /// The category this event belongs to, if any.
    pub category: Option<Category>,
}

impl Event {
    /// Identifier of the referenced category, if any.
    #[must_use]
    pub fn category_id(&self) -> Option<i64> {
        self.category.as_ref().map(|c| c.id)
    }
}

/// Inbound event payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    /// Identifier supplied by the client, if any.
    #[serde(default)]
    pub id: Option<i64>,
    /// Free-text classification.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Event title.
    #[serde(default)]
    pub title: Option<String>,
    /// Long-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Free-text date.
    #[serde(default)]
    pub date: Option<String>,
    /// Optional image reference.
    #[serde(default)]
    pub image: Option<String>,
    /// Category to reference or create.
    #[serde(default)]
    pub category: Option<CategoryDraft>,
}

impl EventDraft {
    /// Drops the client-supplied identifier and classifies the category
    /// payload.
    #[must_use]
    pub fn into_new_event(self) -> NewEvent {
        NewEvent {
            kind: self.kind,
            title: self.title,
            description: self.description,
            date: self.date,
            image: self.image,
            category: CategoryRef::from(self.category),
        }
    }
}

/// How an event payload relates to a category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryRef {
    /// No category.
    #[default]
    None,
    /// Reference to an already persisted category. Never re-inserted.
    Existing(i64),
    /// A category to insert together with the event.
    New(NewCategory),
}

impl From<Option<CategoryDraft>> for CategoryRef {
    fn from(draft: Option<CategoryDraft>) -> Self {
        match draft {
            None => Self::None,
            Some(CategoryDraft { id: Some(id), .. }) => Self::Existing(id),
            Some(draft) => Self::New(draft.into_new_category()),
        }
    }
}

/// Mutable event fields, as written to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEvent {
    /// Free-text classification.
    pub kind: Option<String>,
    /// Event title.
    pub title: Option<String>,
    /// Long-form description.
    pub description: Option<String>,
    /// Free-text date.
    pub date: Option<String>,
    /// Optional image reference.
    pub image: Option<String>,
    /// Category relationship.
    pub category: CategoryRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_kind_as_type() {
        let event = Event {
            id: 1,
            kind: Some("concert".to_owned()),
            title: Some("Test Concert".to_owned()),
            description: None,
            date: Some("2024-12-25".to_owned()),
            image: None,
            category: None,
        };

        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["type"], "concert");
        assert!(json.get("kind").is_none());
        assert!(json["category"].is_null());
    }

    #[test]
    fn test_event_draft_leaves_missing_fields_unset() {
        let draft: EventDraft = serde_json::from_str(r#"{"title":"Only a title"}"#).unwrap();

        assert_eq!(draft.title.as_deref(), Some("Only a title"));
        assert_eq!(draft.kind, None);
        assert_eq!(draft.date, None);
        assert!(draft.category.is_none());
    }

    #[test]
    fn test_event_draft_accepts_explicit_nulls() {
        let draft: EventDraft = serde_json::from_str(
            r#"{"title":"x","type":"concert","description":null,"date":"TBD","image":null}"#,
        )
        .unwrap();

        assert_eq!(draft.description, None);
        assert_eq!(draft.image, None);
        assert_eq!(draft.date.as_deref(), Some("TBD"));
    }

    #[test]
    fn test_category_ref_with_id_is_existing() {
        let draft: EventDraft =
            serde_json::from_str(r#"{"category":{"id":3,"name":"ignored"}}"#).unwrap();

        assert_eq!(draft.into_new_event().category, CategoryRef::Existing(3));
    }

    #[test]
    fn test_category_ref_without_id_is_new() {
        let draft: EventDraft =
            serde_json::from_str(r#"{"category":{"name":"Music","color":"red"}}"#).unwrap();

        let category = draft.into_new_event().category;

        assert_eq!(
            category,
            CategoryRef::New(NewCategory {
                name: Some("Music".to_owned()),
                description: None,
                color: Some("red".to_owned()),
            })
        );
    }

    #[test]
    fn test_category_ref_absent_is_none() {
        assert_eq!(CategoryRef::from(None), CategoryRef::None);
    }

    #[test]
    fn test_category_draft_drops_id() {
        let draft = CategoryDraft {
            id: Some(42),
            name: Some("Film".to_owned()),
            description: Some("Movies".to_owned()),
            color: None,
        };

        let new = draft.into_new_category();

        assert_eq!(new.name.as_deref(), Some("Film"));
        assert_eq!(new.description.as_deref(), Some("Movies"));
    }
}
