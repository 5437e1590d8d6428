//! Store database schema: SQL statements and row mappings.
//!
//! Table definitions live in the workspace `migrations/` directory.

use eventsapp_core::model::{Category, Event};
use sqlx::FromRow;

pub(crate) const SELECT_CATEGORIES: &str = r"
SELECT id, name, description, color
FROM category
";

pub(crate) const INSERT_CATEGORY: &str = r"
INSERT INTO category (name, description, color)
VALUES (?, ?, ?)
RETURNING id, name, description, color
";

pub(crate) const UPDATE_CATEGORY: &str = r"
UPDATE category
SET name = ?, description = ?, color = ?
WHERE id = ?
RETURNING id, name, description, color
";

/// Events are always read joined with their category.
pub(crate) const SELECT_EVENTS: &str = r"
SELECT e.id,
       e.type        AS kind,
       e.title,
       e.description,
       e.date,
       e.image,
       c.id          AS category_id,
       c.name        AS category_name,
       c.description AS category_description,
       c.color       AS category_color
FROM event e
LEFT JOIN category c ON c.id = e.category_id
";

pub(crate) const INSERT_EVENT: &str = r"
INSERT INTO event (type, title, description, date, image, category_id)
VALUES (?, ?, ?, ?, ?, ?)
RETURNING id
";

pub(crate) const UPDATE_EVENT: &str = r"
UPDATE event
SET type = ?, title = ?, description = ?, date = ?, image = ?, category_id = ?
WHERE id = ?
";

/// Row shape of the `category` table.
#[derive(Debug, FromRow)]
pub(crate) struct CategoryRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            color: row.color,
        }
    }
}

/// Row shape of `SELECT_EVENTS`. The category columns are all NULL when the
/// event has no category.
#[derive(Debug, FromRow)]
pub(crate) struct EventRow {
    pub id: i64,
    pub kind: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub image: Option<String>,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    pub category_description: Option<String>,
    pub category_color: Option<String>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        let category = match (row.category_id, row.category_name) {
            (Some(id), Some(name)) => Some(Category {
                id,
                name,
                description: row.category_description,
                color: row.category_color,
            }),
            _ => None,
        };
        Self {
            id: row.id,
            kind: row.kind,
            title: row.title,
            description: row.description,
            date: row.date,
            image: row.image,
            category,
        }
    }
}
