//! Test repositories — in-memory and failing implementations of the
//! repository traits.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use eventsapp_core::error::{DomainError, EntityKind};
use eventsapp_core::model::{Category, CategoryRef, Event, NewCategory, NewEvent};
use eventsapp_core::repository::{CategoryRepository, EventRepository};

#[derive(Debug, Clone)]
struct EventRecord {
    id: i64,
    kind: Option<String>,
    title: Option<String>,
    description: Option<String>,
    date: Option<String>,
    image: Option<String>,
    category_id: Option<i64>,
}

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i64, Category>,
    events: BTreeMap<i64, EventRecord>,
    last_category_id: i64,
    last_event_id: i64,
}

impl Tables {
    fn check_category(
        &self,
        id: Option<i64>,
        category: &NewCategory,
    ) -> Result<String, DomainError> {
        let Some(name) = category.name.clone() else {
            return Err(DomainError::Infrastructure(
                "NOT NULL constraint failed: category.name".into(),
            ));
        };
        let taken = self
            .categories
            .values()
            .any(|c| c.name == name && Some(c.id) != id);
        if taken {
            return Err(DomainError::Infrastructure(
                "UNIQUE constraint failed: category.name".into(),
            ));
        }
        Ok(name)
    }

    fn insert_category(&mut self, category: &NewCategory) -> Result<Category, DomainError> {
        let name = self.check_category(None, category)?;
        self.last_category_id += 1;
        let stored = Category {
            id: self.last_category_id,
            name,
            description: category.description.clone(),
            color: category.color.clone(),
        };
        self.categories.insert(stored.id, stored.clone());
        Ok(stored)
    }

    /// Validates the reference before anything is written, so a failed event
    /// write leaves no category behind.
    fn resolve_category(&mut self, category: &CategoryRef) -> Result<Option<i64>, DomainError> {
        match category {
            CategoryRef::None => Ok(None),
            CategoryRef::Existing(id) if self.categories.contains_key(id) => Ok(Some(*id)),
            CategoryRef::Existing(id) => Err(DomainError::not_found_id(EntityKind::Category, *id)),
            CategoryRef::New(new_category) => {
                self.insert_category(new_category).map(|c| Some(c.id))
            }
        }
    }

    fn resolve_event(&self, record: &EventRecord) -> Event {
        Event {
            id: record.id,
            kind: record.kind.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            date: record.date.clone(),
            image: record.image.clone(),
            category: record
                .category_id
                .and_then(|id| self.categories.get(&id).cloned()),
        }
    }

    fn write_event(&mut self, id: i64, event: &NewEvent) -> Result<Event, DomainError> {
        let category_id = self.resolve_category(&event.category)?;
        let record = EventRecord {
            id,
            kind: event.kind.clone(),
            title: event.title.clone(),
            description: event.description.clone(),
            date: event.date.clone(),
            image: event.image.clone(),
            category_id,
        };
        let resolved = self.resolve_event(&record);
        self.events.insert(id, record);
        Ok(resolved)
    }
}

/// An in-memory store implementing both repository traits with the same
/// cascade and constraint semantics as the `SQLite` store: unique and
/// non-null category names, insert-cascade of new categories, and
/// delete-cascade from a category to its events.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored categories.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn category_count(&self) -> usize {
        self.lock().categories.len()
    }

    /// Number of stored events.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn event_count(&self) -> usize {
        self.lock().events.len()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        Ok(self.lock().categories.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, DomainError> {
        Ok(self.lock().categories.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError> {
        Ok(self
            .lock()
            .categories
            .values()
            .find(|c| c.name == name)
            .cloned())
    }

    async fn exists(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.lock().categories.contains_key(&id))
    }

    async fn insert(&self, category: &NewCategory) -> Result<Category, DomainError> {
        self.lock().insert_category(category)
    }

    async fn update(&self, id: i64, category: &NewCategory) -> Result<Category, DomainError> {
        let mut tables = self.lock();
        if !tables.categories.contains_key(&id) {
            return Err(DomainError::not_found_id(EntityKind::Category, id));
        }
        let name = tables.check_category(Some(id), category)?;
        let stored = Category {
            id,
            name,
            description: category.description.clone(),
            color: category.color.clone(),
        };
        tables.categories.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let mut tables = self.lock();
        if tables.categories.remove(&id).is_none() {
            return Err(DomainError::not_found_id(EntityKind::Category, id));
        }
        tables.events.retain(|_, e| e.category_id != Some(id));
        Ok(())
    }
}

#[async_trait]
impl EventRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Event>, DomainError> {
        let tables = self.lock();
        Ok(tables
            .events
            .values()
            .map(|e| tables.resolve_event(e))
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Event>, DomainError> {
        let tables = self.lock();
        Ok(tables.events.get(&id).map(|e| tables.resolve_event(e)))
    }

    async fn find_by_category(&self, category_id: i64) -> Result<Vec<Event>, DomainError> {
        let tables = self.lock();
        Ok(tables
            .events
            .values()
            .filter(|e| e.category_id == Some(category_id))
            .map(|e| tables.resolve_event(e))
            .collect())
    }

    async fn exists(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.lock().events.contains_key(&id))
    }

    async fn insert(&self, event: &NewEvent) -> Result<Event, DomainError> {
        let mut tables = self.lock();
        let id = tables.last_event_id + 1;
        let stored = tables.write_event(id, event)?;
        tables.last_event_id = id;
        Ok(stored)
    }

    async fn update(&self, id: i64, event: &NewEvent) -> Result<Event, DomainError> {
        let mut tables = self.lock();
        if !tables.events.contains_key(&id) {
            return Err(DomainError::not_found_id(EntityKind::Event, id));
        }
        tables.write_event(id, event)
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if self.lock().events.remove(&id).is_none() {
            return Err(DomainError::not_found_id(EntityKind::Event, id));
        }
        Ok(())
    }
}

fn connection_refused() -> DomainError {
    DomainError::Infrastructure("connection refused".into())
}

/// A category repository that always returns an infrastructure error. Useful
/// for testing error-handling paths.
#[derive(Debug)]
pub struct FailingCategoryRepository;

#[async_trait]
impl CategoryRepository for FailingCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        Err(connection_refused())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Category>, DomainError> {
        Err(connection_refused())
    }

    async fn find_by_name(&self, _name: &str) -> Result<Option<Category>, DomainError> {
        Err(connection_refused())
    }

    async fn exists(&self, _id: i64) -> Result<bool, DomainError> {
        Err(connection_refused())
    }

    async fn insert(&self, _category: &NewCategory) -> Result<Category, DomainError> {
        Err(connection_refused())
    }

    async fn update(&self, _id: i64, _category: &NewCategory) -> Result<Category, DomainError> {
        Err(connection_refused())
    }

    async fn delete(&self, _id: i64) -> Result<(), DomainError> {
        Err(connection_refused())
    }
}

/// An event repository that always returns an infrastructure error. Useful
/// for testing error-handling paths.
#[derive(Debug)]
pub struct FailingEventRepository;

#[async_trait]
impl EventRepository for FailingEventRepository {
    async fn find_all(&self) -> Result<Vec<Event>, DomainError> {
        Err(connection_refused())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Event>, DomainError> {
        Err(connection_refused())
    }

    async fn find_by_category(&self, _category_id: i64) -> Result<Vec<Event>, DomainError> {
        Err(connection_refused())
    }

    async fn exists(&self, _id: i64) -> Result<bool, DomainError> {
        Err(connection_refused())
    }

    async fn insert(&self, _event: &NewEvent) -> Result<Event, DomainError> {
        Err(connection_refused())
    }

    async fn update(&self, _id: i64, _event: &NewEvent) -> Result<Event, DomainError> {
        Err(connection_refused())
    }

    async fn delete(&self, _id: i64) -> Result<(), DomainError> {
        Err(connection_refused())
    }
}
