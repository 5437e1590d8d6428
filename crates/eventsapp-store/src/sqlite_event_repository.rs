//! `SQLite` implementation of the `EventRepository` trait.

use async_trait::async_trait;
use sqlx::{SqliteConnection, SqliteExecutor, SqlitePool};
use tracing::debug;

use eventsapp_core::error::{DomainError, EntityKind};
use eventsapp_core::model::{CategoryRef, Event, NewEvent};
use eventsapp_core::repository::EventRepository;

use crate::error::{infrastructure, is_foreign_key_violation};
use crate::schema::{EventRow, INSERT_EVENT, SELECT_EVENTS, UPDATE_EVENT};
use crate::sqlite_category_repository::insert_category_row;

/// `SQLite`-backed event repository.
#[derive(Debug, Clone)]
pub struct SqliteEventRepository {
    pool: SqlitePool,
}

impl SqliteEventRepository {
    /// Creates a new `SqliteEventRepository`.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

async fn fetch_event<'e, E>(executor: E, id: i64) -> Result<Option<Event>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let sql = format!("{SELECT_EVENTS} WHERE e.id = ?");
    let row = sqlx::query_as::<_, EventRow>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(row.map(Event::from))
}

/// Turns a category reference into the value of `event.category_id`,
/// inserting a new category on `conn` when needed.
async fn resolve_category(
    conn: &mut SqliteConnection,
    category: &CategoryRef,
) -> Result<Option<i64>, sqlx::Error> {
    match category {
        CategoryRef::None => Ok(None),
        CategoryRef::Existing(id) => Ok(Some(*id)),
        CategoryRef::New(new_category) => {
            let row = insert_category_row(&mut *conn, new_category).await?;
            debug!(category_id = row.id, "inserted category with event");
            Ok(Some(row.id))
        }
    }
}

/// A dangling category reference surfaces as `NotFound` for the category.
fn write_error(err: &sqlx::Error, category: &CategoryRef) -> DomainError {
    match category {
        CategoryRef::Existing(id) if is_foreign_key_violation(err) => {
            DomainError::not_found_id(EntityKind::Category, *id)
        }
        _ => infrastructure(err),
    }
}

fn vanished(id: i64) -> DomainError {
    DomainError::Infrastructure(format!("event {id} missing after write"))
}

#[async_trait]
impl EventRepository for SqliteEventRepository {
    async fn find_all(&self) -> Result<Vec<Event>, DomainError> {
        let sql = format!("{SELECT_EVENTS} ORDER BY e.id");
        let rows = sqlx::query_as::<_, EventRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| infrastructure(&e))?;
        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Event>, DomainError> {
        fetch_event(&self.pool, id).await.map_err(|e| infrastructure(&e))
    }

    async fn find_by_category(&self, category_id: i64) -> Result<Vec<Event>, DomainError> {
        let sql = format!("{SELECT_EVENTS} WHERE e.category_id = ? ORDER BY e.id");
        let rows = sqlx::query_as::<_, EventRow>(&sql)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| infrastructure(&e))?;
        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn exists(&self, id: i64) -> Result<bool, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM event WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| infrastructure(&e))?;
        Ok(count > 0)
    }

    async fn insert(&self, event: &NewEvent) -> Result<Event, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| infrastructure(&e))?;

        let category_id = resolve_category(&mut tx, &event.category)
            .await
            .map_err(|e| infrastructure(&e))?;

        let id: i64 = sqlx::query_scalar(INSERT_EVENT)
            .bind(&event.kind)
            .bind(&event.title)
            .bind(&event.description)
            .bind(&event.date)
            .bind(&event.image)
            .bind(category_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| write_error(&e, &event.category))?;

        let stored = fetch_event(&mut *tx, id)
            .await
            .map_err(|e| infrastructure(&e))?
            .ok_or_else(|| vanished(id))?;

        tx.commit().await.map_err(|e| infrastructure(&e))?;
        debug!(event_id = id, "inserted event");
        Ok(stored)
    }

    async fn update(&self, id: i64, event: &NewEvent) -> Result<Event, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| infrastructure(&e))?;

        let category_id = resolve_category(&mut tx, &event.category)
            .await
            .map_err(|e| infrastructure(&e))?;

        let result = sqlx::query(UPDATE_EVENT)
            .bind(&event.kind)
            .bind(&event.title)
            .bind(&event.description)
            .bind(&event.date)
            .bind(&event.image)
            .bind(category_id)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| write_error(&e, &event.category))?;

        // Dropping the transaction rolls back a category inserted above.
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found_id(EntityKind::Event, id));
        }

        let stored = fetch_event(&mut *tx, id)
            .await
            .map_err(|e| infrastructure(&e))?
            .ok_or_else(|| vanished(id))?;

        tx.commit().await.map_err(|e| infrastructure(&e))?;
        debug!(event_id = id, "updated event");
        Ok(stored)
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM event WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| infrastructure(&e))?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found_id(EntityKind::Event, id));
        }
        debug!(event_id = id, "deleted event");
        Ok(())
    }
}
