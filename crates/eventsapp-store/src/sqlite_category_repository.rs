//! `SQLite` implementation of the `CategoryRepository` trait.

use async_trait::async_trait;
use sqlx::{SqliteExecutor, SqlitePool};
use tracing::debug;

use eventsapp_core::error::{DomainError, EntityKind};
use eventsapp_core::model::{Category, NewCategory};
use eventsapp_core::repository::CategoryRepository;

use crate::error::infrastructure;
use crate::schema::{CategoryRow, INSERT_CATEGORY, SELECT_CATEGORIES, UPDATE_CATEGORY};

/// `SQLite`-backed category repository.
#[derive(Debug, Clone)]
pub struct SqliteCategoryRepository {
    pool: SqlitePool,
}

impl SqliteCategoryRepository {
    /// Creates a new `SqliteCategoryRepository`.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Inserts a category row on any executor, so the event store can run it
/// inside its own transaction.
pub(crate) async fn insert_category_row<'e, E>(
    executor: E,
    category: &NewCategory,
) -> Result<CategoryRow, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, CategoryRow>(INSERT_CATEGORY)
        .bind(&category.name)
        .bind(&category.description)
        .bind(&category.color)
        .fetch_one(executor)
        .await
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        let sql = format!("{SELECT_CATEGORIES} ORDER BY id");
        let rows = sqlx::query_as::<_, CategoryRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| infrastructure(&e))?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, DomainError> {
        let sql = format!("{SELECT_CATEGORIES} WHERE id = ?");
        let row = sqlx::query_as::<_, CategoryRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| infrastructure(&e))?;
        Ok(row.map(Category::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError> {
        let sql = format!("{SELECT_CATEGORIES} WHERE name = ?");
        let row = sqlx::query_as::<_, CategoryRow>(&sql)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| infrastructure(&e))?;
        Ok(row.map(Category::from))
    }

    async fn exists(&self, id: i64) -> Result<bool, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM category WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| infrastructure(&e))?;
        Ok(count > 0)
    }

    async fn insert(&self, category: &NewCategory) -> Result<Category, DomainError> {
        let row = insert_category_row(&self.pool, category)
            .await
            .map_err(|e| infrastructure(&e))?;
        debug!(category_id = row.id, "inserted category");
        Ok(row.into())
    }

    async fn update(&self, id: i64, category: &NewCategory) -> Result<Category, DomainError> {
        let row = sqlx::query_as::<_, CategoryRow>(UPDATE_CATEGORY)
            .bind(&category.name)
            .bind(&category.description)
            .bind(&category.color)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| infrastructure(&e))?
            .ok_or_else(|| DomainError::not_found_id(EntityKind::Category, id))?;
        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        // Dependent events go with it through ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM category WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| infrastructure(&e))?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found_id(EntityKind::Category, id));
        }
        debug!(category_id = id, "deleted category");
        Ok(())
    }
}
