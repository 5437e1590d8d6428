//! Write operations of the category service.

use eventsapp_core::error::{DomainError, EntityKind};
use eventsapp_core::model::{Category, CategoryDraft};
use tracing::{info, instrument};

use super::service::CategoryService;

impl CategoryService {
    /// Persists a new category. The store assigns the identifier; any `id`
    /// in the payload is ignored.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the name is missing or
    /// already taken.
    #[instrument(name = "categories.create", skip(self, draft))]
    pub async fn create(&self, draft: CategoryDraft) -> Result<Category, DomainError> {
        let category = self.repo.insert(&draft.into_new_category()).await?;
        info!(category_id = category.id, "created category");
        Ok(category)
    }

    /// Replaces every mutable field of the category `id`. The path
    /// identifier wins over any `id` in the payload.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the category does not exist, and
    /// `DomainError::Infrastructure` for constraint violations.
    #[instrument(name = "categories.update", skip(self, draft))]
    pub async fn update(&self, id: i64, draft: CategoryDraft) -> Result<Category, DomainError> {
        if !self.repo.exists(id).await? {
            return Err(DomainError::not_found_id(EntityKind::Category, id));
        }
        let category = self.repo.update(id, &draft.into_new_category()).await?;
        info!(category_id = id, "updated category");
        Ok(category)
    }

    /// Deletes the category `id` and every event that references it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the category does not exist.
    #[instrument(name = "categories.delete", skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.exists(id).await? {
            return Err(DomainError::not_found_id(EntityKind::Category, id));
        }
        self.repo.delete(id).await?;
        info!(category_id = id, "deleted category");
        Ok(())
    }
}
