//! Read operations of the category service.

use eventsapp_core::error::{DomainError, EntityKind};
use eventsapp_core::model::Category;
use tracing::{debug, instrument};

use super::service::CategoryService;

impl CategoryService {
    /// Returns every category; empty when none exist.
    ///
    /// # Errors
    ///
    /// Propagates store failures as `DomainError::Infrastructure`.
    #[instrument(name = "categories.list_all", skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Category>, DomainError> {
        let categories = self.repo.find_all().await?;
        debug!(count = categories.len(), "listed categories");
        Ok(categories)
    }

    /// Retrieves a category by identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if no category has this identifier.
    #[instrument(name = "categories.get", skip(self))]
    pub async fn get(&self, id: i64) -> Result<Category, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found_id(EntityKind::Category, id))
    }

    /// Retrieves a category by exact, case-sensitive name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if no category has this name.
    #[instrument(name = "categories.get_by_name", skip(self))]
    pub async fn get_by_name(&self, name: &str) -> Result<Category, DomainError> {
        self.repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| DomainError::not_found_name(EntityKind::Category, name))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use eventsapp_core::error::{DomainError, EntityKind};
    use eventsapp_test_support::{FailingCategoryRepository, InMemoryStore, category_draft};

    use crate::CategoryService;

    fn service() -> CategoryService {
        CategoryService::new(Arc::new(InMemoryStore::new()))
    }

    #[tokio::test]
    async fn test_list_all_on_empty_store_is_empty() {
        // Arrange
        let service = service();

        // Act
        let categories = service.list_all().await.unwrap();

        // Assert
        assert!(categories.is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_category_is_not_found() {
        // Arrange
        let service = service();

        // Act
        let result = service.get(999).await;

        // Assert
        match result.unwrap_err() {
            DomainError::NotFound { entity, key } => {
                assert_eq!(entity, EntityKind::Category);
                assert_eq!(key, "id: 999");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_returns_equal_category() {
        // Arrange
        let service = service();
        let mut draft = category_draft("Music");
        draft.description = Some("Live music".to_owned());
        draft.color = Some("#336699".to_owned());

        // Act
        let created = service.create(draft).await.unwrap();
        let loaded = service.get(created.id).await.unwrap();

        // Assert
        assert_eq!(loaded, created);
        assert_eq!(loaded.name, "Music");
        assert_eq!(loaded.description.as_deref(), Some("Live music"));
        assert_eq!(loaded.color.as_deref(), Some("#336699"));
    }

    #[tokio::test]
    async fn test_get_by_name_matches_exactly() {
        // Arrange
        let service = service();
        let music = service.create(category_draft("Music")).await.unwrap();
        service.create(category_draft("Musicals")).await.unwrap();

        // Act
        let found = service.get_by_name("Music").await.unwrap();
        let lowercase = service.get_by_name("music").await;

        // Assert
        assert_eq!(found, music);
        assert!(matches!(lowercase, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_get_by_name_missing_reports_name() {
        // Arrange
        let service = service();

        // Act
        let err = service.get_by_name("Nope").await.unwrap_err();

        // Assert
        assert_eq!(err.to_string(), "category not found with name: Nope");
    }

    #[tokio::test]
    async fn test_list_all_propagates_store_failure() {
        // Arrange
        let service = CategoryService::new(Arc::new(FailingCategoryRepository));

        // Act
        let result = service.list_all().await;

        // Assert
        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }
}
