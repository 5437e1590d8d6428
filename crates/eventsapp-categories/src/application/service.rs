//! The category service handle.

use std::sync::Arc;

use eventsapp_core::repository::CategoryRepository;

/// Category operations over an injected repository.
///
/// Cheap to clone; every clone shares the same repository.
#[derive(Clone)]
pub struct CategoryService {
    pub(crate) repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    /// Creates a service backed by `repo`.
    #[must_use]
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }
}

impl std::fmt::Debug for CategoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryService").finish_non_exhaustive()
    }
}
