use std::sync::Arc;

use hdts_db::repository::backend::StorageBackend;

use super::activity_log_repository::ActivityLogRepositoryImpl;

/// Factory for creating activity module repositories
///
/// Builds repositories bound to a shared storage adapter. Use one factory
/// instance per application.
#[derive(Default)]
pub struct ActivityRepoFactory {}

impl ActivityRepoFactory {
    /// Create a new ActivityRepoFactory singleton
    pub fn new() -> Arc<Self> {
        Arc::new(Self {})
    }

    /// Build an ActivityLogRepository over the given backend
    pub fn build_activity_log_repo<B: StorageBackend>(
        &self,
        backend: Arc<B>,
    ) -> Arc<ActivityLogRepositoryImpl<B>> {
        Arc::new(ActivityLogRepositoryImpl::new(backend))
    }

    /// Build all activity repositories over the given backend
    pub fn build_all_repos<B: StorageBackend>(&self, backend: Arc<B>) -> ActivityRepositories<B> {
        ActivityRepositories {
            activity_log_repository: self.build_activity_log_repo(backend),
        }
    }
}

/// Container for all activity module repositories
pub struct ActivityRepositories<B: StorageBackend> {
    pub activity_log_repository: Arc<ActivityLogRepositoryImpl<B>>,
}
