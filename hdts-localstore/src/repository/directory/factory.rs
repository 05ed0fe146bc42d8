use std::sync::Arc;

use hdts_db::repository::backend::StorageBackend;

use super::employee_user_repository::EmployeeUserRepositoryImpl;

/// Factory for creating directory module repositories
#[derive(Default)]
pub struct DirectoryRepoFactory {}

impl DirectoryRepoFactory {
    /// Create a new DirectoryRepoFactory singleton
    pub fn new() -> Arc<Self> {
        Arc::new(Self {})
    }

    /// Build an EmployeeUserRepository over the given backend
    pub fn build_employee_user_repo<B: StorageBackend>(
        &self,
        backend: Arc<B>,
    ) -> Arc<EmployeeUserRepositoryImpl<B>> {
        Arc::new(EmployeeUserRepositoryImpl::new(backend))
    }

    /// Build all directory repositories over the given backend
    pub fn build_all_repos<B: StorageBackend>(&self, backend: Arc<B>) -> DirectoryRepositories<B> {
        DirectoryRepositories {
            employee_user_repository: self.build_employee_user_repo(backend),
        }
    }
}

/// Container for all directory module repositories
pub struct DirectoryRepositories<B: StorageBackend> {
    pub employee_user_repository: Arc<EmployeeUserRepositoryImpl<B>>,
}
