use std::sync::Arc;

use hdts_db::repository::backend::StorageBackend;

use super::admin_token_repository::AdminTokenRepositoryImpl;

/// Factory for creating session module repositories
///
/// Builds repositories bound to a shared storage adapter. Use one factory
/// instance per application.
#[derive(Default)]
pub struct SessionRepoFactory {}

impl SessionRepoFactory {
    /// Create a new SessionRepoFactory singleton
    pub fn new() -> Arc<Self> {
        Arc::new(Self {})
    }

    /// Build an AdminTokenRepository over the given backend
    pub fn build_admin_token_repo<B: StorageBackend>(
        &self,
        backend: Arc<B>,
    ) -> Arc<AdminTokenRepositoryImpl<B>> {
        Arc::new(AdminTokenRepositoryImpl::new(backend))
    }

    /// Build all session repositories over the given backend
    pub fn build_all_repos<B: StorageBackend>(&self, backend: Arc<B>) -> SessionRepositories<B> {
        SessionRepositories {
            admin_token_repository: self.build_admin_token_repo(backend),
        }
    }
}

/// Container for all session module repositories
pub struct SessionRepositories<B: StorageBackend> {
    pub admin_token_repository: Arc<AdminTokenRepositoryImpl<B>>,
}
