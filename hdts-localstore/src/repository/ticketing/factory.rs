use std::sync::Arc;

use hdts_db::repository::backend::StorageBackend;

use super::ticket_repository::TicketRepositoryImpl;

/// Factory for creating ticketing module repositories
///
/// Builds repositories bound to a shared storage adapter. Use one factory
/// instance per application.
#[derive(Default)]
pub struct TicketingRepoFactory {}

impl TicketingRepoFactory {
    /// Create a new TicketingRepoFactory singleton
    pub fn new() -> Arc<Self> {
        Arc::new(Self {})
    }

    /// Build a TicketRepository over the given backend
    pub fn build_ticket_repo<B: StorageBackend>(
        &self,
        backend: Arc<B>,
    ) -> Arc<TicketRepositoryImpl<B>> {
        Arc::new(TicketRepositoryImpl::new(backend))
    }

    /// Build all ticketing repositories over the given backend
    pub fn build_all_repos<B: StorageBackend>(&self, backend: Arc<B>) -> TicketingRepositories<B> {
        TicketingRepositories {
            ticket_repository: self.build_ticket_repo(backend),
        }
    }
}

/// Container for all ticketing module repositories
pub struct TicketingRepositories<B: StorageBackend> {
    pub ticket_repository: Arc<TicketRepositoryImpl<B>>,
}
