use std::sync::Arc;

use tracing::info;

use hdts_db::repository::backend::StorageBackend;
use hdts_db::repository::initialize::Initialize;

use crate::repository::activity::{ActivityRepoFactory, ActivityRepositories};
use crate::repository::directory::{DirectoryRepoFactory, DirectoryRepositories};
use crate::repository::session::{SessionRepoFactory, SessionRepositories};
use crate::repository::ticketing::{TicketingRepoFactory, TicketingRepositories};

/// All repositories of the local store, wired over one shared backend.
///
/// Construction is cheap and touches no storage. Call [`initialize_all`]
/// once at startup before serving reads; collections already present in
/// the backend are left untouched.
///
/// [`initialize_all`]: LocalRepositories::initialize_all
pub struct LocalRepositories<B: StorageBackend> {
    backend: Arc<B>,
    pub activity_repos: ActivityRepositories<B>,
    pub directory_repos: DirectoryRepositories<B>,
    pub ticketing_repos: TicketingRepositories<B>,
    pub session_repos: SessionRepositories<B>,
}

impl<B: StorageBackend> LocalRepositories<B> {
    pub fn new(backend: Arc<B>) -> Self {
        let activity_repos = ActivityRepoFactory::new().build_all_repos(backend.clone());
        let directory_repos = DirectoryRepoFactory::new().build_all_repos(backend.clone());
        let ticketing_repos = TicketingRepoFactory::new().build_all_repos(backend.clone());
        let session_repos = SessionRepoFactory::new().build_all_repos(backend.clone());

        Self {
            backend,
            activity_repos,
            directory_repos,
            ticketing_repos,
            session_repos,
        }
    }

    pub fn backend(&self) -> Arc<B> {
        self.backend.clone()
    }

    /// Seed every collection that is still absent from the backend.
    ///
    /// The admin access token is not seeded; it only exists once issued.
    pub async fn initialize_all(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let seeded_logs = self.activity_repos.activity_log_repository.initialize().await?;
        let seeded_users = self
            .directory_repos
            .employee_user_repository
            .initialize()
            .await?;
        let seeded_tickets = self.ticketing_repos.ticket_repository.initialize().await?;

        info!(
            seeded_logs,
            seeded_users, seeded_tickets, "local store initialized"
        );
        Ok(())
    }
}
