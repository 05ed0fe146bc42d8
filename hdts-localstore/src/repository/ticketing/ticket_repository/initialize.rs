use async_trait::async_trait;
use tracing::info;

use hdts_db::repository::backend::StorageBackend;
use hdts_db::repository::initialize::Initialize;

use crate::keys::TICKETS_KEY;
use crate::seed;

use super::repo_impl::TicketRepositoryImpl;

impl<B: StorageBackend> TicketRepositoryImpl<B> {
    pub(super) async fn initialize_impl(
        repo: &TicketRepositoryImpl<B>,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        if repo.backend.read(TICKETS_KEY).await?.is_some() {
            return Ok(false);
        }

        let tickets = seed::seed_tickets()?;
        Self::write_all(repo, &tickets).await?;
        info!("seeded {} tickets", tickets.len());
        Ok(true)
    }
}

#[async_trait]
impl<B: StorageBackend> Initialize<B> for TicketRepositoryImpl<B> {
    async fn initialize(&self) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        Self::initialize_impl(self).await
    }
}
