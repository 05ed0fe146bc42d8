use async_trait::async_trait;
use tracing::info;

use hdts_db::repository::backend::StorageBackend;
use hdts_db::repository::initialize::Initialize;

use crate::keys::ACTIVITY_LOGS_KEY;
use crate::seed;

use super::repo_impl::ActivityLogRepositoryImpl;

impl<B: StorageBackend> ActivityLogRepositoryImpl<B> {
    pub(super) async fn initialize_impl(
        repo: &ActivityLogRepositoryImpl<B>,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        if repo.backend.read(ACTIVITY_LOGS_KEY).await?.is_some() {
            return Ok(false);
        }

        let entries = seed::seed_activity_logs()?;
        Self::write_all(repo, &entries).await?;
        info!("seeded {} activity log entries", entries.len());
        Ok(true)
    }
}

#[async_trait]
impl<B: StorageBackend> Initialize<B> for ActivityLogRepositoryImpl<B> {
    async fn initialize(&self) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        Self::initialize_impl(self).await
    }
}
