use tracing::debug;

use hdts_db::repository::backend::StorageBackend;

use crate::keys::ADMIN_ACCESS_TOKEN_KEY;

use super::repo_impl::AdminTokenRepositoryImpl;

impl<B: StorageBackend> AdminTokenRepositoryImpl<B> {
    pub(super) async fn clear_impl(
        repo: &AdminTokenRepositoryImpl<B>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        repo.backend.remove(ADMIN_ACCESS_TOKEN_KEY).await?;
        debug!("cleared the admin access token");
        Ok(())
    }
}
