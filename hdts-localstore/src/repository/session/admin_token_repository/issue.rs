use tracing::debug;
use uuid::Uuid;

use hdts_db::repository::backend::StorageBackend;

use crate::keys::ADMIN_ACCESS_TOKEN_KEY;

use super::repo_impl::AdminTokenRepositoryImpl;

impl<B: StorageBackend> AdminTokenRepositoryImpl<B> {
    pub(super) async fn issue_impl(
        repo: &AdminTokenRepositoryImpl<B>,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let token = Uuid::new_v4().to_string();
        let document = serde_json::to_string(&token)?;
        repo.backend.write(ADMIN_ACCESS_TOKEN_KEY, &document).await?;
        debug!("issued a new admin access token");
        Ok(token)
    }
}
