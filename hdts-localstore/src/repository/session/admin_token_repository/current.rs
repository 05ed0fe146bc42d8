use tracing::warn;

use hdts_db::repository::backend::StorageBackend;

use crate::keys::ADMIN_ACCESS_TOKEN_KEY;

use super::repo_impl::AdminTokenRepositoryImpl;

impl<B: StorageBackend> AdminTokenRepositoryImpl<B> {
    pub(super) async fn current_impl(
        repo: &AdminTokenRepositoryImpl<B>,
    ) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>> {
        let Some(raw) = repo.backend.read(ADMIN_ACCESS_TOKEN_KEY).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<String>(&raw) {
            Ok(token) => Ok(Some(token)),
            Err(err) => {
                warn!("admin access token document failed to parse: {err}");
                Err(err.into())
            }
        }
    }
}
