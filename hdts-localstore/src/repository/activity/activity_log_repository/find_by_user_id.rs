use hdts_db::models::activity::ActivityLogEntryModel;
use hdts_db::repository::backend::StorageBackend;

use super::repo_impl::ActivityLogRepositoryImpl;

impl<B: StorageBackend> ActivityLogRepositoryImpl<B> {
    pub(super) async fn find_by_user_id_impl(
        repo: &ActivityLogRepositoryImpl<B>,
        user_id: i64,
    ) -> Result<Vec<ActivityLogEntryModel>, Box<dyn std::error::Error + Send + Sync>> {
        let entries = Self::read_all(repo).await?;
        Ok(entries
            .into_iter()
            .filter(|e| e.user_id == user_id)
            .collect())
    }
}
