use hdts_db::models::activity::ActivityLogEntryModel;
use hdts_db::repository::backend::StorageBackend;

use super::repo_impl::ActivityLogRepositoryImpl;

impl<B: StorageBackend> ActivityLogRepositoryImpl<B> {
    /// Matches on `target_id` alone. `target_type` is not part of the
    /// predicate, so an entry about another entity kind whose id string
    /// collides with the queried one is also returned.
    pub(super) async fn find_by_target_id_impl(
        repo: &ActivityLogRepositoryImpl<B>,
        target_id: &str,
    ) -> Result<Vec<ActivityLogEntryModel>, Box<dyn std::error::Error + Send + Sync>> {
        let entries = Self::read_all(repo).await?;
        Ok(entries
            .into_iter()
            .filter(|e| e.target_id.as_str() == target_id)
            .collect())
    }
}
