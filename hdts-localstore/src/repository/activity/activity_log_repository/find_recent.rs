use hdts_db::models::activity::ActivityLogEntryModel;
use hdts_db::repository::backend::StorageBackend;

use super::repo_impl::ActivityLogRepositoryImpl;

impl<B: StorageBackend> ActivityLogRepositoryImpl<B> {
    /// Sorts by descending timestamp, then truncates. Entries sharing a
    /// timestamp keep their persisted relative order.
    pub(super) async fn find_recent_impl(
        repo: &ActivityLogRepositoryImpl<B>,
        limit: usize,
    ) -> Result<Vec<ActivityLogEntryModel>, Box<dyn std::error::Error + Send + Sync>> {
        let mut entries = Self::read_all(repo).await?;
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries.truncate(limit);
        Ok(entries)
    }
}
