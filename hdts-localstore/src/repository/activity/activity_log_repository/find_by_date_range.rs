use chrono::{DateTime, Utc};

use hdts_db::models::activity::ActivityLogEntryModel;
use hdts_db::repository::backend::StorageBackend;

use super::repo_impl::ActivityLogRepositoryImpl;

impl<B: StorageBackend> ActivityLogRepositoryImpl<B> {
    /// Inclusive on both bounds
    pub(super) async fn find_by_date_range_impl(
        repo: &ActivityLogRepositoryImpl<B>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ActivityLogEntryModel>, Box<dyn std::error::Error + Send + Sync>> {
        let entries = Self::read_all(repo).await?;
        Ok(entries
            .into_iter()
            .filter(|e| e.timestamp >= start && e.timestamp <= end)
            .collect())
    }
}
