use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use hdts_db::models::activity::{ActivityLogEntryModel, NewActivityLog};
use hdts_db::repository::append::Append;
use hdts_db::repository::backend::StorageBackend;

use crate::utils::to_bounded;

use super::repo_impl::ActivityLogRepositoryImpl;

impl<B: StorageBackend> ActivityLogRepositoryImpl<B> {
    pub(super) async fn log_activity_impl(
        repo: &ActivityLogRepositoryImpl<B>,
        new_log: NewActivityLog,
    ) -> Result<ActivityLogEntryModel, Box<dyn std::error::Error + Send + Sync>> {
        let mut entries = Self::read_all(repo).await?;

        // Ids only ever grow: max + 1, starting at 1 for an empty log
        let next_id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let entry = ActivityLogEntryModel {
            id: next_id,
            user_id: new_log.user_id,
            user_name: to_bounded(&new_log.user_name, "user_name")?,
            timestamp: Utc::now(),
            action: to_bounded(new_log.action.as_tag(), "action")?,
            target_type: to_bounded(&new_log.target_type, "target_type")?,
            target_id: to_bounded(&new_log.target_id, "target_id")?,
            details: to_bounded(&new_log.details, "details")?,
        };

        entries.push(entry.clone());
        Self::write_all(repo, &entries).await?;
        debug!("appended activity log entry {next_id}");
        Ok(entry)
    }
}

#[async_trait]
impl<B: StorageBackend> Append<B, ActivityLogEntryModel> for ActivityLogRepositoryImpl<B> {
    type NewRecord = NewActivityLog;

    async fn append(
        &self,
        new_record: NewActivityLog,
    ) -> Result<ActivityLogEntryModel, Box<dyn std::error::Error + Send + Sync>> {
        Self::log_activity_impl(self, new_record).await
    }
}
