use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::warn;

use hdts_db::models::activity::ActivityLogEntryModel;
use hdts_db::repository::backend::StorageBackend;
use hdts_db::repository::list_all::ListAll;

use crate::keys::ACTIVITY_LOGS_KEY;

/// Repository over the append-only activity log collection.
///
/// Every operation re-reads the persisted JSON array and appends rewrite it
/// whole; there is no cache layer in between.
pub struct ActivityLogRepositoryImpl<B: StorageBackend> {
    pub(crate) backend: Arc<B>,
}

impl<B: StorageBackend> ActivityLogRepositoryImpl<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// Entries whose `user_id` matches
    pub async fn find_by_user_id(
        &self,
        user_id: i64,
    ) -> Result<Vec<ActivityLogEntryModel>, Box<dyn std::error::Error + Send + Sync>> {
        Self::find_by_user_id_impl(self, user_id).await
    }

    /// Entries whose `target_id` matches, regardless of `target_type`
    pub async fn find_by_target_id(
        &self,
        target_id: &str,
    ) -> Result<Vec<ActivityLogEntryModel>, Box<dyn std::error::Error + Send + Sync>> {
        Self::find_by_target_id_impl(self, target_id).await
    }

    /// The `limit` newest entries, sorted by descending timestamp
    pub async fn find_recent(
        &self,
        limit: usize,
    ) -> Result<Vec<ActivityLogEntryModel>, Box<dyn std::error::Error + Send + Sync>> {
        Self::find_recent_impl(self, limit).await
    }

    /// Entries with `start <= timestamp <= end`
    pub async fn find_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ActivityLogEntryModel>, Box<dyn std::error::Error + Send + Sync>> {
        Self::find_by_date_range_impl(self, start, end).await
    }

    /// Deserialize the whole collection. An unwritten key reads as an empty
    /// log; a malformed document is an error, never silently replaced.
    pub(super) async fn read_all(
        repo: &ActivityLogRepositoryImpl<B>,
    ) -> Result<Vec<ActivityLogEntryModel>, Box<dyn std::error::Error + Send + Sync>> {
        match repo.backend.read(ACTIVITY_LOGS_KEY).await? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => Ok(entries),
                Err(err) => {
                    warn!("persisted document under '{ACTIVITY_LOGS_KEY}' failed to parse: {err}");
                    Err(err.into())
                }
            },
            None => Ok(Vec::new()),
        }
    }

    pub(super) async fn write_all(
        repo: &ActivityLogRepositoryImpl<B>,
        entries: &[ActivityLogEntryModel],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let raw = serde_json::to_string(entries)?;
        repo.backend.write(ACTIVITY_LOGS_KEY, &raw).await
    }
}

#[async_trait]
impl<B: StorageBackend> ListAll<B, ActivityLogEntryModel> for ActivityLogRepositoryImpl<B> {
    async fn list_all(
        &self,
    ) -> Result<Vec<ActivityLogEntryModel>, Box<dyn std::error::Error + Send + Sync>> {
        Self::read_all(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helper::setup_test_context;

    #[tokio::test]
    async fn test_list_all_returns_seeded_entries(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = &ctx.activity_repos().activity_log_repository;

        let entries = repo.list_all().await?;
        assert_eq!(entries.len(), 9);
        assert_eq!(entries[0].id, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_corrupted_document_is_an_error(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        ctx.backend.write(ACTIVITY_LOGS_KEY, "{not json").await?;

        let repo = &ctx.activity_repos().activity_log_repository;
        let result = repo.list_all().await;
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<serde_json::Error>().is_some());
        Ok(())
    }
}
