use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use hdts_api::error::ApiResult;
use hdts_api::service::ActivityLogService;
use hdts_db::models::activity::{ActivityLogEntryModel, NewActivityLog};
use hdts_db::repository::append::Append;
use hdts_db::repository::backend::StorageBackend;
use hdts_db::repository::list_all::ListAll;

use crate::repository::activity::activity_log_repository::ActivityLogRepositoryImpl;

/// Feed length when the caller does not ask for a specific limit
const DEFAULT_RECENT_LIMIT: usize = 10;

/// Activity log service over the local store
pub struct ActivityLogServiceImpl<B: StorageBackend> {
    activity_log_repository: Arc<ActivityLogRepositoryImpl<B>>,
}

impl<B: StorageBackend> ActivityLogServiceImpl<B> {
    pub fn new(activity_log_repository: Arc<ActivityLogRepositoryImpl<B>>) -> Self {
        Self {
            activity_log_repository,
        }
    }
}

#[async_trait]
impl<B: StorageBackend> ActivityLogService for ActivityLogServiceImpl<B> {
    async fn get_user_activity_logs(
        &self,
        user_id: Option<i64>,
    ) -> ApiResult<Vec<ActivityLogEntryModel>> {
        match user_id {
            Some(id) => Ok(self.activity_log_repository.find_by_user_id(id).await?),
            None => Ok(self.activity_log_repository.list_all().await?),
        }
    }

    async fn get_all_activity_logs(&self) -> ApiResult<Vec<ActivityLogEntryModel>> {
        Ok(self.activity_log_repository.list_all().await?)
    }

    async fn get_activity_logs_by_ticket(
        &self,
        ticket_id: &str,
    ) -> ApiResult<Vec<ActivityLogEntryModel>> {
        Ok(self
            .activity_log_repository
            .find_by_target_id(ticket_id)
            .await?)
    }

    async fn get_recent_activity_logs(
        &self,
        limit: Option<usize>,
    ) -> ApiResult<Vec<ActivityLogEntryModel>> {
        let limit = limit.unwrap_or(DEFAULT_RECENT_LIMIT);
        Ok(self.activity_log_repository.find_recent(limit).await?)
    }

    async fn log_activity(&self, new: NewActivityLog) -> ApiResult<ActivityLogEntryModel> {
        Ok(self.activity_log_repository.append(new).await?)
    }

    async fn get_activity_logs_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ApiResult<Vec<ActivityLogEntryModel>> {
        Ok(self
            .activity_log_repository
            .find_by_date_range(start, end)
            .await?)
    }
}
