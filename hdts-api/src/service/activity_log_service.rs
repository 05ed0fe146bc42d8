use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hdts_db::models::activity::{ActivityLogEntryModel, NewActivityLog};

use crate::error::ApiResult;

/// Query and append operations over the append-only activity log.
///
/// Entries are returned in persisted (append) order unless an operation
/// documents its own ordering. Store-level failures surface as
/// `ApiError::StoreError`, malformed persisted data as
/// `ApiError::CorruptedStore`.
#[async_trait]
pub trait ActivityLogService: Send + Sync {
    /// Entries for one user, or every entry when `user_id` is `None`
    ///
    /// # Arguments
    /// * `user_id` - Id of the acting user to filter by
    async fn get_user_activity_logs(
        &self,
        user_id: Option<i64>,
    ) -> ApiResult<Vec<ActivityLogEntryModel>>;

    /// Every entry in the log, unfiltered
    async fn get_all_activity_logs(&self) -> ApiResult<Vec<ActivityLogEntryModel>>;

    /// Entries whose `target_id` equals `ticket_id`.
    ///
    /// Matching is by `target_id` alone; `target_type` is not consulted, so
    /// an entry about a non-ticket entity with a colliding id string is also
    /// returned. Callers filtering a ticket detail view inherit that quirk.
    async fn get_activity_logs_by_ticket(
        &self,
        ticket_id: &str,
    ) -> ApiResult<Vec<ActivityLogEntryModel>>;

    /// The most recent entries, newest first
    ///
    /// # Arguments
    /// * `limit` - Maximum number of entries to return, 10 when `None`
    async fn get_recent_activity_logs(
        &self,
        limit: Option<usize>,
    ) -> ApiResult<Vec<ActivityLogEntryModel>>;

    /// Append one entry and return it as persisted, with its assigned id
    /// and timestamp
    async fn log_activity(&self, new: NewActivityLog) -> ApiResult<ActivityLogEntryModel>;

    /// Entries with `start <= timestamp <= end`, inclusive on both bounds
    async fn get_activity_logs_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ApiResult<Vec<ActivityLogEntryModel>>;
}
