use std::sync::Arc;

use async_trait::async_trait;
use validator::Validate;

use hdts_api::domain::csat::{CsatSubmission, CSAT_MAX_RATING};
use hdts_api::error::ApiResult;
use hdts_api::service::CsatService;
use hdts_db::models::activity::{ActionKind, ActivityLogEntryModel, NewActivityLog};
use hdts_db::repository::append::Append;
use hdts_db::repository::backend::StorageBackend;

use crate::repository::activity::activity_log_repository::ActivityLogRepositoryImpl;

/// CSAT service over the local store
pub struct CsatServiceImpl<B: StorageBackend> {
    activity_log_repository: Arc<ActivityLogRepositoryImpl<B>>,
    actor_id: i64,
    actor_name: String,
}

impl<B: StorageBackend> CsatServiceImpl<B> {
    pub fn new(
        activity_log_repository: Arc<ActivityLogRepositoryImpl<B>>,
        actor_id: i64,
        actor_name: impl Into<String>,
    ) -> Self {
        Self {
            activity_log_repository,
            actor_id,
            actor_name: actor_name.into(),
        }
    }
}

#[async_trait]
impl<B: StorageBackend> CsatService for CsatServiceImpl<B> {
    async fn submit_rating(&self, submission: CsatSubmission) -> ApiResult<ActivityLogEntryModel> {
        submission.validate()?;

        // The comment stays out of the log line; `details` is bounded and
        // the comment alone may already be 250 characters.
        let activity = NewActivityLog::new(
            self.actor_id,
            self.actor_name.clone(),
            ActionKind::CsatSubmitted,
            "ticket",
            submission.ticket_number.clone(),
            format!(
                "Rated {} {}/{CSAT_MAX_RATING}",
                submission.ticket_number, submission.rating
            ),
        );
        Ok(self.activity_log_repository.append(activity).await?)
    }
}
