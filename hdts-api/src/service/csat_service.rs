use async_trait::async_trait;
use hdts_db::models::activity::ActivityLogEntryModel;

use crate::domain::csat::CsatSubmission;
use crate::error::ApiResult;

/// Accepts customer satisfaction ratings for resolved tickets.
///
/// Forwarding the rating to the backend feedback service is network
/// plumbing and happens elsewhere; this service validates the submission
/// and records the `csat_submitted` activity.
#[async_trait]
pub trait CsatService: Send + Sync {
    /// Validate and record a rating, returning the logged activity entry
    ///
    /// # Returns
    /// * `Err(ApiError::ValidationError)` - Rating outside 1..=5, missing
    ///   ticket number or overlong comment
    async fn submit_rating(&self, submission: CsatSubmission) -> ApiResult<ActivityLogEntryModel>;
}
