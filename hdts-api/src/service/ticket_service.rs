use async_trait::async_trait;
use hdts_db::models::ticket::{NewTicket, TicketModel, TicketStatus};

use crate::error::ApiResult;

/// Ticket CRUD over the local store. Every mutation also appends the
/// matching activity log entry (`ticket_created`, `ticket_assigned`,
/// `status_changed`).
#[async_trait]
pub trait TicketService: Send + Sync {
    /// Open a ticket: assigns the next id and `TCKT-<n>` number, status
    /// `Open`, and logs `ticket_created`
    async fn create_ticket(&self, new: NewTicket) -> ApiResult<TicketModel>;

    /// Assign a ticket to a handler and log `ticket_assigned`
    ///
    /// # Returns
    /// * `Err(ApiError::NotFound)` - No ticket carries this number
    async fn assign_ticket(&self, ticket_number: &str, assignee: &str) -> ApiResult<TicketModel>;

    /// Move a ticket to a new status and log `status_changed`
    ///
    /// # Returns
    /// * `Err(ApiError::NotFound)` - No ticket carries this number
    async fn update_status(
        &self,
        ticket_number: &str,
        status: TicketStatus,
    ) -> ApiResult<TicketModel>;

    /// Every ticket, in persisted order
    async fn list_tickets(&self) -> ApiResult<Vec<TicketModel>>;

    /// Look a ticket up by its public number
    async fn find_ticket(&self, ticket_number: &str) -> ApiResult<Option<TicketModel>>;
}
