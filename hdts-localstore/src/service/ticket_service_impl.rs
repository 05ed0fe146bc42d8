use std::sync::Arc;

use async_trait::async_trait;

use hdts_api::error::{ApiError, ApiResult};
use hdts_api::service::TicketService;
use hdts_db::models::activity::{ActionKind, NewActivityLog};
use hdts_db::models::ticket::{NewTicket, TicketModel, TicketStatus};
use hdts_db::repository::append::Append;
use hdts_db::repository::backend::StorageBackend;
use hdts_db::repository::list_all::ListAll;

use crate::repository::activity::activity_log_repository::ActivityLogRepositoryImpl;
use crate::repository::ticketing::ticket_repository::TicketRepositoryImpl;

/// Ticket service over the local store.
///
/// Mutations are attributed to the acting user handed in at construction,
/// and each one appends the matching activity entry after the ticket write
/// lands.
pub struct TicketServiceImpl<B: StorageBackend> {
    ticket_repository: Arc<TicketRepositoryImpl<B>>,
    activity_log_repository: Arc<ActivityLogRepositoryImpl<B>>,
    actor_id: i64,
    actor_name: String,
}

impl<B: StorageBackend> TicketServiceImpl<B> {
    pub fn new(
        ticket_repository: Arc<TicketRepositoryImpl<B>>,
        activity_log_repository: Arc<ActivityLogRepositoryImpl<B>>,
        actor_id: i64,
        actor_name: impl Into<String>,
    ) -> Self {
        Self {
            ticket_repository,
            activity_log_repository,
            actor_id,
            actor_name: actor_name.into(),
        }
    }

    async fn log(
        &self,
        action: ActionKind,
        ticket_number: &str,
        details: String,
    ) -> ApiResult<()> {
        let activity = NewActivityLog::new(
            self.actor_id,
            self.actor_name.clone(),
            action,
            "ticket",
            ticket_number,
            details,
        );
        self.activity_log_repository.append(activity).await?;
        Ok(())
    }
}

#[async_trait]
impl<B: StorageBackend> TicketService for TicketServiceImpl<B> {
    async fn create_ticket(&self, new: NewTicket) -> ApiResult<TicketModel> {
        let ticket = self.ticket_repository.append(new).await?;
        self.log(
            ActionKind::TicketCreated,
            ticket.ticket_number.as_str(),
            format!(
                "Created ticket {}: {}",
                ticket.ticket_number.as_str(),
                ticket.subject.as_str()
            ),
        )
        .await?;
        Ok(ticket)
    }

    async fn assign_ticket(&self, ticket_number: &str, assignee: &str) -> ApiResult<TicketModel> {
        let Some(ticket) = self.ticket_repository.assign(ticket_number, assignee).await? else {
            return Err(ApiError::NotFound(format!("Ticket {ticket_number} not found")));
        };
        self.log(
            ActionKind::TicketAssigned,
            ticket_number,
            format!("Assigned {ticket_number} to {assignee}"),
        )
        .await?;
        Ok(ticket)
    }

    async fn update_status(
        &self,
        ticket_number: &str,
        status: TicketStatus,
    ) -> ApiResult<TicketModel> {
        let Some((previous, ticket)) = self
            .ticket_repository
            .update_status(ticket_number, status)
            .await?
        else {
            return Err(ApiError::NotFound(format!("Ticket {ticket_number} not found")));
        };
        self.log(
            ActionKind::StatusChanged,
            ticket_number,
            format!("Moved {ticket_number} from {previous} to {status}"),
        )
        .await?;
        Ok(ticket)
    }

    async fn list_tickets(&self) -> ApiResult<Vec<TicketModel>> {
        Ok(self.ticket_repository.list_all().await?)
    }

    async fn find_ticket(&self, ticket_number: &str) -> ApiResult<Option<TicketModel>> {
        Ok(self.ticket_repository.find_by_number(ticket_number).await?)
    }
}
