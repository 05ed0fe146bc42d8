use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use hdts_db::models::ticket::{TicketModel, TicketStatus};
use hdts_db::repository::backend::StorageBackend;
use hdts_db::repository::list_all::ListAll;
use hdts_db::repository::load::Load;

use crate::keys::TICKETS_KEY;

/// Repository over the ticket collection
pub struct TicketRepositoryImpl<B: StorageBackend> {
    pub(crate) backend: Arc<B>,
}

impl<B: StorageBackend> TicketRepositoryImpl<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// The ticket carrying this public number
    pub async fn find_by_number(
        &self,
        ticket_number: &str,
    ) -> Result<Option<TicketModel>, Box<dyn std::error::Error + Send + Sync>> {
        Self::find_by_number_impl(self, ticket_number).await
    }

    /// Set the assignee and touch `updated_at`. `None` when no ticket
    /// carries this number.
    pub async fn assign(
        &self,
        ticket_number: &str,
        assignee: &str,
    ) -> Result<Option<TicketModel>, Box<dyn std::error::Error + Send + Sync>> {
        Self::assign_impl(self, ticket_number, assignee).await
    }

    /// Move the ticket to a new status and touch `updated_at`, returning
    /// the previous status alongside the updated ticket
    pub async fn update_status(
        &self,
        ticket_number: &str,
        status: TicketStatus,
    ) -> Result<Option<(TicketStatus, TicketModel)>, Box<dyn std::error::Error + Send + Sync>> {
        Self::update_status_impl(self, ticket_number, status).await
    }

    pub(super) async fn read_all(
        repo: &TicketRepositoryImpl<B>,
    ) -> Result<Vec<TicketModel>, Box<dyn std::error::Error + Send + Sync>> {
        match repo.backend.read(TICKETS_KEY).await? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(tickets) => Ok(tickets),
                Err(err) => {
                    warn!("persisted document under '{TICKETS_KEY}' failed to parse: {err}");
                    Err(err.into())
                }
            },
            None => Ok(Vec::new()),
        }
    }

    pub(super) async fn write_all(
        repo: &TicketRepositoryImpl<B>,
        tickets: &[TicketModel],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let raw = serde_json::to_string(tickets)?;
        repo.backend.write(TICKETS_KEY, &raw).await
    }
}

#[async_trait]
impl<B: StorageBackend> ListAll<B, TicketModel> for TicketRepositoryImpl<B> {
    async fn list_all(&self) -> Result<Vec<TicketModel>, Box<dyn std::error::Error + Send + Sync>> {
        Self::read_all(self).await
    }
}

#[async_trait]
impl<B: StorageBackend> Load<B, TicketModel> for TicketRepositoryImpl<B> {
    async fn load(
        &self,
        id: i64,
    ) -> Result<Option<TicketModel>, Box<dyn std::error::Error + Send + Sync>> {
        let tickets = Self::read_all(self).await?;
        Ok(tickets.into_iter().find(|t| t.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helper::setup_test_context;

    #[tokio::test]
    async fn test_list_all_returns_seeded_tickets(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = &ctx.ticketing_repos().ticket_repository;

        let tickets = repo.list_all().await?;
        assert_eq!(tickets.len(), 6);
        Ok(())
    }

    #[tokio::test]
    async fn test_load_finds_a_ticket_by_id(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = &ctx.ticketing_repos().ticket_repository;

        let ticket = repo.load(4).await?;
        assert_eq!(
            ticket.map(|t| t.ticket_number.to_string()),
            Some("TCKT-1004".to_string())
        );
        assert!(repo.load(999).await?.is_none());
        Ok(())
    }
}
