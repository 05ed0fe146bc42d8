use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use hdts_db::models::ticket::common_enums::TicketStatus;
use hdts_db::models::ticket::ticket::{NewTicket, TicketModel};
use hdts_db::repository::append::Append;
use hdts_db::repository::backend::StorageBackend;

use crate::utils::to_bounded;

use super::repo_impl::TicketRepositoryImpl;

/// Ticket numbers follow the `TCKT-<n>` scheme. New numbers continue from the
/// highest number already present, so numbers stay unique even after tickets
/// with lower numbers are appended out of order.
const TICKET_NUMBER_PREFIX: &str = "TCKT-";

impl<B: StorageBackend> TicketRepositoryImpl<B> {
    pub(super) async fn create_impl(
        repo: &TicketRepositoryImpl<B>,
        new_ticket: NewTicket,
    ) -> Result<TicketModel, Box<dyn std::error::Error + Send + Sync>> {
        let mut tickets = Self::read_all(repo).await?;

        let next_id = tickets.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let next_number = tickets
            .iter()
            .filter_map(|t| t.ticket_number.as_str().strip_prefix(TICKET_NUMBER_PREFIX))
            .filter_map(|n| n.parse::<i64>().ok())
            .max()
            .unwrap_or(1000)
            + 1;

        let now = Utc::now();
        let ticket = TicketModel {
            id: next_id,
            ticket_number: to_bounded(&format!("{TICKET_NUMBER_PREFIX}{next_number}"), "ticket_number")?,
            subject: to_bounded(&new_ticket.subject, "subject")?,
            status: TicketStatus::Open,
            priority: new_ticket.priority,
            category: to_bounded(&new_ticket.category, "category")?,
            requester_name: to_bounded(&new_ticket.requester_name, "requester_name")?,
            assignee_name: None,
            created_at: now,
            updated_at: now,
        };

        tickets.push(ticket.clone());
        Self::write_all(repo, &tickets).await?;
        debug!("created ticket {}", ticket.ticket_number);
        Ok(ticket)
    }
}

#[async_trait]
impl<B: StorageBackend> Append<B, TicketModel> for TicketRepositoryImpl<B> {
    type NewRecord = NewTicket;

    async fn append(
        &self,
        new_record: NewTicket,
    ) -> Result<TicketModel, Box<dyn std::error::Error + Send + Sync>> {
        Self::create_impl(self, new_record).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::create_test_ticket;
    use crate::test_helper::{setup_test_context, setup_uninitialized_context};
    use hdts_db::models::ticket::common_enums::TicketStatus;
    use hdts_db::repository::append::Append;
    use hdts_db::repository::initialize::Initialize;
    use hdts_db::repository::list_all::ListAll;

    #[tokio::test]
    async fn test_create_continues_the_ticket_number_sequence(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = &ctx.ticketing_repos().ticket_repository;

        let created = repo.append(create_test_ticket("Replace broken monitor")).await?;

        assert_eq!(created.id, 7);
        assert_eq!(created.ticket_number.as_str(), "TCKT-1007");
        assert_eq!(created.status, TicketStatus::Open);
        assert!(created.assignee_name.is_none());
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(repo.list_all().await?.len(), 7);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_on_an_empty_store_starts_at_the_base_number(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_uninitialized_context();
        let repo = &ctx.ticketing_repos().ticket_repository;

        let created = repo.append(create_test_ticket("First ever ticket")).await?;

        assert_eq!(created.id, 1);
        assert_eq!(created.ticket_number.as_str(), "TCKT-1001");
        Ok(())
    }

    #[tokio::test]
    async fn test_create_rejects_an_overlong_subject(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = &ctx.ticketing_repos().ticket_repository;

        let mut ticket = create_test_ticket("placeholder");
        ticket.subject = "s".repeat(101);

        assert!(repo.append(ticket).await.is_err());
        assert_eq!(repo.list_all().await?.len(), 6);
        Ok(())
    }

    #[tokio::test]
    async fn test_initialize_respects_existing_sequence(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = &ctx.ticketing_repos().ticket_repository;

        repo.append(create_test_ticket("One more request")).await?;
        assert!(!repo.initialize().await?);

        let again = repo.append(create_test_ticket("And another")).await?;
        assert_eq!(again.ticket_number.as_str(), "TCKT-1008");
        Ok(())
    }
}
