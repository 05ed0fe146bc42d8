use chrono::Utc;
use tracing::debug;

use hdts_db::models::ticket::common_enums::TicketStatus;
use hdts_db::models::ticket::ticket::TicketModel;
use hdts_db::repository::backend::StorageBackend;

use super::repo_impl::TicketRepositoryImpl;

impl<B: StorageBackend> TicketRepositoryImpl<B> {
    pub(super) async fn update_status_impl(
        repo: &TicketRepositoryImpl<B>,
        ticket_number: &str,
        status: TicketStatus,
    ) -> Result<Option<(TicketStatus, TicketModel)>, Box<dyn std::error::Error + Send + Sync>>
    {
        let mut tickets = Self::read_all(repo).await?;

        let Some(ticket) = tickets
            .iter_mut()
            .find(|t| t.ticket_number.as_str() == ticket_number)
        else {
            return Ok(None);
        };

        let previous = ticket.status;
        ticket.status = status;
        ticket.updated_at = Utc::now();
        let updated = ticket.clone();

        Self::write_all(repo, &tickets).await?;
        debug!("moved {} from {} to {}", ticket_number, previous, status);
        Ok(Some((previous, updated)))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use hdts_db::models::ticket::common_enums::TicketStatus;

    #[tokio::test]
    async fn test_update_status_reports_the_previous_status(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = &ctx.ticketing_repos().ticket_repository;

        let (previous, updated) = repo
            .update_status("TCKT-1002", TicketStatus::InProgress)
            .await?
            .ok_or("expected the status change to land")?;

        assert_eq!(previous, TicketStatus::Open);
        assert_eq!(updated.status, TicketStatus::InProgress);

        let persisted = repo
            .find_by_number("TCKT-1002")
            .await?
            .ok_or("expected TCKT-1002 to exist")?;
        assert_eq!(persisted.status, TicketStatus::InProgress);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_status_touches_updated_at(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = &ctx.ticketing_repos().ticket_repository;

        let before = repo
            .find_by_number("TCKT-1005")
            .await?
            .ok_or("expected TCKT-1005 to exist")?;

        let (_, updated) = repo
            .update_status("TCKT-1005", TicketStatus::Resolved)
            .await?
            .ok_or("expected the status change to land")?;

        assert!(updated.updated_at > before.updated_at);
        assert_eq!(updated.created_at, before.created_at);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_status_returns_none_for_unknown_numbers(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = &ctx.ticketing_repos().ticket_repository;

        assert!(repo
            .update_status("TCKT-9999", TicketStatus::Closed)
            .await?
            .is_none());
        Ok(())
    }
}
