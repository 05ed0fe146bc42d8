use hdts_db::models::ticket::ticket::TicketModel;
use hdts_db::repository::backend::StorageBackend;

use super::repo_impl::TicketRepositoryImpl;

impl<B: StorageBackend> TicketRepositoryImpl<B> {
    pub(super) async fn find_by_number_impl(
        repo: &TicketRepositoryImpl<B>,
        ticket_number: &str,
    ) -> Result<Option<TicketModel>, Box<dyn std::error::Error + Send + Sync>> {
        let tickets = Self::read_all(repo).await?;
        Ok(tickets
            .into_iter()
            .find(|t| t.ticket_number.as_str() == ticket_number))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;

    #[tokio::test]
    async fn test_find_by_number_returns_the_matching_ticket(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = &ctx.ticketing_repos().ticket_repository;

        let ticket = repo.find_by_number("TCKT-1003").await?;

        let ticket = ticket.ok_or("expected TCKT-1003 to exist")?;
        assert_eq!(ticket.subject.as_str(), "Password reset for shared mailbox");
        Ok(())
    }

    #[tokio::test]
    async fn test_find_by_number_returns_none_for_unknown_numbers(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = &ctx.ticketing_repos().ticket_repository;

        assert!(repo.find_by_number("TCKT-9999").await?.is_none());
        Ok(())
    }
}
