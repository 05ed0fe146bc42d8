use chrono::Utc;
use tracing::debug;

use hdts_db::models::ticket::ticket::TicketModel;
use hdts_db::repository::backend::StorageBackend;

use crate::utils::to_bounded;

use super::repo_impl::TicketRepositoryImpl;

impl<B: StorageBackend> TicketRepositoryImpl<B> {
    pub(super) async fn assign_impl(
        repo: &TicketRepositoryImpl<B>,
        ticket_number: &str,
        assignee: &str,
    ) -> Result<Option<TicketModel>, Box<dyn std::error::Error + Send + Sync>> {
        let mut tickets = Self::read_all(repo).await?;

        let Some(ticket) = tickets
            .iter_mut()
            .find(|t| t.ticket_number.as_str() == ticket_number)
        else {
            return Ok(None);
        };

        ticket.assignee_name = Some(to_bounded(assignee, "assignee_name")?);
        ticket.updated_at = Utc::now();
        let updated = ticket.clone();

        Self::write_all(repo, &tickets).await?;
        debug!("assigned {} to {}", ticket_number, assignee);
        Ok(Some(updated))
    }
}
