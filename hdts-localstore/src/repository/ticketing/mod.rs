pub mod factory;
pub mod ticket_repository;

pub use factory::{TicketingRepoFactory, TicketingRepositories};
pub use ticket_repository::TicketRepositoryImpl;
