pub mod assign;
pub mod create;
pub mod find_by_number;
pub mod initialize;
pub mod repo_impl;
#[cfg(test)]
pub mod test_utils;
pub mod update_status;

pub use repo_impl::TicketRepositoryImpl;
