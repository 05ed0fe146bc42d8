pub mod admin_token_repository;
pub mod factory;

pub use admin_token_repository::AdminTokenRepositoryImpl;
pub use factory::{SessionRepoFactory, SessionRepositories};
