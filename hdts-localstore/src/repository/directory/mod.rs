pub mod employee_user_repository;
pub mod factory;

pub use employee_user_repository::EmployeeUserRepositoryImpl;
pub use factory::{DirectoryRepoFactory, DirectoryRepositories};
