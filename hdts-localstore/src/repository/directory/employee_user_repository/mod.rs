pub mod create;
pub mod find_by_email;
pub mod initialize;
pub mod repo_impl;
#[cfg(test)]
pub mod test_utils;

pub use repo_impl::EmployeeUserRepositoryImpl;
