pub mod find_by_date_range;
pub mod find_by_target_id;
pub mod find_by_user_id;
pub mod find_recent;
pub mod initialize;
pub mod log_activity;
pub mod repo_impl;
#[cfg(test)]
pub mod test_utils;

pub use repo_impl::ActivityLogRepositoryImpl;
