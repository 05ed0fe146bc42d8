pub mod clear;
pub mod current;
pub mod issue;
pub mod repo_impl;

pub use repo_impl::AdminTokenRepositoryImpl;
