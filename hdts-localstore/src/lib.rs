pub mod backend;
pub mod keys;
pub mod local_repositories;
pub mod repository;
pub mod seed;
pub mod service;
pub mod utils;

pub use backend::in_memory::InMemoryBackend;
pub use backend::json_file::JsonFileBackend;
pub use local_repositories::LocalRepositories;

#[cfg(test)]
pub mod test_helper;
