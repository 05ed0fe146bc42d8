pub mod in_memory;
pub mod json_file;

// Re-exports
pub use in_memory::InMemoryBackend;
pub use json_file::JsonFileBackend;
