pub mod table_query;

// Re-exports
pub use table_query::*;
