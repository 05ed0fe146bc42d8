pub mod append;
pub mod backend;
pub mod initialize;
pub mod list_all;
pub mod load;
pub mod pagination;

// Re-exports
pub use append::*;
pub use backend::*;
pub use initialize::*;
pub use list_all::*;
pub use load::*;
pub use pagination::*;
