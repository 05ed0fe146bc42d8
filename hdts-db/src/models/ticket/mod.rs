pub mod common_enums;
pub mod ticket;

// Re-exports
pub use common_enums::*;
pub use ticket::*;
