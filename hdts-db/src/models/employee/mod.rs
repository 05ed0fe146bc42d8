pub mod common_enums;
pub mod employee;

// Re-exports
pub use common_enums::*;
pub use employee::*;
