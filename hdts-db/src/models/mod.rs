pub mod identifiable;
pub mod activity;
pub mod employee;
pub mod ticket;

// Re-exports
pub use identifiable::*;
pub use activity::*;
pub use employee::*;
pub use ticket::*;
