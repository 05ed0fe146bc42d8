pub mod csat;
pub mod password_reset;
pub mod registration;
pub mod validation;

// Re-exports
pub use csat::*;
pub use password_reset::*;
pub use registration::*;
pub use validation::*;
