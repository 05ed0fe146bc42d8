pub mod activity_log_service;
pub mod csat_service;
pub mod employee_directory_service;
pub mod ticket_service;

// Re-exports
pub use activity_log_service::*;
pub use csat_service::*;
pub use employee_directory_service::*;
pub use ticket_service::*;
