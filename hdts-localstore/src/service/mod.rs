pub mod activity_log_service_impl;
pub mod csat_service_impl;
pub mod employee_directory_service_impl;
pub mod ticket_service_impl;

pub use activity_log_service_impl::ActivityLogServiceImpl;
pub use csat_service_impl::CsatServiceImpl;
pub use employee_directory_service_impl::EmployeeDirectoryServiceImpl;
pub use ticket_service_impl::TicketServiceImpl;
