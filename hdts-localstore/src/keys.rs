//! Fixed store keys, one per collection.
//!
//! Every repository owns exactly one key; the value under it is a single
//! JSON document (an array for record collections, a scalar for the admin
//! access token). The `JsonFileBackend` turns each key into `<key>.json`.

pub const ACTIVITY_LOGS_KEY: &str = "hdts_activity_logs";
pub const EMPLOYEE_USERS_KEY: &str = "hdts_employee_users";
pub const TICKETS_KEY: &str = "hdts_tickets";
pub const ADMIN_ACCESS_TOKEN_KEY: &str = "hdts_admin_access_token";
