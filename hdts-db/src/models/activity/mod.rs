pub mod action_kind;
pub mod activity_log;

pub use action_kind::*;
pub use activity_log::*;
