pub mod activity;
pub mod directory;
pub mod session;
pub mod ticketing;
