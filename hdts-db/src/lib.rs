pub mod models;
pub mod repository;
pub mod views;

pub use models::*;
pub use repository::*;
pub use views::*;
