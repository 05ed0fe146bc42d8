use async_trait::async_trait;

use crate::models::identifiable::Identifiable;
use crate::repository::backend::StorageBackend;

/// Generic repository trait for loading a single record by its id
///
/// Any record type implementing [`Identifiable`] can be looked up through
/// this trait. Lookups scan the deserialized collection; at local-store
/// volumes that beats maintaining an index.
///
/// # Type Parameters
/// * `B` - The storage adapter the repository runs against
/// * `T` - The record type, which must implement Identifiable
///
/// # Example
/// ```ignore
/// impl<B: StorageBackend> Load<B, TicketModel> for TicketRepositoryImpl<B> {
///     async fn load(&self, id: i64) -> Result<Option<TicketModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Load<B: StorageBackend, T: Identifiable>: Send + Sync {
    /// Load a record by its unique identifier
    ///
    /// # Arguments
    /// * `id` - The id of the record to load
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The record with this id
    /// * `Ok(None)` - No record carries this id
    /// * `Err` - The collection could not be read or parsed
    async fn load(&self, id: i64) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
