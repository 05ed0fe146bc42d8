use async_trait::async_trait;

use crate::models::identifiable::Identifiable;
use crate::repository::backend::StorageBackend;

/// Generic repository trait for listing every record in a collection
///
/// Every call re-reads and re-parses the persisted document; an
/// uninitialized collection lists as empty rather than erroring.
///
/// # Type Parameters
/// * `B` - The storage adapter the repository runs against
/// * `T` - The record type, which must implement Identifiable
#[async_trait]
pub trait ListAll<B: StorageBackend, T: Identifiable>: Send + Sync {
    /// List all records in persisted order
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - Every record in the collection, empty when the
    ///   collection has never been written
    /// * `Err` - The collection could not be read or parsed
    async fn list_all(&self) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
