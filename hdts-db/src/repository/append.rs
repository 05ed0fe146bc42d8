use async_trait::async_trait;

use crate::models::identifiable::Identifiable;
use crate::repository::backend::StorageBackend;

/// Generic repository trait for appending one record to a collection
///
/// The repository assigns the new record's id as `max(existing ids) + 1`
/// (`1` for an empty collection) and rewrites the whole persisted document.
/// Ids are never reused even after records age out, since the maximum only
/// grows. Concurrent appenders are last-write-wins.
///
/// # Type Parameters
/// * `B` - The storage adapter the repository runs against
/// * `T` - The record type, which must implement Identifiable
#[async_trait]
pub trait Append<B: StorageBackend, T: Identifiable>: Send + Sync {
    /// The caller-supplied payload, without id or assigned timestamps
    type NewRecord: Send;

    /// Append one record and return it as persisted
    ///
    /// # Arguments
    /// * `new_record` - The payload to persist
    ///
    /// # Returns
    /// * `Ok(T)` - The created record, with its assigned id
    /// * `Err` - The collection could not be read, parsed or rewritten
    async fn append(
        &self,
        new_record: Self::NewRecord,
    ) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
