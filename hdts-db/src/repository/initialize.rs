use async_trait::async_trait;

use crate::repository::backend::StorageBackend;

/// Generic repository trait for explicit store initialization
///
/// Seeding happens here, at startup, never as a side effect of a read:
/// `initialize` writes the repository's seed data only when the backend
/// holds no value for its key. Re-initializing a populated store is a
/// no-op, so appended records and already-issued ids always survive.
///
/// # Type Parameters
/// * `B` - The storage adapter the repository runs against
#[async_trait]
pub trait Initialize<B: StorageBackend>: Send + Sync {
    /// Seed the collection if and only if it has never been written
    ///
    /// # Returns
    /// * `Ok(true)` - The store was empty and has been seeded
    /// * `Ok(false)` - A value already existed; nothing was written
    /// * `Err` - The backend could not be read or written
    async fn initialize(&self) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
