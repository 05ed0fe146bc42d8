use async_trait::async_trait;

/// Key-value storage adapter behind every repository.
///
/// Each collection lives under one fixed key whose value is a single JSON
/// document (an array for record collections, a scalar for the admin access
/// token). Backends only move strings; all (de)serialization happens in the
/// repositories, so swapping the adapter never changes the persisted shape.
///
/// # Example
/// ```ignore
/// let raw = backend.read("hdts_activity_logs").await?;
/// let entries: Vec<ActivityLogEntryModel> = match raw {
///     Some(json) => serde_json::from_str(&json)?,
///     None => Vec::new(),
/// };
/// ```
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Returns
    /// * `Ok(Some(value))` - The stored document
    /// * `Ok(None)` - No value has ever been written under this key
    /// * `Err` - The backend could not be reached or read
    async fn read(&self, key: &str) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>>;

    /// Replace the value stored under `key` with `value`
    async fn write(&self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Delete the value stored under `key`, if any. Removing an absent key
    /// is not an error.
    async fn remove(&self, key: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
