use std::sync::Arc;

use hdts_db::repository::backend::StorageBackend;

/// Admin access token repository backed by a key-value storage adapter
///
/// The token lives under a single fixed key as one JSON string document,
/// the one scalar collection in the store. Issuing a new token replaces
/// whatever token was there before.
pub struct AdminTokenRepositoryImpl<B: StorageBackend> {
    pub(crate) backend: Arc<B>,
}

impl<B: StorageBackend> AdminTokenRepositoryImpl<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// Generate a fresh token, persist it and hand it back
    pub async fn issue(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Self::issue_impl(self).await
    }

    /// The token currently on record, `None` when unset
    pub async fn current(&self) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>> {
        Self::current_impl(self).await
    }

    /// Drop the token from the store
    pub async fn clear(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Self::clear_impl(self).await
    }
}
