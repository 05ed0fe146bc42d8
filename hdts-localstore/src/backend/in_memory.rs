use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use hdts_db::repository::backend::StorageBackend;

/// Storage adapter holding every document in process memory.
///
/// Used by tests and demos; nothing survives the process. A fresh instance
/// is an uninitialized store for every key.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageBackend for InMemoryBackend {
    async fn read(
        &self,
        key: &str,
    ) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn write(
        &self,
        key: &str,
        value: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_of_absent_key_is_none() -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    {
        let backend = InMemoryBackend::new();
        assert_eq!(backend.read("missing").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_write_then_read_round_trips() -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    {
        let backend = InMemoryBackend::new();
        backend.write("k", "[1,2,3]").await?;
        assert_eq!(backend.read("k").await?, Some("[1,2,3]".to_string()));

        backend.write("k", "[4]").await?;
        assert_eq!(backend.read("k").await?, Some("[4]".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn test_remove_clears_the_key() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let backend = InMemoryBackend::new();
        backend.write("k", "v").await?;
        backend.remove("k").await?;
        assert_eq!(backend.read("k").await?, None);

        // Removing an absent key is not an error
        backend.remove("k").await?;
        Ok(())
    }
}
