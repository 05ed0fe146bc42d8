use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use hdts_db::repository::backend::StorageBackend;

/// Environment variable naming the data directory
pub const DATA_DIR_ENV: &str = "HDTS_DATA_DIR";

/// Directory used when [`DATA_DIR_ENV`] is unset
pub const DEFAULT_DATA_DIR: &str = "./hdts-data";

/// Storage adapter persisting each key as one `<key>.json` file.
///
/// This is the development-mode store: every read loads the whole file,
/// every write rewrites it. Two processes writing the same key race as
/// last-write-wins, the same contract browser local storage gave the
/// original frontend.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    data_dir: PathBuf,
}

impl JsonFileBackend {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Build a backend from `HDTS_DATA_DIR`, falling back to `./hdts-data`
    pub fn from_env() -> Self {
        let data_dir =
            std::env::var(DATA_DIR_ENV).unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        Self::new(data_dir)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl StorageBackend for JsonFileBackend {
    async fn read(
        &self,
        key: &str,
    ) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn write(
        &self,
        key: &str,
        value: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        tokio::fs::create_dir_all(&self.data_dir).await?;
        let path = self.path_for(key);
        tokio::fs::write(&path, value).await?;
        debug!("wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_data_dir() -> PathBuf {
        std::env::temp_dir().join(format!("hdts-backend-test-{}", Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_write_then_read_round_trips(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let dir = temp_data_dir();
        let backend = JsonFileBackend::new(&dir);

        backend.write("hdts_tickets", "[]").await?;
        assert_eq!(backend.read("hdts_tickets").await?, Some("[]".to_string()));

        tokio::fs::remove_dir_all(&dir).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_read_of_absent_key_is_none(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let backend = JsonFileBackend::new(temp_data_dir());
        assert_eq!(backend.read("hdts_tickets").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_value_survives_a_new_backend_instance(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let dir = temp_data_dir();
        {
            let backend = JsonFileBackend::new(&dir);
            backend.write("hdts_admin_access_token", "\"tok\"").await?;
        }
        let reopened = JsonFileBackend::new(&dir);
        assert_eq!(
            reopened.read("hdts_admin_access_token").await?,
            Some("\"tok\"".to_string())
        );

        tokio::fs::remove_dir_all(&dir).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_remove_deletes_the_file() -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    {
        let dir = temp_data_dir();
        let backend = JsonFileBackend::new(&dir);

        backend.write("k", "v").await?;
        backend.remove("k").await?;
        assert_eq!(backend.read("k").await?, None);

        // Removing again is not an error
        backend.remove("k").await?;

        tokio::fs::remove_dir_all(&dir).await?;
        Ok(())
    }
}
