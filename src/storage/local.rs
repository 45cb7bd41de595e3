use std::path::PathBuf;

use super::{check_key, ObjectStorage, StorageError};

/// Stores objects as plain files in a directory.
pub struct LocalStorage {
    dir: PathBuf,
    public_base_url: String,
}

impl LocalStorage {
    pub fn new(dir: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn object_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        check_key(key)?;
        Ok(self.dir.join(key))
    }
}

#[async_trait::async_trait]
impl ObjectStorage for LocalStorage {
    async fn upload_file(
        &self,
        key: &str,
        file_data: &[u8],
        _content_type: &str,
    ) -> Result<(), StorageError> {
        let path = self.object_path(key)?;
        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(&path, file_data)
            .await
            .map_err(|e| StorageError::Upload {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        log::debug!("Stored {} bytes at {}", file_data.len(), path.display());
        Ok(())
    }

    async fn delete_file(&self, key: &str) -> Result<(), StorageError> {
        let path = self.object_path(key)?;
        tokio::fs::remove_file(&path)
            .await
            .map_err(|e| StorageError::Delete {
                key: key.to_string(),
                message: e.to_string(),
            })
    }

    fn get_asset_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url, key)
    }
}
