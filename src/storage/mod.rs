//! Object storage for generated documents.
//!
//! - `s3` - AWS S3 bucket, the production backend
//! - `local` - a directory on disk, served back under `/files`

mod local;
mod s3;

pub use local::LocalStorage;
pub use s3::S3Storage;

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid object key '{0}'")]
    InvalidKey(String),
    #[error("failed to upload '{key}': {message}")]
    Upload { key: String, message: String },
    #[error("failed to delete '{key}': {message}")]
    Delete { key: String, message: String },
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait::async_trait]
pub trait ObjectStorage {
    async fn upload_file(
        &self,
        key: &str,
        file_data: &[u8],
        content_type: &str,
    ) -> Result<(), StorageError>;

    async fn delete_file(&self, key: &str) -> Result<(), StorageError>;

    /// Public URL under which an uploaded object can be fetched.
    fn get_asset_url(&self, key: &str) -> String;
}

/// Object key for a freshly generated PDF, e.g. `generated-1739440000000-3f2a9c1b.pdf`.
pub fn pdf_object_key(now: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("generated-{}-{}.pdf", now.timestamp_millis(), &suffix[..8])
}

/// Keys are flat names; anything that could escape a prefix or directory is refused.
pub(crate) fn check_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_pdf_object_key_format() {
        let now = Utc.timestamp_millis_opt(1_739_440_000_123).unwrap();
        let key = pdf_object_key(now);

        assert!(key.starts_with("generated-1739440000123-"));
        assert!(key.ends_with(".pdf"));
        assert_eq!(key.len(), "generated-1739440000123-".len() + 8 + ".pdf".len());
        assert!(check_key(&key).is_ok());
    }

    #[test]
    fn test_pdf_object_keys_are_unique() {
        let now = Utc::now();
        assert_ne!(pdf_object_key(now), pdf_object_key(now));
    }

    #[test]
    fn test_check_key_rejects_paths() {
        for bad in ["", "../etc/passwd", "a/b.pdf", ".hidden", "with space.pdf"] {
            assert!(check_key(bad).is_err(), "{:?} should be rejected", bad);
        }
        assert!(check_key("generated-1-abc.pdf").is_ok());
    }
}
