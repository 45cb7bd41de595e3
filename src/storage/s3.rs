use aws_config::BehaviorVersion;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;

use super::{check_key, ObjectStorage, StorageError};
use crate::config::S3Settings;

pub struct S3Storage {
    client: S3Client,
    bucket: String,
    region: String,
}

impl S3Storage {
    pub fn new(client: S3Client, bucket: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            region: region.into(),
        }
    }

    /// Build a client for the configured region. Static keys win over the
    /// default AWS provider chain when both halves are present.
    pub async fn from_settings(settings: &S3Settings) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()));

        match (&settings.access_key, &settings.secret_key) {
            (Some(access_key), Some(secret_key)) => {
                loader = loader.credentials_provider(Credentials::new(
                    access_key.clone(),
                    secret_key.clone(),
                    None,
                    None,
                    "quotation-pdf-server",
                ));
            }
            (None, None) => {
                log::info!("No static AWS keys configured, using the default credential chain");
            }
            _ => {
                log::warn!("Only one of AWS_ACCESS_KEY/AWS_SECRET_KEY is set, ignoring both");
            }
        }

        let shared_config = loader.load().await;
        Self::new(
            S3Client::new(&shared_config),
            settings.bucket.clone(),
            settings.region.clone(),
        )
    }
}

#[async_trait::async_trait]
impl ObjectStorage for S3Storage {
    async fn upload_file(
        &self,
        key: &str,
        file_data: &[u8],
        content_type: &str,
    ) -> Result<(), StorageError> {
        check_key(key)?;
        log::debug!(
            "Uploading {} bytes to s3://{}/{}",
            file_data.len(),
            self.bucket,
            key
        );

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(file_data.to_vec()))
            .send()
            .await
            .map_err(|e| StorageError::Upload {
                key: key.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(())
    }

    async fn delete_file(&self, key: &str) -> Result<(), StorageError> {
        check_key(key)?;

        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::Delete {
                key: key.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(())
    }

    fn get_asset_url(&self, key: &str) -> String {
        s3_object_url(&self.bucket, &self.region, key)
    }
}

fn s3_object_url(bucket: &str, region: &str, key: &str) -> String {
    format!("https://{}.s3.{}.amazonaws.com/{}", bucket, region, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_s3_object_url() {
        assert_eq!(
            s3_object_url("quotations", "ap-south-1", "generated-1-abcd1234.pdf"),
            "https://quotations.s3.ap-south-1.amazonaws.com/generated-1-abcd1234.pdf"
        );
    }

    #[tokio::test]
    async fn test_from_settings_url() {
        let storage = S3Storage::from_settings(&S3Settings {
            region: "eu-west-1".to_string(),
            bucket: "my-bucket".to_string(),
            access_key: Some("AKIDEXAMPLE".to_string()),
            secret_key: Some("secret".to_string()),
        })
        .await;

        assert_eq!(
            storage.get_asset_url("a.pdf"),
            "https://my-bucket.s3.eu-west-1.amazonaws.com/a.pdf"
        );
    }

    #[tokio::test]
    async fn test_upload_rejects_bad_key_before_network() {
        let storage = S3Storage::from_settings(&S3Settings {
            region: "eu-west-1".to_string(),
            bucket: "my-bucket".to_string(),
            access_key: Some("AKIDEXAMPLE".to_string()),
            secret_key: Some("secret".to_string()),
        })
        .await;

        let result = storage
            .upload_file("../escape.pdf", b"%PDF", super::super::PDF_CONTENT_TYPE)
            .await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));
    }
}
