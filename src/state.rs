use std::sync::Arc;

use crate::config::{AppConfig, QuotationSettings, StorageSettings};
use crate::pdf::{ChromeRenderer, PdfRenderer};
use crate::storage::{LocalStorage, ObjectStorage, S3Storage};

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn ObjectStorage + Send + Sync>,
    pub renderer: Arc<dyn PdfRenderer + Send + Sync>,
    pub settings: QuotationSettings,
}

impl AppState {
    pub async fn new_with_config(config: &AppConfig) -> Self {
        let storage: Arc<dyn ObjectStorage + Send + Sync> = match &config.storage {
            StorageSettings::S3(s3) => {
                log::info!("Using S3 bucket '{}' in {}", s3.bucket, s3.region);
                Arc::new(S3Storage::from_settings(s3).await)
            }
            StorageSettings::Local {
                dir,
                public_base_url,
            } => {
                log::info!("Using local storage at {}", dir.display());
                Arc::new(LocalStorage::new(dir.clone(), public_base_url.clone()))
            }
        };

        Self::new_with_services(
            storage,
            Arc::new(ChromeRenderer::new(&config.chrome)),
            config.quotation.clone(),
        )
    }

    pub fn new_with_services(
        storage: Arc<dyn ObjectStorage + Send + Sync>,
        renderer: Arc<dyn PdfRenderer + Send + Sync>,
        settings: QuotationSettings,
    ) -> Self {
        Self {
            storage,
            renderer,
            settings,
        }
    }
}
