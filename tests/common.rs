#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use quotation_pdf_server::config::QuotationSettings;
use quotation_pdf_server::pdf::{PdfError, PdfRenderer};
use quotation_pdf_server::storage::{ObjectStorage, StorageError};
use quotation_pdf_server::AppState;
use tokio::sync::Mutex;

pub const FAKE_PDF: &[u8] = b"%PDF-1.7 fake";

/// In-memory object storage that records uploads.
pub struct MockObjectStorage {
    files: Arc<Mutex<HashMap<String, (Vec<u8>, String)>>>,
    should_fail: bool,
}

impl MockObjectStorage {
    pub fn new() -> Self {
        Self {
            files: Arc::new(Mutex::new(HashMap::new())),
            should_fail: false,
        }
    }

    pub fn new_failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    pub async fn keys(&self) -> Vec<String> {
        self.files.lock().await.keys().cloned().collect()
    }

    pub async fn get(&self, key: &str) -> Option<(Vec<u8>, String)> {
        self.files.lock().await.get(key).cloned()
    }
}

#[async_trait::async_trait]
impl ObjectStorage for MockObjectStorage {
    async fn upload_file(
        &self,
        key: &str,
        file_data: &[u8],
        content_type: &str,
    ) -> Result<(), StorageError> {
        if self.should_fail {
            return Err(StorageError::Upload {
                key: key.to_string(),
                message: "Mock upload failure".to_string(),
            });
        }
        let mut files = self.files.lock().await;
        files.insert(key.to_string(), (file_data.to_vec(), content_type.to_string()));
        Ok(())
    }

    async fn delete_file(&self, key: &str) -> Result<(), StorageError> {
        let mut files = self.files.lock().await;
        files.remove(key);
        Ok(())
    }

    fn get_asset_url(&self, key: &str) -> String {
        format!("https://test-bucket.s3.ap-south-1.amazonaws.com/{}", key)
    }
}

/// Renderer that keeps the HTML it was given and returns a fixed PDF.
pub struct MockRenderer {
    pub rendered: Mutex<Vec<String>>,
    pub calls: AtomicUsize,
    should_fail: bool,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self {
            rendered: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            should_fail: false,
        }
    }

    pub fn new_failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn last_html(&self) -> Option<String> {
        self.rendered.lock().await.last().cloned()
    }
}

#[async_trait::async_trait]
impl PdfRenderer for MockRenderer {
    async fn render(&self, html: &str) -> Result<Vec<u8>, PdfError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            return Err(PdfError::Browser("Mock Chrome crash".to_string()));
        }
        self.rendered.lock().await.push(html.to_string());
        Ok(FAKE_PDF.to_vec())
    }
}

pub fn test_state(storage: Arc<MockObjectStorage>, renderer: Arc<MockRenderer>) -> AppState {
    AppState::new_with_services(storage, renderer, QuotationSettings::default())
}

pub fn sample_request_json() -> serde_json::Value {
    serde_json::json!({
        "companyName": "Al Noor Trading",
        "date": "13/02/2025",
        "items": [
            {
                "name": "Desk",
                "quantity": 2,
                "price": 300,
                "subItems": [{ "name": "Drawer", "quantity": 2, "price": 50 }]
            },
            { "name": "Lamp", "quantity": 3, "price": 100, "subItems": [] }
        ]
    })
}
