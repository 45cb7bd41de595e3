//! HTML to PDF rendering.
//!
//! The `PdfRenderer` trait keeps the HTTP layer independent of the browser so
//! handlers can be exercised with an in-memory renderer.

pub mod chrome;

pub use chrome::ChromeRenderer;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning an HTML document into a PDF.
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[source] std::io::Error),
    #[error("failed to write HTML document: {0}")]
    WriteHtml(#[source] std::io::Error),
    #[error("cannot build a file URL for {0}")]
    FileUrl(PathBuf),
    #[error("headless browser failed: {0}")]
    Browser(String),
    #[error("rendering task was cancelled or panicked: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error("browser returned an empty PDF")]
    EmptyOutput,
}

#[async_trait::async_trait]
pub trait PdfRenderer {
    /// Render a complete HTML document to PDF bytes.
    async fn render(&self, html: &str) -> Result<Vec<u8>, PdfError>;
}
