//! Headless Chromium rendering engine.
//!
//! Writes the document to a temporary directory, opens it through a
//! `file://` URL and prints it to an A4 PDF. All browser calls block, so the
//! work runs on the blocking thread pool.

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context};
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};
use tempfile::tempdir;
use url::Url;

use super::{PdfError, PdfRenderer};
use crate::config::ChromeSettings;

const DOCUMENT_FILE: &str = "quotation.html";

/// A4 in inches, the unit Chrome's print API expects.
const A4_WIDTH_IN: f64 = 8.27;
const A4_HEIGHT_IN: f64 = 11.69;

/// Launches a fresh browser per document.
#[derive(Debug, Clone, Default)]
pub struct ChromeRenderer {
    chrome_path: Option<PathBuf>,
    no_sandbox: bool,
}

impl ChromeRenderer {
    pub fn new(settings: &ChromeSettings) -> Self {
        Self {
            chrome_path: settings.path.clone(),
            no_sandbox: settings.no_sandbox,
        }
    }
}

#[async_trait::async_trait]
impl PdfRenderer for ChromeRenderer {
    async fn render(&self, html: &str) -> Result<Vec<u8>, PdfError> {
        let html = html.to_owned();
        let renderer = self.clone();
        tokio::task::spawn_blocking(move || renderer.render_blocking(&html)).await?
    }
}

impl ChromeRenderer {
    fn render_blocking(&self, html: &str) -> Result<Vec<u8>, PdfError> {
        let temp_dir = tempdir().map_err(PdfError::TempDir)?;
        let html_path = temp_dir.path().join(DOCUMENT_FILE);
        fs::write(&html_path, html).map_err(PdfError::WriteHtml)?;

        let file_url =
            Url::from_file_path(&html_path).map_err(|_| PdfError::FileUrl(html_path.clone()))?;

        let pdf = self
            .print_url(file_url.as_str())
            .map_err(|e| PdfError::Browser(format!("{:#}", e)))?;

        if pdf.is_empty() {
            return Err(PdfError::EmptyOutput);
        }

        log::debug!("Chrome produced {} bytes of PDF", pdf.len());
        Ok(pdf)
    }

    fn print_url(&self, url: &str) -> anyhow::Result<Vec<u8>> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(!self.no_sandbox)
            .path(self.chrome_path.clone())
            .build()
            .map_err(|e| anyhow!("invalid Chrome launch options: {}", e))?;

        let browser = Browser::new(options).context("failed to launch Chrome")?;
        let tab = browser.new_tab().context("failed to open a tab")?;

        tab.navigate_to(url)
            .context("failed to open the HTML document")?
            .wait_until_navigated()
            .context("document did not finish loading")?;

        tab.print_to_pdf(Some(a4_print_options()))
            .context("failed to print the page")
    }
}

fn a4_print_options() -> PrintToPdfOptions {
    PrintToPdfOptions {
        print_background: Some(true),
        paper_width: Some(A4_WIDTH_IN),
        paper_height: Some(A4_HEIGHT_IN),
        ..Default::default()
    }
}
