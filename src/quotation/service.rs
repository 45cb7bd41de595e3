//! The generate-and-upload pipeline behind `POST /generate-pdf`.

use actix_web::http::StatusCode;
use chrono::Utc;
use log::{debug, info};
use thiserror::Error;

use super::models::{Quotation, QuotationRequest};
use super::template::render_quotation_html;
use super::totals::{QuotationTotals, TotalsError};
use super::validation::Validator;
use crate::number_words::AmountError;
use crate::pdf::PdfError;
use crate::state::AppState;
use crate::storage::{pdf_object_key, StorageError, PDF_CONTENT_TYPE};

#[derive(Debug, Error)]
pub enum QuotationError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Amount(#[from] AmountError),
    #[error(transparent)]
    Totals(#[from] TotalsError),
    #[error("PDF rendering failed: {0}")]
    Render(#[from] PdfError),
    #[error("PDF upload failed: {0}")]
    Upload(#[from] StorageError),
}

impl QuotationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Amount(_) | Self::Totals(_) => StatusCode::BAD_REQUEST,
            Self::Render(_) | Self::Upload(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// A stored quotation PDF.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedQuotation {
    pub key: String,
    pub url: String,
    pub size: usize,
}

pub async fn generate_quotation_pdf(
    state: &AppState,
    request: &QuotationRequest,
) -> Result<GeneratedQuotation, QuotationError> {
    request.validate().map_err(QuotationError::Validation)?;

    let quotation = Quotation::try_from(request)?;
    let totals = QuotationTotals::compute(&quotation, state.settings.vat_percent)?;
    debug!(
        "Quotation for '{}': subtotal {} ({}), final {} minor units ({})",
        quotation.company_name,
        totals.subtotal,
        totals.subtotal_words,
        totals.final_minor,
        totals.final_words
    );

    let html = render_quotation_html(&quotation, &totals, &state.settings);
    let pdf = state.renderer.render(&html).await?;

    let key = pdf_object_key(Utc::now());
    state
        .storage
        .upload_file(&key, &pdf, PDF_CONTENT_TYPE)
        .await?;

    let url = state.storage.get_asset_url(&key);
    info!("Quotation PDF stored as {} ({} bytes)", key, pdf.len());

    Ok(GeneratedQuotation {
        key,
        url,
        size: pdf.len(),
    })
}
