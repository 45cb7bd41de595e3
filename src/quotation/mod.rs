//! Quotation documents: request models, validation, totals, HTML and the
//! HTTP handler that turns them into an uploaded PDF.
//!
//! - `models` - request/response bodies and the validated `Quotation`
//! - `validation` - field-level checks with user-facing messages
//! - `totals` - subtotal, VAT and amounts in words
//! - `template` - bilingual quotation HTML
//! - `service` - render, upload and return the public URL
//! - `handlers` - actix-web endpoints

pub mod handlers;
pub mod models;
pub mod service;
pub mod template;
pub mod totals;
pub mod validation;

pub use models::{GeneratePdfResponse, Quotation, QuotationItem, QuotationLine, QuotationRequest, SubItem};
pub use service::{generate_quotation_pdf, GeneratedQuotation, QuotationError};
pub use totals::QuotationTotals;
