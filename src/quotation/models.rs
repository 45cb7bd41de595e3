use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::number_words::{whole_amount_from_f64, AmountError};

/// Body of `POST /generate-pdf`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuotationRequest {
    #[schema(example = "Al Noor Trading Est.")]
    pub company_name: String,
    /// Printed as-is; today's date (DD/MM/YYYY) when absent.
    #[serde(default)]
    #[schema(example = "13/02/2025")]
    pub date: Option<String>,
    #[serde(default)]
    #[schema(example = "0583")]
    pub quotation_number: Option<String>,
    #[serde(default)]
    pub items: Vec<QuotationItem>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuotationItem {
    #[schema(example = "Office chair")]
    pub name: String,
    #[schema(example = 4)]
    pub quantity: f64,
    #[schema(example = 250)]
    pub price: f64,
    #[serde(default)]
    pub sub_items: Vec<SubItem>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubItem {
    #[schema(example = "Armrest kit")]
    pub name: String,
    #[schema(example = 4)]
    pub quantity: f64,
    #[schema(example = 0)]
    pub price: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePdfResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "https://bucket.s3.ap-south-1.amazonaws.com/generated-1739440000000-3f2a9c1b.pdf")]
    pub pdf_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GeneratePdfResponse {
    pub fn ok(pdf_url: String) -> Self {
        Self {
            success: true,
            pdf_url: Some(pdf_url),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            pdf_url: None,
            error: Some(error.into()),
        }
    }
}

/// A quotation whose quantities and prices are whole, non-negative amounts.
#[derive(Debug, Clone, PartialEq)]
pub struct Quotation {
    pub company_name: String,
    pub date: Option<String>,
    pub quotation_number: Option<String>,
    pub lines: Vec<QuotationLine>,
}

/// One table row; top-level lines may carry sub-lines printed beneath them.
#[derive(Debug, Clone, PartialEq)]
pub struct QuotationLine {
    pub name: String,
    pub quantity: u64,
    pub unit_price: u64,
    pub sub_lines: Vec<QuotationLine>,
}

impl QuotationLine {
    pub fn line_total(&self) -> Option<u64> {
        self.quantity.checked_mul(self.unit_price)
    }

    /// This row plus every sub-row.
    pub fn total_with_sub_lines(&self) -> Option<u64> {
        self.sub_lines
            .iter()
            .try_fold(self.line_total()?, |acc, sub| acc.checked_add(sub.line_total()?))
    }
}

impl TryFrom<&QuotationRequest> for Quotation {
    type Error = AmountError;

    fn try_from(request: &QuotationRequest) -> Result<Self, Self::Error> {
        let lines = request
            .items
            .iter()
            .map(|item| {
                let sub_lines = item
                    .sub_items
                    .iter()
                    .map(|sub| line(&sub.name, sub.quantity, sub.price, Vec::new()))
                    .collect::<Result<Vec<_>, _>>()?;
                line(&item.name, item.quantity, item.price, sub_lines)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            company_name: request.company_name.trim().to_string(),
            date: non_blank(&request.date),
            quotation_number: non_blank(&request.quotation_number),
            lines,
        })
    }
}

fn line(
    name: &str,
    quantity: f64,
    price: f64,
    sub_lines: Vec<QuotationLine>,
) -> Result<QuotationLine, AmountError> {
    Ok(QuotationLine {
        name: name.trim().to_string(),
        quantity: whole_amount_from_f64(quantity)?,
        unit_price: whole_amount_from_f64(price)?,
        sub_lines,
    })
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
