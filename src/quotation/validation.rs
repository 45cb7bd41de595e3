//! Input validation for quotation requests.
//!
//! Every problem in a request is collected so the caller can fix them all in
//! one round trip.

use std::fmt;

use super::models::QuotationRequest;
use crate::number_words::{whole_amount_from_f64, AmountError};

/// Trait for validating request objects.
pub trait Validator {
    fn validate(&self) -> Result<(), String>;
}

/// Validation error with a user-facing message.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// JSON path of the offending field, e.g. `items[0].price`
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn empty_field(field: &str, label: &str) -> Self {
        Self::new(field, format!("{} must not be empty", label))
    }

    pub fn invalid_amount(field: &str, label: &str, error: &AmountError) -> Self {
        Self::new(field, format!("{} is not usable: {}", label, error))
            .with_suggestion("Use a non-negative whole number, e.g. 250")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn to_message(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }

        let mut parts = vec![format!(
            "Validation failed: {} problem(s) found",
            self.errors.len()
        )];
        for (i, error) in self.errors.iter().enumerate() {
            parts.push(format!("{}. {}", i + 1, error));
        }

        parts.join("\n")
    }

    pub fn into_result(self) -> Result<(), String> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.to_message())
        }
    }
}

pub fn validate_required(value: &str, field: &str, label: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add(ValidationError::empty_field(field, label));
    }
}

pub fn validate_whole_amount(value: f64, field: &str, label: &str, errors: &mut ValidationErrors) {
    if let Err(e) = whole_amount_from_f64(value) {
        errors.add(ValidationError::invalid_amount(field, label, &e));
    }
}

impl Validator for QuotationRequest {
    fn validate(&self) -> Result<(), String> {
        let mut errors = ValidationErrors::new();

        validate_required(&self.company_name, "companyName", "Company name", &mut errors);

        if self.items.is_empty() {
            errors.add(
                ValidationError::new("items", "A quotation needs at least one item")
                    .with_suggestion("Add an entry with name, quantity and price"),
            );
        }

        for (i, item) in self.items.iter().enumerate() {
            let path = format!("items[{}]", i);
            validate_required(&item.name, &format!("{}.name", path), "Item name", &mut errors);
            validate_whole_amount(item.quantity, &format!("{}.quantity", path), "Quantity", &mut errors);
            validate_whole_amount(item.price, &format!("{}.price", path), "Price", &mut errors);

            for (j, sub) in item.sub_items.iter().enumerate() {
                let path = format!("{}.subItems[{}]", path, j);
                validate_required(&sub.name, &format!("{}.name", path), "Sub-item name", &mut errors);
                validate_whole_amount(sub.quantity, &format!("{}.quantity", path), "Quantity", &mut errors);
                validate_whole_amount(sub.price, &format!("{}.price", path), "Price", &mut errors);
            }
        }

        errors.into_result()
    }
}
