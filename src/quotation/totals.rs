//! Quotation totals and VAT.
//!
//! Line amounts are whole currency units. VAT is kept in hundredths so a
//! 15% charge on, say, 1001 stays exact (150.15).

use thiserror::Error;

use super::models::Quotation;
use crate::number_words::{words_for, AmountError};

#[derive(Debug, Error, PartialEq)]
pub enum TotalsError {
    #[error("quotation amounts are too large to add up")]
    Overflow,
    #[error(transparent)]
    Words(#[from] AmountError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuotationTotals {
    pub vat_percent: u32,
    /// Sum of all rows before VAT, in whole units.
    pub subtotal: u64,
    pub vat_minor: u64,
    pub final_minor: u64,
    pub subtotal_words: String,
    /// Words for the VAT-inclusive amount rounded half-up to whole units.
    pub final_words: String,
}

impl QuotationTotals {
    pub fn compute(quotation: &Quotation, vat_percent: u32) -> Result<Self, TotalsError> {
        let subtotal = quotation
            .lines
            .iter()
            .try_fold(0u64, |acc, line| acc.checked_add(line.total_with_sub_lines()?))
            .ok_or(TotalsError::Overflow)?;

        // subtotal * 100 minor units * pct / 100
        let vat_minor = subtotal
            .checked_mul(u64::from(vat_percent))
            .ok_or(TotalsError::Overflow)?;
        let final_minor = subtotal
            .checked_mul(100)
            .and_then(|minor| minor.checked_add(vat_minor))
            .ok_or(TotalsError::Overflow)?;

        Ok(Self {
            vat_percent,
            subtotal,
            vat_minor,
            final_minor,
            subtotal_words: words_for(subtotal)?,
            final_words: words_for(round_half_up(final_minor))?,
        })
    }
}

fn round_half_up(minor: u64) -> u64 {
    minor / 100 + u64::from(minor % 100 >= 50)
}

/// `115000` -> `"1150"`, `15015` -> `"150.15"`, `1250` -> `"12.50"`.
pub fn format_minor(minor: u64) -> String {
    let (whole, fraction) = (minor / 100, minor % 100);
    if fraction == 0 {
        whole.to_string()
    } else {
        format!("{}.{:02}", whole, fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number_words::WORDS_LIMIT;
    use crate::quotation::models::QuotationLine;

    fn line(quantity: u64, unit_price: u64, sub_lines: Vec<QuotationLine>) -> QuotationLine {
        QuotationLine {
            name: "row".to_string(),
            quantity,
            unit_price,
            sub_lines,
        }
    }

    fn quotation(lines: Vec<QuotationLine>) -> Quotation {
        Quotation {
            company_name: "ACME".to_string(),
            date: None,
            quotation_number: None,
            lines,
        }
    }

    #[test]
    fn test_thousand_with_vat() {
        let q = quotation(vec![
            line(2, 300, vec![line(2, 50, Vec::new())]),
            line(3, 100, Vec::new()),
        ]);

        let totals = QuotationTotals::compute(&q, 15).unwrap();
        assert_eq!(totals.subtotal, 1000);
        assert_eq!(format_minor(totals.vat_minor), "150");
        assert_eq!(format_minor(totals.final_minor), "1150");
        assert_eq!(totals.subtotal_words, "One Thousand");
        assert_eq!(totals.final_words, "One Thousand One Hundred Fifty");
    }

    #[test]
    fn test_fractional_vat() {
        let totals = QuotationTotals::compute(&quotation(vec![line(1, 1001, Vec::new())]), 15).unwrap();
        assert_eq!(format_minor(totals.vat_minor), "150.15");
        assert_eq!(format_minor(totals.final_minor), "1151.15");
        assert_eq!(totals.final_words, "One Thousand One Hundred Fifty One");
    }

    #[test]
    fn test_final_words_round_half_up() {
        // 10 * 1.15 = 11.50
        let totals = QuotationTotals::compute(&quotation(vec![line(1, 10, Vec::new())]), 15).unwrap();
        assert_eq!(format_minor(totals.final_minor), "11.50");
        assert_eq!(totals.final_words, "Twelve");
    }

    #[test]
    fn test_zero_total() {
        let totals = QuotationTotals::compute(&quotation(vec![line(5, 0, Vec::new())]), 15).unwrap();
        assert_eq!(totals.subtotal_words, "Zero");
        assert_eq!(totals.final_words, "Zero");
        assert_eq!(format_minor(totals.final_minor), "0");
    }

    #[test]
    fn test_overflow_detected() {
        let q = quotation(vec![line(u64::MAX / 2, 3, Vec::new())]);
        assert_eq!(QuotationTotals::compute(&q, 15), Err(TotalsError::Overflow));
    }

    #[test]
    fn test_too_large_for_words() {
        let q = quotation(vec![line(1, WORDS_LIMIT, Vec::new())]);
        assert!(matches!(
            QuotationTotals::compute(&q, 15),
            Err(TotalsError::Words(AmountError::UnsupportedMagnitude { .. }))
        ));
    }

    #[test]
    fn test_format_minor() {
        assert_eq!(format_minor(0), "0");
        assert_eq!(format_minor(5), "0.05");
        assert_eq!(format_minor(1250), "12.50");
        assert_eq!(format_minor(115_000), "1150");
    }
}
