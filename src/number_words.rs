//! English cardinal words for whole monetary amounts.
//!
//! Used by the quotation footer, e.g. `1150` becomes
//! "One Thousand One Hundred Fifty".

use thiserror::Error;

/// First amount that has no scale name.
pub const WORDS_LIMIT: u64 = 1_000_000_000_000;

/// Largest integer an `f64` holds exactly.
const MAX_EXACT_F64: f64 = 9_007_199_254_740_991.0;

const BELOW_TWENTY: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Descending scales. Each entry splits `n` into `n / value` and `n % value`.
const SCALES: [(u64, &str); 4] = [
    (1_000_000_000, "Billion"),
    (1_000_000, "Million"),
    (1_000, "Thousand"),
    (100, "Hundred"),
];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AmountError {
    #[error("invalid amount {value}: {reason}")]
    InvalidAmount { value: String, reason: &'static str },
    #[error("amount {value} is too large to write in words (limit is {WORDS_LIMIT})")]
    UnsupportedMagnitude { value: u64 },
}

/// Convert `amount` into title-case English words.
///
/// Zero is the only amount that produces the word "Zero". Amounts at or above
/// one trillion are rejected instead of repeating the "Billion" scale.
pub fn words_for(amount: u64) -> Result<String, AmountError> {
    if amount >= WORDS_LIMIT {
        return Err(AmountError::UnsupportedMagnitude { value: amount });
    }
    if amount == 0 {
        return Ok("Zero".to_string());
    }

    let mut words = Vec::new();
    push_words(amount, &mut words);
    Ok(words.join(" "))
}

fn push_words(n: u64, words: &mut Vec<&'static str>) {
    if n < 20 {
        // zero remainders contribute nothing
        if n > 0 {
            words.push(BELOW_TWENTY[n as usize]);
        }
        return;
    }

    if n < 100 {
        words.push(TENS[(n / 10) as usize]);
        push_words(n % 10, words);
        return;
    }

    for (scale, name) in SCALES {
        if n >= scale {
            push_words(n / scale, words);
            words.push(name);
            push_words(n % scale, words);
            return;
        }
    }
}

/// Accept a JSON number as a whole, non-negative amount.
pub fn whole_amount_from_f64(value: f64) -> Result<u64, AmountError> {
    let invalid = |reason| AmountError::InvalidAmount {
        value: value.to_string(),
        reason,
    };

    if !value.is_finite() {
        return Err(invalid("not a finite number"));
    }
    if value < 0.0 {
        return Err(invalid("must not be negative"));
    }
    if value.fract() != 0.0 {
        return Err(invalid("must be a whole number"));
    }
    if value > MAX_EXACT_F64 {
        return Err(invalid("exceeds the exactly representable range"));
    }

    Ok(value as u64)
}
