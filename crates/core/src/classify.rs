//! Token classification
//!
//! Pure functions that sort input tokens into numeric (even/odd), alphabetic,
//! and special buckets, and sum the numeric tokens.

use bigdecimal::num_bigint::BigInt;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;

/// Optional sign, then digits with an optional fraction, or a bare fraction.
static NUMERIC_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$").unwrap()
});

/// Classification of a token list
///
/// Numeric buckets keep the original token text; `alphabets` holds the
/// uppercased tokens; `sum` is the decimal rendering of the integer sum.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ClassificationResult {
    pub even_numbers: Vec<String>,
    pub odd_numbers: Vec<String>,
    pub alphabets: Vec<String>,
    pub special_characters: Vec<String>,
    pub sum: String,
}

impl ClassificationResult {
    /// Number of tokens across all four buckets
    pub fn token_count(&self) -> usize {
        self.even_numbers.len()
            + self.odd_numbers.len()
            + self.alphabets.len()
            + self.special_characters.len()
    }
}

/// A token accepted by the numeric grammar, truncated toward zero
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericValue {
    pub truncated: BigInt,
    pub odd: bool,
}

/// Which bucket a single token belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenClass {
    Numeric(NumericValue),
    Alphabetic,
    Special,
}

/// Parse a token with the numeric grammar
///
/// Surrounding whitespace is ignored. The fractional part is discarded, so
/// "3.7" yields 3 and "-.5" yields 0. Parity is read from the last integer
/// digit, which holds for negative values as well.
pub fn parse_numeric(token: &str) -> Option<NumericValue> {
    let trimmed = token.trim();
    if !NUMERIC_GRAMMAR.is_match(trimmed) {
        return None;
    }

    let (negative, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = match unsigned.split_once('.') {
        Some((integer, _)) => integer,
        None => unsigned,
    };
    let digits = if digits.is_empty() { "0" } else { digits };

    let magnitude = BigInt::from_str(digits).ok()?;
    let truncated = if negative { -magnitude } else { magnitude };
    let odd = matches!(digits.as_bytes().last().copied(), Some(b'1' | b'3' | b'5' | b'7' | b'9'));

    Some(NumericValue { truncated, odd })
}

/// True when the token is one or more ASCII letters and nothing else
pub fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Classify a single token: numeric first, then alphabetic, otherwise special
pub fn classify_token(token: &str) -> TokenClass {
    if let Some(value) = parse_numeric(token) {
        TokenClass::Numeric(value)
    } else if is_alphabetic(token) {
        TokenClass::Alphabetic
    } else {
        TokenClass::Special
    }
}

/// Classify every token, preserving input order inside each bucket
pub fn classify<S: AsRef<str>>(tokens: &[S]) -> ClassificationResult {
    let mut result = ClassificationResult::default();
    let mut sum = BigInt::default();

    for token in tokens {
        let token = token.as_ref();
        match classify_token(token) {
            TokenClass::Numeric(value) => {
                sum += value.truncated;
                if value.odd {
                    result.odd_numbers.push(token.to_string());
                } else {
                    result.even_numbers.push(token.to_string());
                }
            }
            TokenClass::Alphabetic => result.alphabets.push(token.to_ascii_uppercase()),
            TokenClass::Special => result.special_characters.push(token.to_string()),
        }
    }

    result.sum = sum.to_string();
    result
}
