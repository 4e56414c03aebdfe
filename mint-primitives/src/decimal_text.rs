//! Decimal text interface shared by every decimal implementation.
//!
//! The grammar accepted everywhere is deliberately narrow:
//! `[+-]?[0-9]+(\.[0-9]+)?`. There is no exponent form, no digit separators
//! and no surrounding whitespace.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::{BigDecimal, DecimalError, DecimalResult};

/// A decimal value that can be exchanged through its decimal text.
///
/// `Ord` provides the magnitude comparison.
pub trait DecimalText: Sized + Ord {
    /// Builds a value from decimal text.
    fn parse_decimal(text: &str) -> DecimalResult<Self>;

    /// Renders the canonical decimal text of the value.
    fn to_decimal_string(&self) -> String;
}

/// Sign, integer digits and fractional digits of a decimal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalParts<'a> {
    /// Whether the text starts with `-`.
    pub negative: bool,
    /// Digits before the decimal point, never empty.
    pub integer: &'a str,
    /// Digits after the decimal point, empty when there is no point.
    pub fraction: &'a str,
}

impl DecimalParts<'_> {
    /// True when every digit is zero.
    pub fn is_zero(&self) -> bool {
        self.integer.bytes().chain(self.fraction.bytes()).all(|b| b == b'0')
    }
}

/// Splits decimal text into its parts, validating the grammar.
pub fn split_decimal_text(text: &str) -> DecimalResult<DecimalParts<'_>> {
    if text.is_empty() {
        return Err(DecimalError::Empty);
    }

    let (negative, body) = match text.as_bytes()[0] {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (integer, fraction) = match body.split_once('.') {
        Some((integer, fraction)) if !fraction.is_empty() => (integer, fraction),
        Some(_) => return Err(invalid(text)),
        None => (body, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if integer.is_empty() || !all_digits(integer) || !all_digits(fraction) {
        return Err(invalid(text));
    }

    Ok(DecimalParts {
        negative,
        integer,
        fraction,
    })
}

fn invalid(text: &str) -> DecimalError {
    DecimalError::InvalidDigit {
        text: text.to_string(),
    }
}

impl DecimalText for BigDecimal {
    fn parse_decimal(text: &str) -> DecimalResult<Self> {
        BigDecimal::from_str(text)
    }

    fn to_decimal_string(&self) -> String {
        self.to_string()
    }
}

impl DecimalText for Decimal {
    fn parse_decimal(text: &str) -> DecimalResult<Self> {
        split_decimal_text(text)?;
        Decimal::from_str_exact(text).map_err(|_| DecimalError::Overflow {
            text: text.to_string(),
        })
    }

    fn to_decimal_string(&self) -> String {
        self.normalize().to_string()
    }
}
