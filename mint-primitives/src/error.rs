//! Error types for decimal parsing and rescaling.

use thiserror::Error;

/// Errors raised while building decimal values from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecimalError {
    /// The input text was empty.
    #[error("empty decimal text")]
    Empty,

    /// The input text is not of the form `[+-]digits[.digits]`.
    #[error("invalid decimal text: {text:?}")]
    InvalidDigit {
        /// The rejected text.
        text: String,
    },

    /// Rescaling would drop non-zero fractional digits.
    #[error("cannot change decimals from {from} to {to} without losing precision")]
    PrecisionLoss {
        /// Current number of decimal places.
        from: u8,
        /// Requested number of decimal places.
        to: u8,
    },

    /// The value does not fit the target representation.
    #[error("decimal value out of range: {text}")]
    Overflow {
        /// The text that could not be represented.
        text: String,
    },
}

/// Result type for decimal operations.
pub type DecimalResult<T> = Result<T, DecimalError>;
