use thiserror::Error;

/// Errors raised while encoding or decoding mint wire records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Fewer bytes available than requested.
    #[error("short read: needed {needed} bytes, {remaining} remaining")]
    ShortRead { needed: usize, remaining: usize },

    /// Amount sign byte outside `{0, 1}`.
    #[error("amount sign byte has invalid value: {0}")]
    InvalidSignByte(u8),

    /// The composed amount text was rejected by the decimal parser.
    #[error("failed to parse amount from: {text}")]
    AmountParseFailure { text: String },

    /// The hexadecimal rendering sink failed.
    #[error("failed to render buffer: {0}")]
    RenderFailure(String),

    /// Amount needs more than 10 integer or 18 fractional digits.
    #[error("amount out of range: {text}")]
    OutOfRange { text: String },

    /// Text does not fit its fixed slot.
    #[error("text is {len} bytes, slot holds {max}")]
    TextTooLong { len: usize, max: usize },

    /// Text slot content is not representable.
    #[error("invalid text field: {0}")]
    InvalidText(String),

    /// Digit group is not an even-length string of decimal digits.
    #[error("invalid digit group: {digits:?}")]
    InvalidDigits { digits: String },

    /// Codec settings could not be parsed or rendered.
    #[error("invalid codec settings: {0}")]
    Settings(String),
}

impl CodecError {
    pub fn short_read(needed: usize, remaining: usize) -> Self {
        Self::ShortRead { needed, remaining }
    }

    pub fn invalid_text(message: impl Into<String>) -> Self {
        Self::InvalidText(message.into())
    }
}

pub type CodecResult<T> = Result<T, CodecError>;
