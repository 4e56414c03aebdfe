//! Fixed-point amount codec.
//!
//! An amount occupies 15 bytes on the wire:
//!
//! ```text
//! +------+---------------------------+-------------------------+
//! | sign | 18 fractional digits (9)  | 10 integer digits (5)   |
//! +------+---------------------------+-------------------------+
//! ```
//!
//! The sign byte is 0 for positive and 1 for negative. Both digit groups use
//! the reversed BCD layout from [`bcd`].

pub mod bcd;

use mint_primitives::{split_decimal_text, DecimalParts, DecimalText};

use crate::{CodecError, CodecResult, OverflowPolicy};

pub use bcd::{pack_digits, unpack_digits};

/// Width of an amount on the wire.
pub const AMOUNT_LEN: usize = 15;
/// Integer digits carried by an amount.
pub const AMOUNT_INT_DIGITS: usize = 10;
/// Fractional digits carried by an amount.
pub const AMOUNT_FRAC_DIGITS: usize = 18;

const SIGN_POSITIVE: u8 = 0;
const SIGN_NEGATIVE: u8 = 1;

const FRAC_START: usize = 1;
const INT_START: usize = FRAC_START + AMOUNT_FRAC_DIGITS / 2;

/// Encodes a decimal value into its 15-byte wire form.
///
/// Values needing more than 10 integer or 18 fractional digits fail with
/// [`CodecError::OutOfRange`] under [`OverflowPolicy::Reject`]. Under
/// [`OverflowPolicy::Truncate`] extra fractional digits are dropped and only
/// the 10 least significant integer digits are kept.
pub fn encode_amount<D: DecimalText>(
    value: &D,
    policy: OverflowPolicy,
) -> CodecResult<[u8; AMOUNT_LEN]> {
    let text = value.to_decimal_string();
    let parts = split_decimal_text(&text).map_err(|_| CodecError::AmountParseFailure {
        text: text.clone(),
    })?;

    let mut integer = parts.integer.trim_start_matches('0');
    let mut fraction = parts.fraction.trim_end_matches('0');

    if integer.len() > AMOUNT_INT_DIGITS || fraction.len() > AMOUNT_FRAC_DIGITS {
        match policy {
            OverflowPolicy::Reject => return Err(CodecError::OutOfRange { text: text.clone() }),
            OverflowPolicy::Truncate => {
                tracing::debug!(amount = %text, "truncating amount to 10.18 digits");
                integer = &integer[integer.len().saturating_sub(AMOUNT_INT_DIGITS)..];
                fraction = &fraction[..fraction.len().min(AMOUNT_FRAC_DIGITS)];
            }
        }
    }

    let kept = DecimalParts {
        negative: parts.negative,
        integer,
        fraction,
    };
    let integer = format!("{:0>width$}", kept.integer, width = AMOUNT_INT_DIGITS);
    let fraction = format!("{:0<width$}", kept.fraction, width = AMOUNT_FRAC_DIGITS);

    let mut out = [0u8; AMOUNT_LEN];
    out[0] = if kept.negative && !kept.is_zero() {
        SIGN_NEGATIVE
    } else {
        SIGN_POSITIVE
    };
    out[FRAC_START..INT_START].copy_from_slice(&pack_digits(&fraction)?);
    out[INT_START..].copy_from_slice(&pack_digits(&integer)?);
    Ok(out)
}

/// Decodes a 15-byte amount.
///
/// The sign byte is validated before any digits are looked at. Digit
/// nibbles above 9 surface as [`CodecError::AmountParseFailure`].
pub fn decode_amount<D: DecimalText>(bytes: &[u8; AMOUNT_LEN]) -> CodecResult<D> {
    let sign = match bytes[0] {
        SIGN_POSITIVE => "",
        SIGN_NEGATIVE => "-",
        other => return Err(CodecError::InvalidSignByte(other)),
    };
    let fraction = unpack_digits(&bytes[FRAC_START..INT_START]);
    let integer = unpack_digits(&bytes[INT_START..]);

    let text = format!("{sign}{integer}.{fraction}");
    D::parse_decimal(&text).map_err(|_| CodecError::AmountParseFailure { text })
}
