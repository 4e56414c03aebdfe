//! Reversed binary-coded-decimal digit groups.
//!
//! A group of `2k` decimal digits is stored in `k` bytes, two digits per
//! byte as its hexadecimal nibbles, with the byte order reversed so the
//! least significant digit pair comes first:
//!
//! ```text
//! "1234567890"  =>  [0x90, 0x78, 0x56, 0x34, 0x12]
//! ```

use crate::{CodecError, CodecResult};

/// Packs an even-length string of decimal digits into reversed BCD bytes.
pub fn pack_digits(digits: &str) -> CodecResult<Vec<u8>> {
    if digits.len() % 2 != 0 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodecError::InvalidDigits {
            digits: digits.to_string(),
        });
    }
    let mut bytes = hex::decode(digits).map_err(|_| CodecError::InvalidDigits {
        digits: digits.to_string(),
    })?;
    bytes.reverse();
    Ok(bytes)
}

/// Unpacks reversed BCD bytes into their digit string.
///
/// Nibbles above 9 come out as `a`-`f`; rejecting them is left to the
/// decimal parser.
pub fn unpack_digits(bytes: &[u8]) -> String {
    let mut natural = bytes.to_vec();
    natural.reverse();
    hex::encode(natural)
}
