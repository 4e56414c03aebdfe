//! Fixed 64-byte text slots.

use crate::{CodecError, CodecResult, OverflowPolicy};

/// Width of a text slot on the wire.
pub const STRING64_LEN: usize = 64;

/// Encodes text into a zero-padded 64-byte slot.
///
/// Under [`OverflowPolicy::Reject`] text longer than the slot and text with
/// an interior zero byte are errors, since neither would decode back to the
/// same value. Under [`OverflowPolicy::Truncate`] the text is cut at the last
/// UTF-8 character boundary that fits and written as is.
pub fn encode_string64(value: &str, policy: OverflowPolicy) -> CodecResult<[u8; STRING64_LEN]> {
    let bytes = value.as_bytes();
    let content = match policy {
        OverflowPolicy::Reject => {
            if bytes.len() > STRING64_LEN {
                return Err(CodecError::TextTooLong {
                    len: bytes.len(),
                    max: STRING64_LEN,
                });
            }
            if bytes.contains(&0) {
                return Err(CodecError::invalid_text("interior zero byte"));
            }
            bytes
        }
        OverflowPolicy::Truncate => {
            let mut end = bytes.len().min(STRING64_LEN);
            while !value.is_char_boundary(end) {
                end -= 1;
            }
            if end < bytes.len() {
                tracing::debug!(len = bytes.len(), kept = end, "truncating text field");
            }
            &bytes[..end]
        }
    };

    let mut slot = [0u8; STRING64_LEN];
    slot[..content.len()].copy_from_slice(content);
    Ok(slot)
}

/// Decodes a 64-byte slot: the value is everything before the first zero
/// byte, or the whole slot when there is none.
pub fn decode_string64(slot: &[u8; STRING64_LEN]) -> CodecResult<String> {
    let end = slot.iter().position(|&b| b == 0).unwrap_or(STRING64_LEN);
    String::from_utf8(slot[..end].to_vec()).map_err(|_| CodecError::invalid_text("not UTF-8"))
}
