//! Checksummed base58 text for key material.
//!
//! The payload is followed by its CRC-32 (IEEE) in little-endian order
//! before base58 encoding.

use crate::{CryptoError, CryptoResult};

/// Length of the trailing checksum.
pub const CHECKSUM_LEN: usize = 4;

/// Encodes bytes as base58 with a trailing checksum.
pub fn pack58(data: &[u8]) -> String {
    let mut bytes = Vec::with_capacity(data.len() + CHECKSUM_LEN);
    bytes.extend_from_slice(data);
    bytes.extend_from_slice(&crc32fast::hash(data).to_le_bytes());
    bs58::encode(bytes).into_string()
}

/// Decodes checksummed base58 text, returning the payload.
pub fn unpack58(text: &str) -> CryptoResult<Vec<u8>> {
    let mut bytes = bs58::decode(text)
        .into_vec()
        .map_err(|e| CryptoError::InvalidBase58 {
            message: e.to_string(),
        })?;
    if bytes.len() < CHECKSUM_LEN {
        return Err(CryptoError::InvalidBase58 {
            message: format!("{} bytes is shorter than the checksum", bytes.len()),
        });
    }

    let payload_len = bytes.len() - CHECKSUM_LEN;
    let mut checksum = [0u8; CHECKSUM_LEN];
    checksum.copy_from_slice(&bytes[payload_len..]);
    if crc32fast::hash(&bytes[..payload_len]) != u32::from_le_bytes(checksum) {
        return Err(CryptoError::ChecksumMismatch);
    }
    bytes.truncate(payload_len);
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack() {
        for data in [&b""[..], &[0u8, 0, 1], b"ledger"] {
            assert_eq!(unpack58(&pack58(data)).unwrap(), data);
        }
    }

    #[test]
    fn test_unpack_public_key_vector() {
        let public = unpack58("2p6QCcwAMLSSXfFFVQT4vYCe8VPwm3rvK4zdNGAM7zeLBqrVLW").unwrap();
        assert_eq!(
            hex::encode(public),
            "eea0728dfee30d6a65ff2e5c07ddbc4c304cc9005abe2640822adc1ec944201d"
        );
    }

    #[test]
    fn test_unpack_rejects_bad_checksum() {
        let mut bytes = bs58::decode(pack58(b"ledger")).into_vec().unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0x01;
        assert_eq!(
            unpack58(&bs58::encode(bytes).into_string()),
            Err(CryptoError::ChecksumMismatch)
        );
    }

    #[test]
    fn test_unpack_rejects_short_input() {
        assert!(matches!(unpack58("2g"), Err(CryptoError::InvalidBase58 { .. })));
        assert!(matches!(unpack58("0OIl"), Err(CryptoError::InvalidBase58 { .. })));
    }
}
