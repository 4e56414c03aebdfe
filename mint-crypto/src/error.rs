use thiserror::Error;

/// Errors raised by key handling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Private key bytes are neither a seed nor an expanded secret key.
    #[error("invalid key length: got {actual}, expected 32 or 64")]
    InvalidKeyLength {
        /// Length of the rejected input.
        actual: usize,
    },

    /// Key bytes have the right length but are not a valid key.
    #[error("invalid key: {message}")]
    InvalidKey {
        /// Underlying error message.
        message: String,
    },

    /// Base58 text could not be decoded.
    #[error("invalid base58: {message}")]
    InvalidBase58 {
        /// Underlying error message.
        message: String,
    },

    /// Base58 text decoded, but its trailing checksum does not match.
    #[error("base58 checksum mismatch")]
    ChecksumMismatch,
}

/// Result type for key handling.
pub type CryptoResult<T> = Result<T, CryptoError>;
