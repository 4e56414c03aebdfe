//! Ed25519 signing capability for mint ledger records.
//!
//! The wire codec never depends on this crate; records are signed over the
//! bytes a `Serializer` produced.
//!
//! # Key Types
//!
//! - [`Signer`]: holds a private key, exposes fixed-width key bytes and signs
//! - [`verify`]: checks a signature against a public key
//! - [`pack58`] / [`unpack58`]: base58 text with a CRC-32 checksum
//!
//! # Key Formats
//!
//! - Private key: 64 bytes, `clamped scalar || nonce prefix` (a 32-byte seed
//!   is also accepted and expanded)
//! - Public key: 32 bytes
//! - Signature: 64 bytes

pub mod base58;
pub mod error;
pub mod signer;

pub use base58::{pack58, unpack58};
pub use error::{CryptoError, CryptoResult};
pub use signer::{verify, Signer, PRIVATE_KEY_LEN, PUBLIC_KEY_LEN, SEED_LEN, SIGNATURE_LEN};
