//! # mint-wire: fixed-layout ledger record codec
//!
//! Encodes and decodes ledger records made of fixed-width fields: raw
//! integers, 64-byte text slots and 15-byte BCD amounts.
//!
//! ## Quick Start
//!
//! ```rust
//! use mint_wire::prelude::*;
//!
//! let amount = BigDecimal::parse_decimal("1234567890.123456789123456789").unwrap();
//!
//! let mut ser = Serializer::new();
//! ser.put_u64(0xDEADBEEF1337C0DE);
//! ser.put_amount(&amount).unwrap();
//! let hex = ser.to_hex();
//!
//! let data = mint_wire::from_hex(&hex).unwrap();
//! let mut des = Deserializer::new(&data);
//! assert_eq!(des.get_u64(), 0xDEADBEEF1337C0DE);
//! assert_eq!(des.get_amount::<BigDecimal>(), Some(amount));
//! assert!(des.finish().is_ok());
//! ```
//!
//! ## Architecture
//!
//! - [`io`] - serializer, deserializer and the amount codec
//! - [`primitives`] - decimal values reached through decimal text
//! - [`crypto`] - Ed25519 signer for encoded records

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use thiserror::Error;

pub use mint_crypto as crypto;
pub use mint_io as io;
pub use mint_primitives as primitives;

/// Common imports for record encoding.
pub mod prelude {
    pub use crate::crypto::{verify, Signer};
    pub use crate::io::{
        CodecError, CodecSettings, Deserializer, OverflowPolicy, Serializer, WireDecode,
        WireEncode, WireRead, WireWrite,
    };
    pub use crate::primitives::{BigDecimal, DecimalText};
}

/// Any error raised by the mint-wire crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Encoding or decoding failed.
    #[error(transparent)]
    Codec(#[from] io::CodecError),

    /// A decimal value could not be built.
    #[error(transparent)]
    Decimal(#[from] primitives::DecimalError),

    /// Key handling failed.
    #[error(transparent)]
    Crypto(#[from] crypto::CryptoError),

    /// Hexadecimal input could not be decoded.
    #[error("invalid hex: {0}")]
    Hex(String),
}

/// Result type for mint-wire operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Decodes the lowercase or uppercase hexadecimal rendering of a buffer.
pub fn from_hex(text: &str) -> Result<Vec<u8>> {
    hex::decode(text).map_err(|e| Error::Hex(e.to_string()))
}

/// Encodes a record and signs the resulting bytes.
///
/// Returns the encoded bytes and the signature over them.
pub fn encode_and_sign<T: io::WireEncode + ?Sized>(
    record: &T,
    signer: &crypto::Signer,
) -> Result<(Vec<u8>, [u8; crypto::SIGNATURE_LEN])> {
    let mut ser = io::Serializer::new();
    ser.put(record)?;
    let bytes = ser.into_bytes();
    let signature = signer.sign(&bytes);
    Ok((bytes, signature))
}

/// Library version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
