//! # Mint IO
//!
//! Binary serializer and deserializer for the mint fixed-layout wire format.
//!
//! Every field has a fixed width and the format carries no type tags, so a
//! record is read back with exactly the sequence of typed reads that wrote it.
//!
//! | Field  | Width | Encoding |
//! |--------|-------|----------|
//! | byte   | 1     | raw |
//! | uint16 | 2     | little-endian |
//! | uint32 | 4     | little-endian |
//! | uint64 | 8     | little-endian |
//! | text   | 64    | zero-padded UTF-8 |
//! | amount | 15    | sign(1) + fraction BCD reversed(9) + integer BCD reversed(5) |
//!
//! ## Example
//!
//! ```rust
//! use mint_io::{Deserializer, Serializer};
//! use mint_primitives::{BigDecimal, DecimalText};
//!
//! let amount = BigDecimal::parse_decimal("-987654321.102030405060708090").unwrap();
//!
//! let mut ser = Serializer::new();
//! ser.put_u32(7);
//! ser.put_amount(&amount).unwrap();
//! let bytes = ser.into_bytes();
//!
//! let mut des = Deserializer::new(&bytes);
//! assert_eq!(des.get_u32(), 7);
//! assert_eq!(des.get_amount::<BigDecimal>(), Some(amount));
//! assert!(des.finish().is_ok());
//! ```

pub mod amount;
pub mod deserializer;
pub mod error;
pub mod serializer;
pub mod settings;
pub mod text;
pub mod wire;

pub use amount::{
    decode_amount, encode_amount, pack_digits, unpack_digits, AMOUNT_FRAC_DIGITS,
    AMOUNT_INT_DIGITS, AMOUNT_LEN,
};
pub use deserializer::Deserializer;
pub use error::{CodecError, CodecResult};
pub use serializer::Serializer;
pub use settings::{CodecSettings, OverflowPolicy};
pub use text::{decode_string64, encode_string64, STRING64_LEN};
pub use wire::{SliceReader, WireDecode, WireEncode, WireRead, WireWrite};
