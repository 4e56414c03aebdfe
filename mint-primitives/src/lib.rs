//! # Mint Primitives
//!
//! Decimal values exchanged with the wire codec.
//!
//! This crate provides the arbitrary precision decimal collaborator used by
//! `mint-io` when encoding amounts:
//! - `BigDecimal`: arbitrary precision fixed-point number backed by `BigInt`
//! - `DecimalText`: the narrow interface the codec talks to (parse from
//!   decimal text, render to decimal text, compare)
//!
//! `DecimalText` is also implemented for `rust_decimal::Decimal`, whose 28
//! significant digits cover the 10 integer and 18 fractional digits of a
//! wire amount.
//!
//! ## Example
//!
//! ```rust
//! use mint_primitives::{BigDecimal, DecimalText};
//!
//! let amount = BigDecimal::parse_decimal("-987654321.102030405060708090").unwrap();
//! assert_eq!(amount.to_decimal_string(), "-987654321.10203040506070809");
//! ```

pub mod big_decimal;
pub mod decimal_text;
pub mod error;

pub use big_decimal::BigDecimal;
pub use decimal_text::{split_decimal_text, DecimalParts, DecimalText};
pub use error::{DecimalError, DecimalResult};
