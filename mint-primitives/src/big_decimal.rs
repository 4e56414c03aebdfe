use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{Signed, Zero};

use crate::decimal_text::split_decimal_text;
use crate::{DecimalError, DecimalResult};

/// Represents a fixed-point number of arbitrary precision.
#[derive(Clone, Debug)]
pub struct BigDecimal {
    value: BigInt,
    decimals: u8,
}

impl BigDecimal {
    /// Creates a new `BigDecimal` instance.
    ///
    /// # Arguments
    ///
    /// * `value` - The `BigInt` value of the number.
    /// * `decimals` - The number of decimal places for this number.
    pub fn new(value: BigInt, decimals: u8) -> Self {
        Self { value, decimals }
    }

    /// The `BigInt` value of the number.
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// The number of decimal places for this number.
    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    /// The sign of the number: -1, 0 or 1.
    pub fn sign(&self) -> i32 {
        match self.value.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    /// Changes the decimals of the `BigDecimal`.
    ///
    /// Increasing the number of decimals is always exact. Decreasing it
    /// fails when non-zero digits would be dropped.
    pub fn change_decimals(&self, decimals: u8) -> DecimalResult<Self> {
        if self.decimals == decimals {
            return Ok(self.clone());
        }
        let value = if self.decimals < decimals {
            &self.value * pow10(decimals - self.decimals)
        } else {
            let (quotient, remainder) = self.value.div_rem(&pow10(self.decimals - decimals));
            if !remainder.is_zero() {
                return Err(DecimalError::PrecisionLoss {
                    from: self.decimals,
                    to: decimals,
                });
            }
            quotient
        };
        Ok(Self::new(value, decimals))
    }

    /// Parses a `BigDecimal` from the specified string, rescaled to `decimals`.
    pub fn parse(s: &str, decimals: u8) -> DecimalResult<Self> {
        s.parse::<Self>()?.change_decimals(decimals)
    }

    /// Same value with trailing fractional zeros removed.
    fn normalized(&self) -> Self {
        let ten = BigInt::from(10u32);
        let mut value = self.value.clone();
        let mut decimals = self.decimals;
        while decimals > 0 {
            let (quotient, remainder) = value.div_rem(&ten);
            if !remainder.is_zero() {
                break;
            }
            value = quotient;
            decimals -= 1;
        }
        Self::new(value, decimals)
    }
}

fn pow10(exponent: u8) -> BigInt {
    BigInt::from(10u32).pow(exponent as u32)
}

impl FromStr for BigDecimal {
    type Err = DecimalError;

    /// Parses decimal text, keeping as many decimals as the text carries.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = split_decimal_text(s)?;
        let decimals = u8::try_from(parts.fraction.len()).map_err(|_| DecimalError::Overflow {
            text: s.to_string(),
        })?;

        let digits = format!("{}{}", parts.integer, parts.fraction);
        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(|| {
            DecimalError::InvalidDigit {
                text: s.to_string(),
            }
        })?;
        let value = if parts.negative { -magnitude } else { magnitude };
        Ok(Self::new(value, decimals))
    }
}

impl fmt::Display for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (result, remainder) = self.value.abs().div_rem(&pow10(self.decimals));
        if self.value.is_negative() {
            f.write_str("-")?;
        }
        write!(f, "{}", result)?;
        if !remainder.is_zero() {
            let fraction = format!(
                "{:0>width$}",
                remainder.to_string(),
                width = self.decimals as usize
            );
            write!(f, ".{}", fraction.trim_end_matches('0'))?;
        }
        Ok(())
    }
}

impl PartialEq for BigDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigDecimal {}

impl PartialOrd for BigDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.decimals.cmp(&other.decimals) {
            Ordering::Less => {
                (&self.value * pow10(other.decimals - self.decimals)).cmp(&other.value)
            }
            Ordering::Greater => self
                .value
                .cmp(&(&other.value * pow10(self.decimals - other.decimals))),
            Ordering::Equal => self.value.cmp(&other.value),
        }
    }
}

impl Hash for BigDecimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalized();
        normalized.value.hash(state);
        normalized.decimals.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(value: &BigDecimal) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_big_decimal_creation() {
        let bd = BigDecimal::new(BigInt::from(1234), 2);
        assert_eq!(bd.value(), &BigInt::from(1234));
        assert_eq!(bd.decimals(), 2);
        assert_eq!(bd.sign(), 1);
        assert_eq!(BigDecimal::new(BigInt::from(-1), 0).sign(), -1);
        assert_eq!(BigDecimal::new(BigInt::zero(), 5).sign(), 0);
    }

    #[test]
    fn test_big_decimal_display() {
        let bd = BigDecimal::new(BigInt::from(123456), 2);
        assert_eq!(bd.to_string(), "1234.56");

        let bd = BigDecimal::new(BigInt::from(123405), 2);
        assert_eq!(bd.to_string(), "1234.05");

        let bd = BigDecimal::new(BigInt::from(-5), 3);
        assert_eq!(bd.to_string(), "-0.005");

        let bd = BigDecimal::new(BigInt::from(1200), 2);
        assert_eq!(bd.to_string(), "12");
    }

    #[test]
    fn test_big_decimal_comparison() {
        let bd1 = BigDecimal::new(BigInt::from(123456), 2);
        let bd2 = BigDecimal::new(BigInt::from(1234560), 3);
        let bd3 = BigDecimal::new(BigInt::from(123457), 2);
        assert_eq!(bd1, bd2);
        assert!(bd1 < bd3);
        assert!(BigDecimal::new(BigInt::from(-1), 0) < BigDecimal::new(BigInt::from(1), 18));
    }

    #[test]
    fn test_big_decimal_hash_matches_eq() {
        let bd1 = BigDecimal::new(BigInt::from(150), 2);
        let bd2 = BigDecimal::new(BigInt::from(15), 1);
        assert_eq!(bd1, bd2);
        assert_eq!(hash_of(&bd1), hash_of(&bd2));
    }

    #[test]
    fn test_big_decimal_parse() {
        let bd = BigDecimal::parse("1234.56", 2).unwrap();
        assert_eq!(bd.value(), &BigInt::from(123456));
        assert_eq!(bd.decimals(), 2);

        let bd = BigDecimal::parse("1234.5", 4).unwrap();
        assert_eq!(bd.value(), &BigInt::from(12345000));

        assert!(matches!(
            BigDecimal::parse("1234.567", 2),
            Err(DecimalError::PrecisionLoss { .. })
        ));
        assert!(matches!(
            BigDecimal::parse("12a4", 2),
            Err(DecimalError::InvalidDigit { .. })
        ));
    }

    #[test]
    fn test_big_decimal_from_str_keeps_scale() {
        let bd: BigDecimal = "-0000000001.000000000000000000".parse().unwrap();
        assert_eq!(bd.decimals(), 18);
        assert_eq!(bd.to_string(), "-1");
    }

    #[test]
    fn test_big_decimal_change_decimals() {
        let bd = BigDecimal::new(BigInt::from(123456), 2);
        let changed = bd.change_decimals(3).unwrap();
        assert_eq!(changed.value(), &BigInt::from(1234560));
        assert_eq!(changed.decimals(), 3);

        assert_eq!(
            bd.change_decimals(1),
            Err(DecimalError::PrecisionLoss { from: 2, to: 1 })
        );
    }
}
