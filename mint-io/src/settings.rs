//! Encoder settings.
//!
//! Field widths are part of the format and are not configurable. The only
//! knobs decide what happens when a value does not fit its field.

use serde::{Deserialize, Serialize};

use crate::{CodecError, CodecResult};

/// What the encoder does with a value wider than its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Fail the put with an error.
    #[default]
    Reject,
    /// Silently drop what does not fit.
    Truncate,
}

/// Encoder settings.
///
/// ```toml
/// amount_overflow = "reject"
/// text_overflow = "truncate"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecSettings {
    /// Amounts with more than 10 integer or 18 fractional digits.
    pub amount_overflow: OverflowPolicy,

    /// Text longer than its 64-byte slot.
    pub text_overflow: OverflowPolicy,
}

impl CodecSettings {
    /// Reject anything that does not fit. Same as `Default`.
    pub const fn strict() -> Self {
        Self {
            amount_overflow: OverflowPolicy::Reject,
            text_overflow: OverflowPolicy::Reject,
        }
    }

    /// Truncate anything that does not fit, matching older encoders.
    pub const fn legacy() -> Self {
        Self {
            amount_overflow: OverflowPolicy::Truncate,
            text_overflow: OverflowPolicy::Truncate,
        }
    }

    /// Parses settings from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> CodecResult<Self> {
        toml::from_str(text).map_err(|e| CodecError::Settings(e.to_string()))
    }

    /// Renders settings as TOML.
    pub fn to_toml_string(&self) -> CodecResult<String> {
        toml::to_string(self).map_err(|e| CodecError::Settings(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        assert_eq!(CodecSettings::default(), CodecSettings::strict());
    }

    #[test]
    fn test_from_toml() {
        let settings = CodecSettings::from_toml_str("amount_overflow = \"truncate\"").unwrap();
        assert_eq!(settings.amount_overflow, OverflowPolicy::Truncate);
        assert_eq!(settings.text_overflow, OverflowPolicy::Reject);

        assert_eq!(
            CodecSettings::from_toml_str("").unwrap(),
            CodecSettings::default()
        );
    }

    #[test]
    fn test_from_toml_rejects_unknown_policy() {
        let result = CodecSettings::from_toml_str("text_overflow = \"wrap\"");
        assert!(matches!(result, Err(CodecError::Settings(_))));
    }

    #[test]
    fn test_toml_roundtrip() {
        let settings = CodecSettings::legacy();
        let text = settings.to_toml_string().unwrap();
        assert_eq!(CodecSettings::from_toml_str(&text).unwrap(), settings);
    }
}
