//! Record encoder.

use std::io::Write;

use mint_primitives::DecimalText;

use crate::wire::{WireEncode, WireWrite};
use crate::{CodecError, CodecResult, CodecSettings};

/// Append-only encoder for mint wire records.
///
/// # Examples
///
/// ```rust
/// use mint_io::Serializer;
///
/// let mut ser = Serializer::new();
/// ser.put_byte(142);
/// ser.put_u16(0xDEAD);
/// ser.put_string64("memo").unwrap();
///
/// assert_eq!(ser.len(), 1 + 2 + 64);
/// assert!(ser.to_hex().starts_with("8eadde6d656d6f00"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Serializer {
    buffer: Vec<u8>,
    settings: CodecSettings,
}

impl Serializer {
    /// Creates an encoder with strict settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: CodecSettings) -> Self {
        Self {
            buffer: Vec::new(),
            settings,
        }
    }

    pub fn put_byte(&mut self, value: u8) {
        self.write_u8(value);
    }

    pub fn put_u16(&mut self, value: u16) {
        self.write_u16(value);
    }

    pub fn put_u32(&mut self, value: u32) {
        self.write_u32(value);
    }

    pub fn put_u64(&mut self, value: u64) {
        self.write_u64(value);
    }

    /// Appends raw bytes without a length prefix.
    pub fn put_bytes(&mut self, value: &[u8]) {
        self.write_bytes(value);
    }

    /// Appends a 64-byte zero-padded text slot.
    pub fn put_string64(&mut self, value: &str) -> CodecResult<()> {
        self.write_string64(value)
    }

    /// Appends a 15-byte amount.
    pub fn put_amount<D: DecimalText>(&mut self, value: &D) -> CodecResult<()> {
        self.write_amount(value)
    }

    /// Appends any encodable value.
    pub fn put<T: WireEncode + ?Sized>(&mut self, value: &T) -> CodecResult<()> {
        value.wire_encode(self)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Lowercase hexadecimal rendering of the buffer.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.buffer)
    }

    /// Streams the lowercase hexadecimal rendering into `out`.
    pub fn write_hex<W: Write>(&self, mut out: W) -> CodecResult<()> {
        out.write_all(self.to_hex().as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| CodecError::RenderFailure(e.to_string()))
    }
}

impl WireWrite for Serializer {
    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    #[inline]
    fn bytes_written(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    fn settings(&self) -> CodecSettings {
        self.settings
    }
}
