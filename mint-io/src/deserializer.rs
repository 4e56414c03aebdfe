//! Record decoder with a sticky error.
//!
//! A whole record can be read without checking every field: the first
//! failure is latched, every later read returns a zero value without
//! touching the input, and the caller checks [`Deserializer::error`] (or
//! calls [`Deserializer::finish`]) once at the end.

use mint_primitives::DecimalText;

use crate::wire::{SliceReader, WireDecode, WireRead};
use crate::{CodecError, CodecResult};

/// Sequential decoder over an input buffer.
///
/// # Examples
///
/// ```rust
/// use mint_io::Deserializer;
///
/// let data = [0x8e, 0xad, 0xde];
/// let mut des = Deserializer::new(&data);
/// assert_eq!(des.get_byte(), 142);
/// assert_eq!(des.get_u16(), 0xDEAD);
/// assert_eq!(des.get_u32(), 0);
/// assert!(des.error().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Deserializer<'a> {
    reader: SliceReader<'a>,
    error: Option<CodecError>,
}

impl<'a> Deserializer<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            reader: SliceReader::new(data),
            error: None,
        }
    }

    /// The first error that occurred, if any.
    pub fn error(&self) -> Option<&CodecError> {
        self.error.as_ref()
    }

    /// Ends the session, returning the latched error.
    pub fn finish(self) -> CodecResult<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Pairs a value built from this session's reads with its outcome.
    pub fn into_result<T>(self, value: T) -> CodecResult<T> {
        self.finish().map(|_| value)
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.reader.position()
    }

    pub fn remaining(&self) -> usize {
        self.reader.remaining()
    }

    pub fn get_byte(&mut self) -> u8 {
        self.get()
    }

    /// Reads exactly `count` bytes, or an empty vector on failure.
    pub fn get_bytes(&mut self, count: usize) -> Vec<u8> {
        self.attempt(|reader| reader.read_bytes(count))
            .unwrap_or_default()
    }

    pub fn get_u16(&mut self) -> u16 {
        self.get()
    }

    pub fn get_u32(&mut self) -> u32 {
        self.get()
    }

    pub fn get_u64(&mut self) -> u64 {
        self.get()
    }

    pub fn get_string64(&mut self) -> String {
        self.attempt(|reader| reader.read_string64())
            .unwrap_or_default()
    }

    /// Reads an amount; `None` once an error has occurred.
    pub fn get_amount<D: DecimalText>(&mut self) -> Option<D> {
        self.attempt(|reader| reader.read_amount())
    }

    /// Reads any decodable value, or its default on failure.
    pub fn get<T: WireDecode + Default>(&mut self) -> T {
        self.attempt(|reader| T::wire_decode(reader))
            .unwrap_or_default()
    }

    fn attempt<T>(
        &mut self,
        read: impl FnOnce(&mut SliceReader<'a>) -> CodecResult<T>,
    ) -> Option<T> {
        if self.error.is_some() {
            return None;
        }
        match read(&mut self.reader) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::trace!(position = self.reader.position(), error = %err, "decode failed");
                self.error = Some(err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mint_primitives::BigDecimal;

    #[test]
    fn test_short_read_sets_error() {
        let data = [1u8];
        let mut des = Deserializer::new(&data);
        assert_eq!(des.get_u16(), 0);
        assert_eq!(
            des.error(),
            Some(&CodecError::ShortRead { needed: 2, remaining: 1 })
        );
    }

    #[test]
    fn test_error_is_sticky() {
        let data = [0xFFu8; 8];
        let mut des = Deserializer::new(&data);
        assert_eq!(des.get_u32(), 0xFFFF_FFFF);
        assert_eq!(des.get_u64(), 0);
        let first = des.error().cloned();
        let position = des.position();

        // Enough data remains for these, but the session is already failed.
        assert_eq!(des.get_byte(), 0);
        assert_eq!(des.get_u16(), 0);
        assert_eq!(des.get_bytes(2), Vec::<u8>::new());
        assert_eq!(des.get_string64(), "");
        assert!(des.get_amount::<BigDecimal>().is_none());

        assert_eq!(des.position(), position);
        assert_eq!(des.remaining(), 4);
        assert_eq!(des.error().cloned(), first);
    }

    #[test]
    fn test_invalid_sign_latches() {
        let mut data = [0u8; 15 + 1];
        data[0] = 7;
        data[15] = 0x42;
        let mut des = Deserializer::new(&data);
        assert!(des.get_amount::<BigDecimal>().is_none());
        assert_eq!(des.get_byte(), 0);
        assert_eq!(des.finish(), Err(CodecError::InvalidSignByte(7)));
    }

    #[test]
    fn test_get_bytes_exact() {
        let data = [1u8, 2, 3];
        let mut des = Deserializer::new(&data);
        assert_eq!(des.get_bytes(2), vec![1, 2]);
        assert_eq!(des.get_bytes(2), Vec::<u8>::new());
        assert!(des.error().is_some());
    }

    #[test]
    fn test_get_bytes_oversized_count() {
        let data = [1u8, 2, 3];
        let mut des = Deserializer::new(&data);
        assert_eq!(des.get_bytes(usize::MAX), Vec::<u8>::new());
        assert_eq!(
            des.error(),
            Some(&CodecError::ShortRead { needed: usize::MAX, remaining: 3 })
        );
        assert_eq!(des.position(), 0);
        assert_eq!(des.get_byte(), 0);
    }

    #[test]
    fn test_into_result() {
        let data = [5u8, 0];
        let mut des = Deserializer::new(&data);
        let value = des.get_u16();
        assert_eq!(des.into_result(value), Ok(5));

        let mut des = Deserializer::new(&data);
        let value = des.get_u32();
        assert!(des.into_result(value).is_err());
    }

    #[test]
    fn test_get_generic() {
        let data = [0xAB; 4];
        let mut des = Deserializer::new(&data);
        let key: [u8; 4] = des.get();
        assert_eq!(key, [0xAB; 4]);
        assert!(des.finish().is_ok());
    }
}
