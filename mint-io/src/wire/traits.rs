use mint_primitives::DecimalText;

use crate::amount::{decode_amount, encode_amount, AMOUNT_LEN};
use crate::text::{decode_string64, encode_string64, STRING64_LEN};
use crate::{CodecError, CodecResult, CodecSettings};

/// Values that can be encoded into the mint wire format implement this trait.
pub trait WireEncode {
    fn wire_encode<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()>;

    #[inline]
    fn to_wire_bytes(&self) -> CodecResult<Vec<u8>> {
        let mut buf = Vec::new();
        self.wire_encode(&mut buf)?;
        Ok(buf)
    }
}

/// Values that can be decoded from the mint wire format implement this trait.
///
/// Fields must be read in exactly the order `WireEncode` wrote them; the
/// format carries no type tags.
pub trait WireDecode: Sized {
    fn wire_decode<R: WireRead>(reader: &mut R) -> CodecResult<Self>;

    #[inline]
    fn from_wire_bytes(bytes: &[u8]) -> CodecResult<Self> {
        let mut reader = super::SliceReader::new(bytes);
        Self::wire_decode(&mut reader)
    }
}

/// Writer abstraction for the mint binary format.
pub trait WireWrite {
    /// Append raw bytes to the destination buffer.
    fn write_bytes(&mut self, bytes: &[u8]);

    /// Number of bytes written so far.
    fn bytes_written(&self) -> usize;

    /// Overflow handling for text and amount fields.
    #[inline]
    fn settings(&self) -> CodecSettings {
        CodecSettings::default()
    }

    #[inline]
    fn write_u8(&mut self, value: u8) {
        self.write_bytes(&[value]);
    }

    #[inline]
    fn write_u16(&mut self, value: u16) {
        self.write_bytes(&value.to_le_bytes());
    }

    #[inline]
    fn write_u32(&mut self, value: u32) {
        self.write_bytes(&value.to_le_bytes());
    }

    #[inline]
    fn write_u64(&mut self, value: u64) {
        self.write_bytes(&value.to_le_bytes());
    }

    /// Writes a 64-byte zero-padded text slot.
    fn write_string64(&mut self, value: &str) -> CodecResult<()> {
        let slot = encode_string64(value, self.settings().text_overflow)?;
        self.write_bytes(&slot);
        Ok(())
    }

    /// Writes a 15-byte amount.
    fn write_amount<D: DecimalText>(&mut self, value: &D) -> CodecResult<()>
    where
        Self: Sized,
    {
        let bytes = encode_amount(value, self.settings().amount_overflow)?;
        self.write_bytes(&bytes);
        Ok(())
    }
}

impl WireWrite for Vec<u8> {
    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }

    #[inline]
    fn bytes_written(&self) -> usize {
        self.len()
    }
}

/// Reader abstraction for the mint binary format.
pub trait WireRead {
    /// Attempt to read exactly `buf.len()` bytes into the provided slice.
    fn read_into(&mut self, buf: &mut [u8]) -> CodecResult<()>;

    /// Remaining bytes that can be read from this reader.
    fn remaining(&self) -> usize;

    #[inline]
    fn read_array<const N: usize>(&mut self) -> CodecResult<[u8; N]> {
        let mut buf = [0u8; N];
        self.read_into(&mut buf)?;
        Ok(buf)
    }

    /// Reads exactly `count` bytes. The length is checked before anything
    /// is allocated.
    #[inline]
    fn read_bytes(&mut self, count: usize) -> CodecResult<Vec<u8>> {
        let remaining = self.remaining();
        if count > remaining {
            return Err(CodecError::short_read(count, remaining));
        }
        let mut buf = vec![0u8; count];
        self.read_into(buf.as_mut_slice())?;
        Ok(buf)
    }

    #[inline]
    fn read_u8(&mut self) -> CodecResult<u8> {
        let [value] = self.read_array::<1>()?;
        Ok(value)
    }

    #[inline]
    fn read_u16(&mut self) -> CodecResult<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    #[inline]
    fn read_u32(&mut self) -> CodecResult<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    #[inline]
    fn read_u64(&mut self) -> CodecResult<u64> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    /// Reads a 64-byte text slot; the value ends at the first zero byte.
    fn read_string64(&mut self) -> CodecResult<String> {
        let slot = self.read_array::<STRING64_LEN>()?;
        decode_string64(&slot)
    }

    /// Reads a 15-byte amount. Nothing is consumed if fewer than 15 bytes
    /// remain.
    fn read_amount<D: DecimalText>(&mut self) -> CodecResult<D>
    where
        Self: Sized,
    {
        let bytes = self.read_array::<AMOUNT_LEN>()?;
        decode_amount(&bytes)
    }
}
