use super::{WireDecode, WireEncode, WireRead, WireWrite};
use crate::CodecResult;

macro_rules! impl_int {
    ($ty:ty, $write:ident, $read:ident) => {
        impl WireEncode for $ty {
            #[inline]
            fn wire_encode<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()> {
                writer.$write(*self);
                Ok(())
            }
        }

        impl WireDecode for $ty {
            #[inline]
            fn wire_decode<R: WireRead>(reader: &mut R) -> CodecResult<Self> {
                reader.$read()
            }
        }
    };
}

impl_int!(u8, write_u8, read_u8);
impl_int!(u16, write_u16, read_u16);
impl_int!(u32, write_u32, read_u32);
impl_int!(u64, write_u64, read_u64);

impl<const N: usize> WireEncode for [u8; N] {
    #[inline]
    fn wire_encode<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()> {
        writer.write_bytes(self);
        Ok(())
    }
}

impl<const N: usize> WireDecode for [u8; N] {
    #[inline]
    fn wire_decode<R: WireRead>(reader: &mut R) -> CodecResult<Self> {
        reader.read_array()
    }
}
