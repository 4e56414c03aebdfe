use super::WireRead;
use crate::{CodecError, CodecResult};

/// Reader over an in-memory byte slice.
///
/// A failed read never moves the cursor.
#[derive(Debug, Clone)]
pub struct SliceReader<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> SliceReader<'a> {
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    /// Number of bytes consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offset == self.buf.len()
    }

    /// Borrows the next `count` bytes and consumes them.
    pub fn read_slice(&mut self, count: usize) -> CodecResult<&'a [u8]> {
        self.ensure(count)?;
        let slice = &self.buf[self.offset..self.offset + count];
        self.offset += count;
        Ok(slice)
    }

    #[inline(always)]
    fn ensure(&self, needed: usize) -> CodecResult<()> {
        let remaining = WireRead::remaining(self);
        if remaining < needed {
            return Err(CodecError::short_read(needed, remaining));
        }
        Ok(())
    }
}

impl WireRead for SliceReader<'_> {
    fn read_into(&mut self, buf: &mut [u8]) -> CodecResult<()> {
        let slice = self.read_slice(buf.len())?;
        buf.copy_from_slice(slice);
        Ok(())
    }

    #[inline]
    fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }
}
