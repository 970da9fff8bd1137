//! Bounds-checked reader over an index buffer
//!
//! Every field the decoder extracts goes through [`ByteCursor`], so no other
//! component indexes into the buffer directly. Reads come in two shapes:
//!
//! - `read_*` take an explicit offset and leave the cursor where it is
//! - `next_*` read at the current position and advance past what they consumed
//!
//! All integers are big-endian (network order), as they are on disk.

use crate::artifacts::index::Result;
use crate::artifacts::index::error::DecodeError;
use byteorder::{ByteOrder, NetworkEndian};

/// Forward-only cursor over an immutable byte slice
#[derive(Debug, Clone)]
pub struct ByteCursor<'b> {
    bytes: &'b [u8],
    position: usize,
}

impl<'b> ByteCursor<'b> {
    pub fn new(bytes: &'b [u8]) -> Self {
        ByteCursor { bytes, position: 0 }
    }

    /// Offset of the next byte `next_*` reads would consume
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> &'b [u8] {
        &self.bytes[self.position..]
    }

    /// Move the position forward by `count` bytes
    pub fn advance(&mut self, count: usize) -> Result<()> {
        self.slice(self.position, count)?;
        self.position += count;
        Ok(())
    }

    fn slice(&self, offset: usize, width: usize) -> Result<&'b [u8]> {
        let end = offset
            .checked_add(width)
            .filter(|end| *end <= self.bytes.len())
            .ok_or(DecodeError::OutOfBounds {
                offset,
                width,
                available: self.bytes.len(),
            })?;

        Ok(&self.bytes[offset..end])
    }

    pub fn read_u32_be(&self, offset: usize) -> Result<u32> {
        Ok(NetworkEndian::read_u32(self.slice(offset, 4)?))
    }

    pub fn read_u16_be(&self, offset: usize) -> Result<u16> {
        Ok(NetworkEndian::read_u16(self.slice(offset, 2)?))
    }

    /// Copy out exactly `count` bytes starting at `offset`
    pub fn read_fixed(&self, offset: usize, count: usize) -> Result<Vec<u8>> {
        Ok(self.slice(offset, count)?.to_vec())
    }

    /// Copy out a fixed-size array starting at `offset`
    pub fn read_array<const N: usize>(&self, offset: usize) -> Result<[u8; N]> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.slice(offset, N)?);
        Ok(array)
    }

    /// Scan for a nul-terminated byte string starting at `offset`
    ///
    /// # Returns
    ///
    /// The bytes before the terminator and the number of bytes consumed,
    /// terminator included.
    pub fn read_cstr(&self, offset: usize) -> Result<(&'b [u8], usize)> {
        if offset > self.bytes.len() {
            return Err(DecodeError::OutOfBounds {
                offset,
                width: 1,
                available: self.bytes.len(),
            });
        }

        let tail = &self.bytes[offset..];
        let nul = tail
            .iter()
            .position(|&b| b == 0)
            .ok_or(DecodeError::UnterminatedString { offset })?;

        Ok((&tail[..nul], nul + 1))
    }

    /// Like [`ByteCursor::read_cstr`], decoding the bytes as text
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected; index names are
    /// raw bytes on disk and the decoder does not judge their encoding.
    pub fn read_cstring(&self, offset: usize) -> Result<(String, usize)> {
        let (bytes, consumed) = self.read_cstr(offset)?;
        Ok((String::from_utf8_lossy(bytes).into_owned(), consumed))
    }

    pub fn next_u32(&mut self) -> Result<u32> {
        let value = self.read_u32_be(self.position)?;
        self.position += 4;
        Ok(value)
    }

    pub fn next_u16(&mut self) -> Result<u16> {
        let value = self.read_u16_be(self.position)?;
        self.position += 2;
        Ok(value)
    }

    pub fn next_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let value = self.read_array::<N>(self.position)?;
        self.position += N;
        Ok(value)
    }

    pub fn next_cstr(&mut self) -> Result<&'b [u8]> {
        let (value, consumed) = self.read_cstr(self.position)?;
        self.position += consumed;
        Ok(value)
    }

    pub fn next_cstring(&mut self) -> Result<String> {
        let (value, consumed) = self.read_cstring(self.position)?;
        self.position += consumed;
        Ok(value)
    }
}
