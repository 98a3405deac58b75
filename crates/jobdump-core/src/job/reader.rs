//! Bounds-checked cursor over a `.job` buffer.
//!
//! The decoder never indexes the input directly. Each stage asks the reader
//! for an exact number of bytes and gets either the whole run or an error;
//! the returned slice is then parsed with [`bytes::Buf`] getters, which
//! cannot run short because the length was checked up front.

use crate::error::{Error, Result};
use bytes::Buf;

/// Forward-only cursor over an immutable byte buffer
#[derive(Debug, Clone)]
pub struct JobReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> JobReader<'a> {
    /// Creates a reader positioned at the start of `data`
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Current byte offset into the buffer
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of unread bytes
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Returns the next `len` bytes without advancing, if present
    pub fn peek(&self, len: usize) -> Option<&'a [u8]> {
        let end = self.position.checked_add(len)?;
        self.data.get(self.position..end)
    }

    /// Takes the next `len` bytes, or calls `err` with the current offset.
    ///
    /// The cursor only moves on success.
    pub fn take_or<F>(&mut self, len: usize, err: F) -> Result<&'a [u8]>
    where
        F: FnOnce(usize) -> Error,
    {
        match self.peek(len) {
            Some(bytes) => {
                self.position += len;
                Ok(bytes)
            }
            None => Err(err(self.position)),
        }
    }

    /// Reads a little-endian `u16`, or calls `err` with the current offset
    pub fn u16_le_or<F>(&mut self, err: F) -> Result<u16>
    where
        F: FnOnce(usize) -> Error,
    {
        let mut bytes = self.take_or(2, err)?;
        Ok(bytes.get_u16_le())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_advances() {
        let data = [1, 2, 3, 4, 5];
        let mut reader = JobReader::new(&data);
        let bytes = reader
            .take_or(3, Error::truncated_trailer)
            .unwrap();
        assert_eq!(bytes, &[1, 2, 3]);
        assert_eq!(reader.position(), 3);
        assert_eq!(reader.remaining(), 2);
    }

    #[test]
    fn test_take_past_end_does_not_move() {
        let data = [1, 2, 3];
        let mut reader = JobReader::new(&data);
        reader.take_or(2, Error::truncated_trailer).unwrap();

        let err = reader.take_or(2, Error::truncated_trailer).unwrap_err();
        assert_eq!(err, Error::truncated_trailer(2));
        assert_eq!(reader.position(), 2);
    }

    #[test]
    fn test_peek() {
        let data = [0xAA, 0xBB];
        let reader = JobReader::new(&data);
        assert_eq!(reader.peek(2), Some(&data[..]));
        assert_eq!(reader.peek(3), None);
        assert_eq!(reader.peek(usize::MAX), None);
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_u16_le() {
        let data = [0x34, 0x12];
        let mut reader = JobReader::new(&data);
        assert_eq!(reader.u16_le_or(Error::truncated_trailer).unwrap(), 0x1234);
        assert!(reader.u16_le_or(Error::truncated_trailer).is_err());
    }
}
