//! Bounds-checked read cursor over a return payload.

use crate::{ClientError, Result};

/// Call-local position into one payload buffer.
///
/// Every read is checked against the remaining length before any byte is
/// touched; a short buffer is a [`ClientError::BufferUnderrun`], never a
/// zero-filled result. Trailing unconsumed bytes are the caller's business.
#[derive(Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Take the next `width` bytes, advancing the cursor.
    pub fn take(&mut self, width: usize) -> Result<&'a [u8]> {
        if width > self.remaining() {
            return Err(ClientError::BufferUnderrun {
                needed: width,
                remaining: self.remaining(),
            });
        }
        let bytes = &self.buf[self.pos..self.pos + width];
        self.pos += width;
        Ok(bytes)
    }

    /// Read a little-endian `i32`, the wire form of a vector length prefix.
    pub fn take_i32(&mut self) -> Result<i32> {
        let bytes = self.take(4)?;
        Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
