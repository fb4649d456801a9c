//! The payload codec: raw return bytes → typed value.
//!
//! All integers are little-endian on the wire. Vectors carry a 4-byte signed
//! length prefix followed by that many fixed-width elements; structs are
//! their fields laid out back to back in declared order, with no padding.

use crate::decode::cursor::Cursor;
use crate::decode::value::{ReturnValue, Scalar};
use crate::schema::types::{Primitive, ReturnType};
use crate::{ClientError, Result};

/// Decode one return value of shape `return_type` from the front of
/// `payload`.
///
/// Trailing unconsumed bytes are permitted; a payload too short for the
/// declared shape is always an error, never a truncated or zero-padded
/// value.
pub fn decode(payload: &[u8], return_type: &ReturnType) -> Result<ReturnValue> {
    let mut cursor = Cursor::new(payload);
    match return_type {
        ReturnType::Primitive(prim) => read_scalar(&mut cursor, prim).map(ReturnValue::Scalar),
        ReturnType::Struct(fields) => {
            let mut decoded = Vec::with_capacity(fields.len());
            for (name, prim) in fields {
                decoded.push((name.clone(), read_scalar(&mut cursor, prim)?));
            }
            Ok(ReturnValue::Struct(decoded))
        }
        ReturnType::Vector(element) => {
            let len = cursor.take_i32()?;
            if len < 0 {
                return Err(ClientError::InvalidLength(len as i64));
            }
            let len = len as usize;
            // Checked before any element read, and before any allocation.
            let total = len
                .checked_mul(element.width())
                .ok_or(ClientError::InvalidLength(len as i64))?;
            if total > cursor.remaining() {
                return Err(ClientError::BufferOverflow {
                    requested: total,
                    remaining: cursor.remaining(),
                });
            }
            let mut decoded = Vec::with_capacity(len);
            for _ in 0..len {
                decoded.push(read_scalar(&mut cursor, element)?);
            }
            Ok(ReturnValue::Vector(decoded))
        }
    }
}

/// Read one fixed-width little-endian integer, widening to 64 bits and
/// sign-extending when the schema marks it signed.
fn read_scalar(cursor: &mut Cursor<'_>, prim: &Primitive) -> Result<Scalar> {
    let width = prim.width();
    let bytes = cursor.take(width)?;
    let mut raw = [0u8; 8];
    raw[..width].copy_from_slice(bytes);
    let unsigned = u64::from_le_bytes(raw);
    if prim.signed {
        let shift = 64 - 8 * width as u32;
        Ok(Scalar::Signed(((unsigned << shift) as i64) >> shift))
    } else {
        Ok(Scalar::Unsigned(unsigned))
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
