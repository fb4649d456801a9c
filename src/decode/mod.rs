//! Typed decoding of raw return payloads.
//!
//! Sub-modules:
//! - [`cursor`] — Bounds-checked little-endian read cursor.
//! - [`value`]  — Decoded value types and display formatting.
//! - [`codec`]  — The decode entry point mapping payload bytes to a
//!   [`value::ReturnValue`] under a declared [`crate::ReturnType`].

pub mod codec;
pub mod cursor;
pub mod value;

pub use codec::decode;
pub use value::{ReturnValue, Scalar};
