//! Return-type schemas and program interface loading.
//!
//! Sub-modules:
//! - [`types`]     — Primitive / struct / vector return shapes and the
//!   per-instruction mutability classification.
//! - [`interface`] — [`interface::ProgramInterface`]: the immutable typed
//!   table of instruction schemas, keyed by instruction name.
//! - [`idl`]       — Loading an interface from an Anchor-style IDL JSON
//!   document.
//!
//! Schemas are resolved once at load time into plain typed values; decoding
//! never inspects the loosely-typed interface document again.

pub mod idl;
pub mod interface;
pub mod types;

pub use interface::ProgramInterface;
pub use types::{AccountSchema, InstructionSchema, Mutability, Primitive, ReturnType};
