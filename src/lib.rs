//! Client-side recovery of typed program return values.
//!
//! A program instruction — invoked directly or through a cross-program call —
//! can hand a structured value back to its caller. This crate recovers that
//! value on the client side through two retrieval paths:
//!
//! - **Log path**: scan a confirmed execution's log lines for the single
//!   return entry, base64-decode its payload, and decode it against the
//!   instruction's declared return type.
//! - **View path**: for instructions that mutate no state, run a read-only
//!   simulation and decode the raw bytes it hands back directly, skipping
//!   log retrieval entirely.
//!
//! Sub-modules:
//! - [`logs`]   — Return-entry scanning over execution log lines.
//! - [`decode`] — Typed decoding of raw return payloads.
//! - [`schema`] — Return-type schemas and interface loading.
//! - [`client`] — Caller-facing extraction and view invocation.
//!
//! The crate never talks to a node itself: log retrieval and simulation are
//! behind the [`ExecutionFetcher`] and [`SimulationBackend`] traits, so any
//! RPC stack (or an in-memory test double) can sit underneath.

pub mod client;
pub mod decode;
pub mod logs;
pub mod schema;

pub use client::extract::extract_and_decode;
pub use client::fetcher::{CommitmentLevel, ExecutionFetcher, ExecutionRef};
pub use client::view::{AccountRef, SimulationBackend, ViewClient};
pub use decode::codec::decode;
pub use decode::value::{ReturnValue, Scalar};
pub use logs::scanner::{find_return_entry, ReturnLogEntry};
pub use schema::idl::parse_interface;
pub use schema::interface::ProgramInterface;
pub use schema::types::{AccountSchema, InstructionSchema, Mutability, Primitive, ReturnType};

use thiserror::Error;

/// Every failure the crate can surface. Each kind is terminal for the call
/// that produced it: there is no internal retry, no fallback between log
/// formats once one has matched, and no placeholder value substitution.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No log line matched either recognized return-log format.
    #[error("no return log entry found in execution logs")]
    NoReturnLogFound,

    /// A line matched a return-log format but its remainder could not be
    /// split into the expected fields, or its payload was not valid base64.
    #[error("malformed return log entry: {0}")]
    MalformedReturnLog(String),

    /// Fewer bytes remained than a primitive or struct field requires.
    #[error("buffer underrun: needed {needed} bytes, {remaining} remaining")]
    BufferUnderrun { needed: usize, remaining: usize },

    /// A vector's declared length would read past the end of the payload.
    #[error("vector of {requested} bytes would read past buffer end ({remaining} remaining)")]
    BufferOverflow { requested: usize, remaining: usize },

    /// A vector length prefix was negative or out of any accepted range.
    #[error("invalid vector length prefix: {0}")]
    InvalidLength(i64),

    /// No schema entry exists for the requested instruction name.
    #[error("unknown instruction: {0}")]
    UnknownInstruction(String),

    /// The instruction mutates state (or declares no return type) and so
    /// cannot be invoked as a read-only view.
    #[error(
        "instruction '{0}' does not support read-only simulation: views \
         require a declared return type and no writable or signer accounts"
    )]
    MethodNotViewable(String),

    /// The execution fetch failed, timed out, or was cancelled.
    #[error("execution fetch failed: {0}")]
    Fetch(String),

    /// The simulation backend failed, timed out, or was cancelled.
    #[error("simulation failed: {0}")]
    Simulation(String),

    /// The interface declares a return shape outside the supported
    /// primitive / struct / vector space.
    #[error("unsupported return type in interface: {0}")]
    UnsupportedType(String),

    /// The interface definition failed to parse or is internally
    /// inconsistent.
    #[error("invalid interface definition: {0}")]
    InvalidInterface(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
