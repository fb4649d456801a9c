//! Caller-facing retrieval paths.
//!
//! Sub-modules:
//! - [`fetcher`] — The [`fetcher::ExecutionFetcher`] seam to the node's log
//!   retrieval, plus commitment levels and execution references.
//! - [`extract`] — The log path: fetch, scan, decode.
//! - [`view`]    — The view path: mutability gate, simulate, decode.

pub mod extract;
pub mod fetcher;
pub mod view;

pub use extract::extract_and_decode;
pub use fetcher::{CommitmentLevel, ExecutionFetcher, ExecutionRef};
pub use view::{AccountRef, SimulationBackend, ViewClient};
