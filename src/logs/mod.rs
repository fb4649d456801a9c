//! Return-entry scanning over execution log lines.

pub mod scanner;

pub use scanner::{find_return_entry, ReturnLogEntry, DATA_LOG_PREFIX, RETURN_LOG_PREFIX};
