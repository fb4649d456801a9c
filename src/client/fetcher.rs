//! The seam between this crate and whatever fetches execution logs.

use crate::Result;
use std::fmt;
use std::future::Future;

/// How settled an execution must be before its logs are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitmentLevel {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl CommitmentLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitmentLevel::Processed => "processed",
            CommitmentLevel::Confirmed => "confirmed",
            CommitmentLevel::Finalized => "finalized",
        }
    }
}

impl fmt::Display for CommitmentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque reference to one submitted execution — typically the transaction
/// signature handed back by whatever submitted the instruction. Never
/// parsed, only echoed back to the fetcher.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExecutionRef(String);

impl ExecutionRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ExecutionRef {
    fn from(reference: &str) -> Self {
        Self(reference.to_string())
    }
}

impl From<String> for ExecutionRef {
    fn from(reference: String) -> Self {
        Self(reference)
    }
}

impl fmt::Display for ExecutionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Retrieves the ordered log lines of one confirmed execution.
///
/// Implementations sit on an RPC client (or a test double) and must return
/// the lines in emission order, with cross-program sub-execution lines
/// interleaved where the runtime put them. Failures — including backend
/// timeouts and cancellation — surface as [`crate::ClientError::Fetch`];
/// the core never retries.
pub trait ExecutionFetcher: Send + Sync {
    fn get_execution_logs(
        &self,
        execution: &ExecutionRef,
        commitment: CommitmentLevel,
    ) -> impl Future<Output = Result<Vec<String>>> + Send;
}

// ── tests ─────────────────────────────────────────────────────────────────────
