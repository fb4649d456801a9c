//! In-memory test doubles for the `return-data-client` seams.
//!
//! - [`MockLedger`] — a canned [`ExecutionFetcher`]: maps execution
//!   references to prepared log line vectors.
//! - [`MockSimulator`] — a canned [`SimulationBackend`]: maps instruction
//!   names to raw return bytes and records every call, so tests can assert
//!   that ineligible views never reach the backend.
//! - Log line builders for both return-log conventions.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use return_data_client::{
    AccountRef, ClientError, CommitmentLevel, ExecutionFetcher, ExecutionRef, Result,
    SimulationBackend,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// Build a legacy-convention return line: `Program return: <id> <base64>`.
pub fn legacy_return_line(program_id: &str, data: &[u8]) -> String {
    format!("Program return: {} {}", program_id, BASE64.encode(data))
}

/// Build a data-convention return line: `Program data: <base64>`.
pub fn data_return_line(data: &[u8]) -> String {
    format!("Program data: {}", BASE64.encode(data))
}

/// Wrap a program's log lines in the usual invoke/success framing, the way
/// a runtime interleaves them for a top-level call.
pub fn framed_execution(program_id: &str, inner: &[String]) -> Vec<String> {
    let mut lines = vec![format!("Program {} invoke [1]", program_id)];
    lines.extend(inner.iter().cloned());
    lines.push(format!("Program {} success", program_id));
    lines
}

/// Canned execution-log store.
#[derive(Debug, Default)]
pub struct MockLedger {
    transactions: HashMap<String, Vec<String>>,
}

impl MockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the log lines that a given execution reference resolves to.
    pub fn record(&mut self, reference: impl Into<String>, log_lines: Vec<String>) {
        self.transactions.insert(reference.into(), log_lines);
    }
}

impl ExecutionFetcher for MockLedger {
    async fn get_execution_logs(
        &self,
        execution: &ExecutionRef,
        _commitment: CommitmentLevel,
    ) -> Result<Vec<String>> {
        self.transactions
            .get(execution.as_str())
            .cloned()
            .ok_or_else(|| ClientError::Fetch(format!("unknown execution reference: {}", execution)))
    }
}

/// A fetcher whose every call fails, standing in for a cancelled or
/// timed-out backend.
#[derive(Debug, Default)]
pub struct FailingFetcher;

impl ExecutionFetcher for FailingFetcher {
    async fn get_execution_logs(
        &self,
        _execution: &ExecutionRef,
        _commitment: CommitmentLevel,
    ) -> Result<Vec<String>> {
        Err(ClientError::Fetch("fetch cancelled".to_string()))
    }
}

/// Canned simulation backend with call recording.
#[derive(Debug, Default)]
pub struct MockSimulator {
    returns: HashMap<String, Vec<u8>>,
    calls: Mutex<Vec<String>>,
}

impl MockSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw return bytes a simulated instruction hands back.
    pub fn set_return(&mut self, instruction: impl Into<String>, data: Vec<u8>) {
        self.returns.insert(instruction.into(), data);
    }

    /// Instruction names simulated so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl SimulationBackend for MockSimulator {
    async fn simulate(
        &self,
        instruction: &str,
        _accounts: &[AccountRef],
        _args: &[u8],
    ) -> Result<Vec<u8>> {
        self.calls.lock().unwrap().push(instruction.to_string());
        self.returns
            .get(instruction)
            .cloned()
            .ok_or_else(|| ClientError::Simulation(format!("no canned return for '{}'", instruction)))
    }
}
