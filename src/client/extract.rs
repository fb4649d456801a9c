//! The log path: fetch an execution's logs, scan for the return entry,
//! decode its payload.

use crate::client::fetcher::{CommitmentLevel, ExecutionFetcher, ExecutionRef};
use crate::decode::codec::decode;
use crate::decode::value::ReturnValue;
use crate::logs::scanner::find_return_entry;
use crate::schema::types::ReturnType;
use crate::Result;
use tracing::{debug, info};

/// Recover the decoded return value of `target_program_id` from the
/// execution referenced by `execution`.
///
/// The fetch is the only suspension point; a fetch failure (including
/// cancellation or timeout in the backend) propagates as
/// [`crate::ClientError::Fetch`] — never a partially decoded value.
#[tracing::instrument(skip_all, fields(execution = %execution, program = target_program_id))]
pub async fn extract_and_decode<F: ExecutionFetcher>(
    fetcher: &F,
    execution: &ExecutionRef,
    target_program_id: &str,
    return_type: &ReturnType,
    commitment: CommitmentLevel,
) -> Result<ReturnValue> {
    info!("Fetching execution logs at {} commitment", commitment);
    let log_lines = fetcher.get_execution_logs(execution, commitment).await?;
    debug!(lines = log_lines.len(), "Scanning execution logs");

    let entry = find_return_entry(&log_lines, target_program_id)?;
    debug!(payload = %hex::encode(&entry.data), "Decoding return payload");

    decode(&entry.data, return_type)
}
