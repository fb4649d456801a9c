//! Locating a program's return entry in an execution log.
//!
//! Two line conventions co-exist in the wild, emitted by different runtime
//! generations:
//!
//! 1. **Legacy**: `Program return: <programId> <base64Payload>` — carries the
//!    emitting program's identifier, which must equal the caller's target for
//!    the line to count.
//! 2. **Data**: `Program data: <base64Payload>` — carries no identifier and
//!    matches unconditionally; attribution to the target program is the
//!    caller's responsibility via log ordering.
//!
//! Each line is tried against the two rules in that fixed priority order and
//! the first matching line in log order wins. A third convention would be a
//! third rule here, not a rewrite.

use crate::{ClientError, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use tracing::debug;

/// Prefix of the legacy return-log convention.
pub const RETURN_LOG_PREFIX: &str = "Program return: ";

/// Prefix of the data-log convention.
pub const DATA_LOG_PREFIX: &str = "Program data: ";

/// One matched and base64-decoded return log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnLogEntry {
    /// Emitting program identifier — present for the legacy format only;
    /// the data format embeds none.
    pub program_id: Option<String>,
    /// The decoded payload bytes, ready for the codec.
    pub data: Vec<u8>,
}

/// Scan `log_lines` in order for the return entry of `target_program_id`.
///
/// Once a line has matched a format, any defect in it (missing payload,
/// invalid base64) is terminal — scanning never resumes past a tentatively
/// matched line.
pub fn find_return_entry(log_lines: &[String], target_program_id: &str) -> Result<ReturnLogEntry> {
    for line in log_lines {
        if let Some(rest) = line.strip_prefix(RETURN_LOG_PREFIX) {
            let rest = rest.trim();
            if rest.is_empty() {
                return Err(ClientError::MalformedReturnLog(
                    "legacy return line carries no program identifier".to_string(),
                ));
            }
            let (program_id, payload) = match rest.split_once(char::is_whitespace) {
                Some((id, payload)) => (id, payload.trim_start()),
                None => (rest, ""),
            };
            if program_id != target_program_id {
                // Another program's return entry; keep scanning.
                continue;
            }
            if payload.is_empty() {
                return Err(ClientError::MalformedReturnLog(format!(
                    "legacy return line for '{}' carries no payload",
                    program_id
                )));
            }
            debug!(program = program_id, "Matched legacy return line");
            return Ok(ReturnLogEntry {
                program_id: Some(program_id.to_string()),
                data: decode_payload(payload)?,
            });
        }

        if let Some(rest) = line.strip_prefix(DATA_LOG_PREFIX) {
            let payload = rest.trim();
            if payload.is_empty() {
                return Err(ClientError::MalformedReturnLog(
                    "data line carries no payload".to_string(),
                ));
            }
            debug!("Matched data return line");
            return Ok(ReturnLogEntry {
                program_id: None,
                data: decode_payload(payload)?,
            });
        }
    }
    Err(ClientError::NoReturnLogFound)
}

fn decode_payload(payload: &str) -> Result<Vec<u8>> {
    BASE64
        .decode(payload)
        .map_err(|e| ClientError::MalformedReturnLog(format!("invalid base64 payload: {}", e)))
}

// ── tests ─────────────────────────────────────────────────────────────────────
