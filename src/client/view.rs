//! The view path: read-only simulated invocation of eligible instructions.
//!
//! A view is a cheaper retrieval path, not a different value space: a
//! read-only simulation of an instruction decodes to exactly the value the
//! log path would produce for an equivalent on-chain call, because both
//! decode the same declared return shape.
//!
//! Eligibility is a checked classification, not a probed capability: an
//! instruction that mutates state (or declares no return type) fails with
//! [`crate::ClientError::MethodNotViewable`] *before* any backend call, so
//! callers get one uniform error-handling story.

use crate::decode::codec::decode;
use crate::decode::value::ReturnValue;
use crate::schema::interface::ProgramInterface;
use crate::schema::types::Mutability;
use crate::{ClientError, Result};
use std::future::Future;
use std::sync::Arc;
use tracing::{info, warn};

/// One account passed to a simulated invocation. The address is opaque —
/// carried through to the backend, never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRef {
    pub name: String,
    pub address: String,
}

impl AccountRef {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

/// Runs an instruction read-only and hands back the raw bytes of its typed
/// return channel. Implementations must not persist any state change.
/// Failures — including timeouts and cancellation — surface as
/// [`crate::ClientError::Simulation`].
pub trait SimulationBackend: Send + Sync {
    fn simulate(
        &self,
        instruction: &str,
        accounts: &[AccountRef],
        args: &[u8],
    ) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// Dispatches view invocations for one program's interface.
///
/// The interface is immutable after load; one `ViewClient` can serve
/// concurrent calls without locking.
pub struct ViewClient<B> {
    interface: Arc<ProgramInterface>,
    backend: B,
}

impl<B: SimulationBackend> ViewClient<B> {
    pub fn new(interface: Arc<ProgramInterface>, backend: B) -> Self {
        Self { interface, backend }
    }

    pub fn interface(&self) -> &ProgramInterface {
        &self.interface
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Invoke `instruction` as a read-only view and decode its return value.
    ///
    /// `args` is the instruction's serialized argument data, passed through
    /// to the backend untouched.
    #[tracing::instrument(skip_all, fields(instruction = instruction))]
    pub async fn invoke_view(
        &self,
        instruction: &str,
        accounts: &[AccountRef],
        args: &[u8],
    ) -> Result<ReturnValue> {
        let schema = self
            .interface
            .instruction(instruction)
            .ok_or_else(|| ClientError::UnknownInstruction(instruction.to_string()))?;

        if schema.mutability == Mutability::Mutating {
            warn!("Refusing view of state-mutating instruction");
            return Err(ClientError::MethodNotViewable(instruction.to_string()));
        }
        let Some(return_type) = &schema.returns else {
            warn!("Refusing view of instruction with no declared return type");
            return Err(ClientError::MethodNotViewable(instruction.to_string()));
        };

        info!("Simulating read-only instruction");
        let raw = self.backend.simulate(instruction, accounts, args).await?;
        decode(&raw, return_type)
    }
}
