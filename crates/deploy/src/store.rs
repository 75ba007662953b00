//! Asset store client seam.
//!
//! `AssetStore` is implemented by the dashboard app on top of its actual
//! RPC transport. Using a trait keeps the sequencer decoupled from
//! transport and testable with mocks; the handle is constructed by the
//! caller and passed in, never cached behind a global.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use sitedeploy_protocol::{StoreWriteRequest, StoreWriteResponse};

use crate::error::DeployError;

/// Abstract connection to the remote asset store.
pub trait AssetStore: Send + Sync {
    /// Durably writes one batch of records and reports acceptance.
    ///
    /// The wire contract has no per-batch idempotency key; callers that
    /// add retries on top of this trait must also add deduplication.
    fn store(
        &self,
        request: &StoreWriteRequest,
    ) -> Pin<Box<dyn Future<Output = Result<StoreWriteResponse, DeployError>> + Send + '_>>;
}

/// Outcome of one store call.
///
/// Tagged explicitly so callers match on the variant instead of probing
/// the response for field presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "camelCase")]
pub enum StoreOutcome {
    Accepted(String),
    Rejected(String),
}

impl StoreOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, StoreOutcome::Accepted(_))
    }

    pub fn message(&self) -> &str {
        match self {
            StoreOutcome::Accepted(m) | StoreOutcome::Rejected(m) => m,
        }
    }
}

impl From<StoreWriteResponse> for StoreOutcome {
    fn from(resp: StoreWriteResponse) -> Self {
        if resp.status {
            StoreOutcome::Accepted(resp.message)
        } else {
            StoreOutcome::Rejected(resp.message)
        }
    }
}
