use serde::{Deserialize, Serialize};

use crate::records::TransferRecord;

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// One store write call: a single size-bounded batch of records.
///
/// `metadata` is opaque caller context (e.g. a deployment-run identifier),
/// forwarded on every call. The contract carries no per-batch idempotency
/// key, so a retried request could be written twice; the sender does not
/// retry, which keeps the gap latent — any future retry layer must add one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreWriteRequest {
    pub target_id: String,
    pub files: Vec<TransferRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Response payloads
// ---------------------------------------------------------------------------

/// The store's answer to one write call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreWriteResponse {
    pub status: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}
