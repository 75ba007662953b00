//! Sequenced batch upload.
//!
//! Drives one store write per batch, strictly in ascending batch order,
//! folding uploaded-byte totals and per-batch outcomes into a session
//! result.

use chrono::Utc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use sitedeploy_protocol::{FileRecord, StoreWriteRequest};
use sitedeploy_transfer::{TransferBatch, pack, partition};

use crate::error::DeployError;
use crate::path::{is_archive_junk, normalize_store_path};
use crate::store::{AssetStore, StoreOutcome};
use crate::types::{BatchOutcome, DeployEvent, SessionResult, SessionStatus};

/// Uploads batches to one store target, one call in flight at a time.
///
/// The response for batch `n` is awaited before batch `n + 1` is issued:
/// the receiver reassembles chunks in arrival order and the store bounds
/// concurrent writes. A running session cannot be aborted; callers must
/// not start overlapping sessions against the same target.
pub struct UploadSequencer<'a> {
    store: &'a dyn AssetStore,
    events_tx: Option<mpsc::Sender<DeployEvent>>,
}

impl<'a> UploadSequencer<'a> {
    /// Creates a sequencer over an externally constructed store handle.
    pub fn new(store: &'a dyn AssetStore) -> Self {
        Self {
            store,
            events_tx: None,
        }
    }

    /// Emits [`DeployEvent`]s through `tx` while uploading.
    pub fn with_events(mut self, tx: mpsc::Sender<DeployEvent>) -> Self {
        self.events_tx = Some(tx);
        self
    }

    /// Partitions, packs, and uploads a file set in one call.
    ///
    /// `limit` bounds both the chunk size and the batch size; pass
    /// [`sitedeploy_protocol::MAX_STORE_PAYLOAD`] unless the store
    /// advertises a different ceiling.
    pub async fn deploy(
        &self,
        target_id: &str,
        files: Vec<FileRecord>,
        limit: usize,
        metadata: Option<serde_json::Value>,
    ) -> Result<SessionResult, DeployError> {
        let records = partition(files, limit)?;
        let batches = pack(records, limit)?;
        self.upload(target_id, batches, metadata).await
    }

    /// Uploads pre-packed batches in ascending `batch_index` order.
    ///
    /// A rejected or errored batch is recorded and the sequence continues
    /// with the next batch (best-effort delivery); the session status
    /// reflects the mix of outcomes. Only pre-condition violations return
    /// `Err` — per-batch failures never escape as errors.
    pub async fn upload(
        &self,
        target_id: &str,
        batches: Vec<TransferBatch>,
        metadata: Option<serde_json::Value>,
    ) -> Result<SessionResult, DeployError> {
        if target_id.is_empty() {
            return Err(DeployError::InvalidTarget);
        }

        let session_id = Uuid::new_v4().to_string();
        let started_at = Utc::now();

        let batches = sanitize_batches(batches);
        let total_size: u64 = batches.iter().map(|b| b.content_len() as u64).sum();

        info!(
            session = %session_id,
            target = %target_id,
            batches = batches.len(),
            total_bytes = total_size,
            "upload session started"
        );

        let mut uploaded_size: u64 = 0;
        let mut outcomes: Vec<BatchOutcome> = Vec::with_capacity(batches.len());

        for batch in &batches {
            let request = StoreWriteRequest {
                target_id: target_id.to_string(),
                files: batch.records.clone(),
                metadata: metadata.clone(),
            };

            let outcome = match self.store.store(&request).await {
                Ok(resp) => StoreOutcome::from(resp),
                Err(e) => StoreOutcome::Rejected(e.to_string()),
            };

            match &outcome {
                StoreOutcome::Accepted(_) => {
                    uploaded_size += batch.content_len() as u64;
                    debug!(
                        session = %session_id,
                        batch = batch.batch_index,
                        bytes = batch.content_len(),
                        "batch accepted"
                    );
                }
                StoreOutcome::Rejected(message) => {
                    warn!(
                        session = %session_id,
                        batch = batch.batch_index,
                        error = %message,
                        "batch rejected, continuing"
                    );
                }
            }

            outcomes.push(BatchOutcome {
                batch_index: batch.batch_index,
                outcome,
            });

            self.emit(DeployEvent::Progress {
                session_id: session_id.clone(),
                batch_index: batch.batch_index,
                uploaded: uploaded_size,
                total: total_size,
            })
            .await;
        }

        let status = derive_status(&outcomes);
        let rejected = outcomes.iter().filter(|o| !o.outcome.is_accepted()).count();
        let message = match status {
            SessionStatus::Completed => format!("{} batches written", outcomes.len()),
            _ => format!("{rejected} of {} batches rejected", outcomes.len()),
        };

        match status {
            SessionStatus::Completed => {
                info!(session = %session_id, uploaded_bytes = uploaded_size, "upload session completed");
                self.emit(DeployEvent::Completed {
                    session_id: session_id.clone(),
                })
                .await;
            }
            _ => {
                warn!(session = %session_id, error = %message, "upload session incomplete");
                self.emit(DeployEvent::Failed {
                    session_id: session_id.clone(),
                    error: message.clone(),
                })
                .await;
            }
        }

        Ok(SessionResult {
            session_id,
            target_id: target_id.to_string(),
            status,
            message,
            total_size,
            uploaded_size,
            started_at,
            finished_at: Utc::now(),
            batch_outcomes: outcomes,
        })
    }

    async fn emit(&self, event: DeployEvent) {
        if let Some(tx) = &self.events_tx {
            let _ = tx.send(event).await;
        }
    }
}

/// Applies the path policy to every record and drops junk entries.
///
/// A batch left empty after filtering is dropped entirely; surviving
/// batches keep their original `batch_index`.
fn sanitize_batches(batches: Vec<TransferBatch>) -> Vec<TransferBatch> {
    batches
        .into_iter()
        .filter_map(|batch| {
            let TransferBatch {
                batch_index,
                records,
            } = batch;
            let records: Vec<_> = records
                .into_iter()
                .filter(|r| {
                    if is_archive_junk(&r.path) {
                        warn!(path = %r.path, "dropping archive metadata record");
                        false
                    } else {
                        true
                    }
                })
                .map(|mut r| {
                    r.path = normalize_store_path(&r.path);
                    r
                })
                .collect();
            if records.is_empty() {
                None
            } else {
                Some(TransferBatch {
                    batch_index,
                    records,
                })
            }
        })
        .collect()
}

fn derive_status(outcomes: &[BatchOutcome]) -> SessionStatus {
    let accepted = outcomes.iter().filter(|o| o.outcome.is_accepted()).count();
    if accepted == outcomes.len() {
        SessionStatus::Completed
    } else if accepted == 0 {
        SessionStatus::Failed
    } else {
        SessionStatus::Partial
    }
}
