//! Data types for the deploy flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::StoreOutcome;

/// Terminal state of an upload session, derived from the per-batch
/// outcomes rather than from whether the call returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Every batch was accepted.
    #[serde(rename = "completed")]
    Completed,
    /// Some batches were accepted, some rejected.
    #[serde(rename = "partial")]
    Partial,
    /// No batch was accepted.
    #[serde(rename = "failed")]
    Failed,
}

/// Outcome of a single batch write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutcome {
    pub batch_index: u32,
    pub outcome: StoreOutcome,
}

/// Aggregated result of one upload session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResult {
    pub session_id: String,
    pub target_id: String,
    pub status: SessionStatus,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    pub total_size: u64,
    pub uploaded_size: u64,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub batch_outcomes: Vec<BatchOutcome>,
}

impl SessionResult {
    /// Uploaded fraction as a percentage (0-100).
    pub fn percentage(&self) -> f64 {
        if self.total_size == 0 {
            return 0.0;
        }
        self.uploaded_size as f64 / self.total_size as f64 * 100.0
    }
}

/// Progress event emitted while a session runs.
///
/// The dashboard UI consumes these; nothing in this crate renders them.
#[derive(Debug, Clone)]
pub enum DeployEvent {
    /// A batch finished (accepted or not); `uploaded` counts accepted
    /// bytes only.
    Progress {
        session_id: String,
        batch_index: u32,
        uploaded: u64,
        total: u64,
    },
    /// Every batch was accepted.
    Completed { session_id: String },
    /// At least one batch was rejected.
    Failed { session_id: String, error: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_of_empty_session_is_zero() {
        let result = SessionResult {
            session_id: "s1".into(),
            target_id: "t1".into(),
            status: SessionStatus::Completed,
            message: String::new(),
            total_size: 0,
            uploaded_size: 0,
            started_at: Utc::now(),
            finished_at: Utc::now(),
            batch_outcomes: vec![],
        };
        assert_eq!(result.percentage(), 0.0);
    }

    #[test]
    fn session_result_json_shape() {
        let result = SessionResult {
            session_id: "s1".into(),
            target_id: "site-7f3a".into(),
            status: SessionStatus::Partial,
            message: "1 of 2 batches rejected".into(),
            total_size: 3000,
            uploaded_size: 1500,
            started_at: Utc::now(),
            finished_at: Utc::now(),
            batch_outcomes: vec![BatchOutcome {
                batch_index: 0,
                outcome: StoreOutcome::Accepted("ok".into()),
            }],
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"status\":\"partial\""));
        assert!(json.contains("\"uploadedSize\":1500"));
        assert!(json.contains("\"batchIndex\":0"));
        let parsed: SessionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, parsed);
    }
}
