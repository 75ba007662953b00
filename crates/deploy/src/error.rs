//! Deploy error types.

/// Errors produced during bundle deployment.
#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("store error: {0}")]
    Store(String),

    #[error("target id must not be empty")]
    InvalidTarget,

    #[error("transfer error: {0}")]
    Transfer(#[from] sitedeploy_transfer::TransferError),
}
