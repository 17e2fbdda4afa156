//! Error types and handling
//!
//! Common error types used across the bridge.

use thiserror::Error;

/// Bridge-wide error type
#[derive(Error, Debug)]
pub enum RecorderError {
    #[error("recorder failed to finish writing")]
    FinishFailed,

    #[error("recording completion was dropped before a result was delivered")]
    CompletionLost,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using RecorderError
pub type RecorderResult<T> = Result<T, RecorderError>;
