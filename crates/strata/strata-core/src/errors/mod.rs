//! Error types for every Strata subsystem.

mod analysis_error;
mod retrieval_error;
mod storage_error;

pub use analysis_error::AnalysisError;
pub use retrieval_error::RetrievalError;
pub use storage_error::StorageError;

/// Top-level error type. Subsystem errors convert into it via `From`.
#[derive(Debug, thiserror::Error)]
pub enum StrataError {
    #[error("config error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("retrieval error: {0}")]
    RetrievalError(#[from] RetrievalError),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("analysis error: {0}")]
    AnalysisError(#[from] AnalysisError),
}

/// Convenience alias used across the workspace.
pub type StrataResult<T> = Result<T, StrataError>;
