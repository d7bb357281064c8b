/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("feature store unavailable: {reason}")]
    StoreUnavailable { reason: String },

    #[error("record store unavailable: {reason}")]
    RecordStoreUnavailable { reason: String },
}
