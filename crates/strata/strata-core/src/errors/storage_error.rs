/// Key-value persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("read failed for key {key}: {reason}")]
    ReadFailed { key: String, reason: String },

    #[error("write failed for key {key}: {reason}")]
    WriteFailed { key: String, reason: String },

    #[error("remove failed for key {key}: {reason}")]
    RemoveFailed { key: String, reason: String },

    #[error("SQLite error: {message}")]
    SqliteError { message: String },
}
