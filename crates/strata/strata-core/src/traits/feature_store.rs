use crate::errors::StrataResult;
use crate::models::{AnalysisRecord, StoredEmbedding};

/// Read side of the external analysis/feature store.
pub trait IFeatureStore: Send + Sync {
    /// Up to `limit` stored embeddings, most recent first.
    fn recent_embeddings(&self, limit: usize) -> StrataResult<Vec<StoredEmbedding>>;

    /// Up to `limit` analysis records ordered by `created_at` descending.
    fn recent_records(&self, limit: usize) -> StrataResult<Vec<AnalysisRecord>>;
}
