use serde::{Deserialize, Serialize};

use super::defaults;

/// Nearest-neighbor retrieval configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Stored embeddings fetched per query.
    pub candidate_limit: usize,
    /// `top_k` used when the request omits it.
    pub default_top_k: usize,
    /// Required query and candidate dimensionality.
    pub embedding_dimensions: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            candidate_limit: defaults::DEFAULT_CANDIDATE_LIMIT,
            default_top_k: defaults::DEFAULT_TOP_K,
            embedding_dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
        }
    }
}
