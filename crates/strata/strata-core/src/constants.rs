/// Strata system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Dimensionality of stored analysis embeddings.
pub const EMBEDDING_DIMENSIONS: usize = 128;

/// Maximum number of stored embeddings scanned per nearest-neighbor query.
pub const CANDIDATE_SCAN_LIMIT: usize = 200;

/// Bounds and default for the retrieval `top_k` parameter.
pub const MIN_TOP_K: usize = 1;
pub const MAX_TOP_K: usize = 20;
pub const DEFAULT_TOP_K: usize = 5;

/// Minimum token length (exclusive) kept by the text vectorizer.
pub const MIN_TERM_LEN: usize = 3;

/// Upper bound on Monte Carlo perturbations per sensitivity run.
pub const MAX_PERTURBATIONS: usize = 10_000;
