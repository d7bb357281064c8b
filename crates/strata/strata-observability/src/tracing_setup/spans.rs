//! Span definitions per operation: similarity, retrieval, history, sensitivity.

/// Create a pattern-similarity span.
#[macro_export]
macro_rules! similarity_span {
    ($pattern_id:expr) => {
        tracing::debug_span!("strata.similarity", pattern_id = %$pattern_id)
    };
}

/// Create a retrieval span.
#[macro_export]
macro_rules! retrieval_span {
    ($mode:expr, $top_k:expr) => {
        tracing::info_span!("strata.retrieval", mode = %$mode, top_k = $top_k)
    };
}

/// Create a history-cache span.
#[macro_export]
macro_rules! history_span {
    ($storage_key:expr, $op:expr) => {
        tracing::debug_span!("strata.history", storage_key = %$storage_key, op = $op)
    };
}

/// Create a sensitivity-analysis span.
#[macro_export]
macro_rules! sensitivity_span {
    ($perturbations:expr) => {
        tracing::info_span!("strata.sensitivity", perturbations = $perturbations)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SIMILARITY: &str = "strata.similarity";
    pub const RETRIEVAL: &str = "strata.retrieval";
    pub const HISTORY: &str = "strata.history";
    pub const SENSITIVITY: &str = "strata.sensitivity";
}
