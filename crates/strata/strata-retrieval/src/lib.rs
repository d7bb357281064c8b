//! # strata-retrieval
//!
//! Nearest-neighbor lookup of stored analyses by embedding, falling back to
//! a recency listing when the request carries no usable query vector.

pub mod engine;
pub mod request;
pub mod similarity;

pub use engine::NearestNeighborRetriever;
pub use request::{clamp_top_k, RetrievalItem, RetrievalRequest, RetrievalResponse};
pub use similarity::embedding_cosine;
