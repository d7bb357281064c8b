//! # strata-similarity
//!
//! Scores free-text scenarios against catalogued strategic patterns.
//!
//! - [`vectorizer`]: text → sparse [`TermVector`]
//! - [`scorer`]: cosine, structural, and combined similarity
//! - [`features`]: keyword heuristics that derive a [`FeatureRecord`](strata_core::FeatureRecord)
//! - [`catalog`]: ranks a pattern catalog against a scenario

pub mod catalog;
pub mod features;
pub mod scorer;
pub mod vectorizer;

pub use catalog::{rank_patterns, PatternMatch};
pub use features::extract_features;
pub use scorer::{
    combined_similarity, cosine_similarity, round_pct, structural_similarity, SimilarityScorer,
};
pub use vectorizer::{vectorize, TermVector};
