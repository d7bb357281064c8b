//! Lexical, structural, and combined similarity.
//!
//! Raw similarities live in `[0, 1]`; reported percentages are rounded to
//! one decimal place on the `[0, 100]` scale.

use strata_core::config::SimilarityConfig;
use strata_core::models::{FeatureRecord, StrategicPattern};
use tracing::trace;

use crate::vectorizer::{vectorize, TermVector};

/// Partial credit for a player-count difference of 0, 1, 2.
const PLAYER_COUNT_CREDIT: [f64; 3] = [1.0, 0.7, 0.4];

/// `round(x * 10) / 10`.
pub fn round_pct(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Cosine similarity of two term vectors, clamped to `[0, 1]`.
///
/// Empty vectors and zero norms yield 0.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    // Iterate the smaller vector; absent keys contribute nothing.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small.iter().map(|(t, w)| w * large.weight(t)).sum();

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Structural agreement between two feature records as a rounded percentage.
///
/// Only attributes present on both sides are compared. Returns 0 when no
/// attribute is comparable.
pub fn structural_similarity(scenario: &FeatureRecord, pattern: &FeatureRecord) -> f64 {
    let mut credit = 0.0;
    let mut compared = 0usize;

    if let (Some(a), Some(b)) = (scenario.player_count, pattern.player_count) {
        let diff = a.abs_diff(b) as usize;
        credit += PLAYER_COUNT_CREDIT.get(diff).copied().unwrap_or(0.0);
        compared += 1;
    }

    for ((_, a), (_, b)) in scenario.flags().iter().zip(pattern.flags().iter()) {
        if let (Some(a), Some(b)) = (a, b) {
            if a == b {
                credit += 1.0;
            }
            compared += 1;
        }
    }

    if compared == 0 {
        return 0.0;
    }
    round_pct(credit / compared as f64 * 100.0)
}

/// Weighted blend of text and structural percentages using the default 0.6 / 0.4 split.
pub fn combined_similarity(text_pct: f64, structural_pct: f64) -> f64 {
    SimilarityScorer::default().combined(text_pct, structural_pct)
}

/// Pattern scorer carrying the configured weights.
#[derive(Debug, Clone, Default)]
pub struct SimilarityScorer {
    config: SimilarityConfig,
}

impl SimilarityScorer {
    pub fn new(config: SimilarityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    /// Term vector of a pattern: description plus the weighted signature, if any.
    pub fn pattern_vector(&self, pattern: &StrategicPattern) -> TermVector {
        let mut vector = vectorize(&pattern.description);
        if let Some(signature) = pattern.signature.as_deref() {
            vector.merge_scaled(&vectorize(signature), self.config.signature_weight);
        }
        vector
    }

    /// Lexical similarity of scenario text to a pattern, as a rounded percentage.
    pub fn pattern_similarity(&self, scenario_text: &str, pattern: &StrategicPattern) -> f64 {
        let scenario = vectorize(scenario_text);
        self.pattern_similarity_vec(&scenario, pattern)
    }

    /// Same as [`pattern_similarity`](Self::pattern_similarity) for a pre-built scenario vector.
    pub fn pattern_similarity_vec(&self, scenario: &TermVector, pattern: &StrategicPattern) -> f64 {
        let sim = cosine_similarity(scenario, &self.pattern_vector(pattern));
        trace!(pattern_id = %pattern.id, sim, "pattern cosine");
        (sim * 1000.0).round() / 10.0
    }

    /// Weighted blend of text and structural percentages, rounded, on `[0, 100]`.
    pub fn combined(&self, text_pct: f64, structural_pct: f64) -> f64 {
        let blended =
            self.config.text_weight * text_pct + self.config.structural_weight * structural_pct;
        round_pct(blended.clamp(0.0, 100.0))
    }
}
