//! Rank a catalog of strategic patterns against one scenario.

use serde::Serialize;
use strata_core::models::{FeatureRecord, PatternCategory, StrategicPattern};
use strata_observability::similarity_span;
use tracing::debug;

use crate::features::extract_features_with_floor;
use crate::scorer::{structural_similarity, SimilarityScorer};
use crate::vectorizer::vectorize;

/// One scored pattern. All scores are percentages on `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternMatch {
    pub pattern_id: String,
    pub name: String,
    pub category: PatternCategory,
    pub text_similarity: f64,
    pub structural_similarity: f64,
    pub combined_similarity: f64,
}

/// Score every pattern and return the best `limit`, highest combined score
/// first. Ties are broken by pattern id so the output is stable.
pub fn rank_patterns(
    scorer: &SimilarityScorer,
    scenario_text: &str,
    participants: Option<u32>,
    catalog: &[StrategicPattern],
    limit: usize,
) -> Vec<PatternMatch> {
    let features =
        extract_features_with_floor(scenario_text, participants, scorer.config().min_player_count);
    rank_with_features(scorer, scenario_text, &features, catalog, limit)
}

/// [`rank_patterns`] with caller-supplied scenario features.
pub fn rank_with_features(
    scorer: &SimilarityScorer,
    scenario_text: &str,
    features: &FeatureRecord,
    catalog: &[StrategicPattern],
    limit: usize,
) -> Vec<PatternMatch> {
    let scenario = vectorize(scenario_text);

    let mut matches: Vec<PatternMatch> = catalog
        .iter()
        .map(|pattern| {
            let _span = similarity_span!(pattern.id).entered();
            let text = scorer.pattern_similarity_vec(&scenario, pattern);
            let structural = structural_similarity(features, &pattern.features);
            let combined = scorer.combined(text, structural);
            debug!(text, structural, combined, "scored pattern");
            PatternMatch {
                pattern_id: pattern.id.clone(),
                name: pattern.name.clone(),
                category: pattern.category,
                text_similarity: text,
                structural_similarity: structural,
                combined_similarity: combined,
            }
        })
        .collect();

    matches.sort_by(|a, b| {
        b.combined_similarity
            .partial_cmp(&a.combined_similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.pattern_id.cmp(&b.pattern_id))
    });
    matches.truncate(limit);
    matches
}
