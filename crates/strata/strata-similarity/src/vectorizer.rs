//! Local length-normalized term weighting.
//!
//! Weights are `count / sqrt(kept_tokens)`. There is no corpus-wide IDF
//! term: every document is weighted on its own.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use strata_core::constants::MIN_TERM_LEN;

/// Anything that is not an ASCII word character after lowercasing.
static NON_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9_]+").unwrap());

/// Sparse mapping of normalized token → non-negative weight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    weights: HashMap<String, f64>,
}

impl TermVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weight of `term`, or 0 when absent.
    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    /// Add `weight` to `term`. Non-positive or non-finite contributions are ignored.
    pub fn add(&mut self, term: &str, weight: f64) {
        if weight > 0.0 && weight.is_finite() {
            *self.weights.entry(term.to_string()).or_default() += weight;
        }
    }

    /// Merge every term of `other` into `self`, scaled by `factor`.
    ///
    /// Existing weights are increased, never replaced.
    pub fn merge_scaled(&mut self, other: &TermVector, factor: f64) {
        for (term, weight) in &other.weights {
            self.add(term, weight * factor);
        }
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Lowercase, strip non-word characters, and keep tokens longer than 3 characters.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    NON_WORD_RE
        .replace_all(&lowered, " ")
        .split_whitespace()
        .filter(|t| t.chars().count() > MIN_TERM_LEN)
        .map(str::to_string)
        .collect()
}

/// Build the term vector of `text`. Empty or fully filtered input yields an empty vector.
pub fn vectorize(text: &str) -> TermVector {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return TermVector::new();
    }

    let mut counts: HashMap<String, f64> = HashMap::new();
    for tok in &tokens {
        *counts.entry(tok.clone()).or_default() += 1.0;
    }

    let scale = 1.0 / (tokens.len() as f64).sqrt();
    let mut vector = TermVector::new();
    for (term, count) in counts {
        vector.add(&term, count * scale);
    }
    vector
}
