//! Dense cosine similarity for fixed-dimension embeddings.

/// Cosine similarity of `query` and `candidate`, clamped to `[0, 1]`.
///
/// Returns `None` when the dimensions differ. A zero-norm side scores 0.
pub fn embedding_cosine(query: &[f32], candidate: &[f32]) -> Option<f64> {
    if query.len() != candidate.len() {
        return None;
    }

    let mut dot = 0.0f64;
    let mut norm_q = 0.0f64;
    let mut norm_c = 0.0f64;
    for (q, c) in query.iter().zip(candidate) {
        let (q, c) = (f64::from(*q), f64::from(*c));
        dot += q * c;
        norm_q += q * q;
        norm_c += c * c;
    }

    let denom = norm_q.sqrt() * norm_c.sqrt();
    if denom == 0.0 || !denom.is_finite() {
        return Some(0.0);
    }
    Some((dot / denom).clamp(0.0, 1.0))
}
