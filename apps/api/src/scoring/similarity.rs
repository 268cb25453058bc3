//! Cosine similarity between embedding vectors — the semantic-relevance
//! signal and the distance measure for corpus retrieval.

/// Standard cosine similarity: dot product over the product of magnitudes.
///
/// Degenerate inputs (either vector empty, mismatched dimensionality, or a
/// zero magnitude) return 0.0 — this function never divides by zero. Vectors
/// are only comparable when produced by the same embedding model.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.is_empty() || b.is_empty() || a.len() != b.len() {
        return 0.0;
    }

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += f64::from(*x) * f64::from(*y);
        norm_a += f64::from(*x) * f64::from(*x);
        norm_b += f64::from(*y) * f64::from(*y);
    }

    let magnitude = norm_a.sqrt() * norm_b.sqrt();
    if magnitude == 0.0 {
        return 0.0;
    }
    dot / magnitude
}
