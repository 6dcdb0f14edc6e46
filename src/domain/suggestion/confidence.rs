//! Confidence normalization across a candidate set.

/// Min-max scales affinities into [0, 1].
///
/// # Edge Cases
/// - Empty input: empty output
/// - No positive affinity anywhere: every confidence is 0.0
/// - Single candidate with signal: 1.0
/// - All candidates equal and positive: 1.0 each
pub fn normalize(affinities: &[f64]) -> Vec<f64> {
    let finite = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
    let values: Vec<f64> = affinities.iter().copied().map(finite).collect();

    let max = values.iter().copied().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return vec![0.0; values.len()];
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let span = max - min;
    if span <= f64::EPSILON {
        return vec![1.0; values.len()];
    }
    values
        .iter()
        .map(|v| ((v - min) / span).clamp(0.0, 1.0))
        .collect()
}
