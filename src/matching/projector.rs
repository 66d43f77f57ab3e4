//! Truncation of pre-ranked match lists
//!
//! The matching service returns results already sorted by descending
//! score; the client only decides how many to show. No re-sorting
//! happens here.

/// Returns the first `min(limit, matches.len())` elements in input
/// order. Total and pure; an empty input or a zero limit yields an
/// empty list.
pub fn project<M: Clone>(matches: &[M], limit: usize) -> Vec<M> {
    matches.iter().take(limit).cloned().collect()
}

/// Clamps a user-supplied limit into `0..=max` before projection.
/// Negative requests collapse to 0 rather than erroring.
pub fn clamp_limit(requested: i64, max: usize) -> usize {
    if requested < 0 {
        0
    } else {
        (requested as usize).min(max)
    }
}
