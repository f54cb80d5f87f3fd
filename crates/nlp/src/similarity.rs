//! Jaccard set-overlap similarity between token sequences.

use std::collections::HashSet;

/// Jaccard index `|A ∩ B| / |A ∪ B|` over the token sets.
///
/// Returns 0.0 when either sequence is empty; never divides by zero.
/// Output is in [0.0, 1.0].
pub fn jaccard(a: &[String], b: &[String]) -> f32 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();

    if union == 0 {
        return 0.0;
    }

    intersection as f32 / union as f32
}
