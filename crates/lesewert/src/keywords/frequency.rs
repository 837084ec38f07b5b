//! Frequency-based keyword extraction backend.

use crate::text::tokenize;
use indexmap::IndexMap;

/// Maximum number of keywords returned by local extraction.
pub const MAX_LOCAL_KEYWORDS: usize = 8;

/// Extract keywords by token frequency.
///
/// Tokens are counted case-folded, ranked by descending frequency, and
/// capped at [`MAX_LOCAL_KEYWORDS`]. Ties keep first-occurrence order, so
/// the result is deterministic for a given input.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for token in tokenize(text) {
        *counts.entry(token).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    // Stable sort, so equal counts preserve insertion order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(MAX_LOCAL_KEYWORDS);

    ranked.into_iter().map(|(token, _)| token).collect()
}
