use std::collections::HashMap;

/// Per-document mapping from stem to summed importance. Each stem appears at
/// most once as a key.
pub type WeightedTermMap = HashMap<String, f32>;

/// Sum importance per stem across all occurrences in one document.
/// Order-independent; the token sequence is borrowed, not consumed.
pub fn weigh_terms(tokens: &[(String, f32)]) -> WeightedTermMap {
    let mut terms = WeightedTermMap::new();
    for (stem, importance) in tokens {
        *terms.entry(stem.clone()).or_insert(0.0) += importance;
    }
    terms
}
