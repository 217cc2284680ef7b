//! Shannon entropy over whitespace-delimited tokens

use std::collections::BTreeMap;

/// Shannon entropy (bits) of the token frequency distribution of `text`.
///
/// Tokens are runs of non-whitespace characters. Text without tokens has
/// entropy 0. The caller is responsible for case normalization.
pub fn shannon_entropy(text: &str) -> f64 {
    // Ordered map keeps the summation order, and therefore the result, stable
    let mut freq: BTreeMap<&str, usize> = BTreeMap::new();
    let mut total = 0usize;
    for token in text.split_whitespace() {
        *freq.entry(token).or_insert(0) += 1;
        total += 1;
    }

    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    let mut entropy = 0.0;
    for &count in freq.values() {
        let probability = count as f64 / total;
        entropy -= probability * probability.log2();
    }
    entropy
}
