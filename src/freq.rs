//! Frequency analysis over a symbol stream.

use std::collections::HashMap;

use crate::error::CodecError;

/// Count occurrences of every distinct symbol in `text`.
///
/// Returns one `(symbol, weight)` pair per distinct symbol. The list is
/// sorted by symbol so that the downstream tree build sees the alphabet in
/// the same order on every run.
pub fn symbol_weights(text: &str) -> Result<Vec<(char, u64)>, CodecError> {
    if text.is_empty() {
        return Err(CodecError::EmptyInput);
    }

    let mut counts: HashMap<char, u64> = HashMap::new();
    for ch in text.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }

    let mut weights: Vec<(char, u64)> = counts.into_iter().collect();
    weights.sort_unstable_by_key(|&(ch, _)| ch);
    Ok(weights)
}
