//! # Pair Statistics
//!
//! Adjacent pair occurrence counting over token sequences.
//!
//! Counts never cross sequence boundaries: accumulating two sequences is NOT
//! the same as counting their concatenation.

use crate::types::{BMHashMap, Pair, TokenType};

/// `{ Pair<T> -> u64 }` occurrence count map.
///
/// ## Style Hints
/// Instance names should prefer `stats`, or `pair_counts`.
pub type PairCountMap<T> = BMHashMap<Pair<T>, u64>;

/// Count the adjacent pairs in one token sequence.
///
/// Sequences shorter than 2 tokens produce no counts. Overlapping
/// occurrences each count: `[5, 5, 5]` counts `(5, 5)` twice.
///
/// ## Arguments
/// * `tokens` - The token sequence to count.
///
/// ## Returns
/// The pair occurrence counts.
pub fn count_pairs<T: TokenType>(tokens: &[T]) -> PairCountMap<T> {
    let mut stats = PairCountMap::default();
    accumulate_pairs(&mut stats, tokens);
    stats
}

/// Add one sequence's adjacent pairs into an existing count map.
///
/// ## Arguments
/// * `stats` - The count map to update.
/// * `tokens` - The token sequence to count.
pub fn accumulate_pairs<T: TokenType>(
    stats: &mut PairCountMap<T>,
    tokens: &[T],
) {
    accumulate_pairs_weighted(stats, tokens, 1);
}

/// Add one sequence's adjacent pairs, weighted by a multiplicity.
///
/// Used when identical sequences have been deduplicated: each occurrence
/// contributes `weight` instead of 1.
///
/// ## Arguments
/// * `stats` - The count map to update.
/// * `tokens` - The token sequence to count.
/// * `weight` - The sequence multiplicity.
pub fn accumulate_pairs_weighted<T: TokenType>(
    stats: &mut PairCountMap<T>,
    tokens: &[T],
    weight: u64,
) {
    for window in tokens.windows(2) {
        *stats.entry((window[0], window[1])).or_default() += weight;
    }
}

/// Count adjacent pairs across many sequences, in parallel.
///
/// Addition is commutative, so the result is identical to sequential
/// accumulation regardless of the split across threads.
///
/// ## Arguments
/// * `chunks` - The token sequences to count.
///
/// ## Returns
/// The pair occurrence counts, summed over all sequences.
#[cfg(feature = "rayon")]
pub fn count_pairs_parallel<T: TokenType>(chunks: &[Vec<T>]) -> PairCountMap<T> {
    use rayon::prelude::*;

    chunks
        .par_iter()
        .fold(PairCountMap::default, |mut stats, chunk| {
            accumulate_pairs(&mut stats, chunk);
            stats
        })
        .reduce(PairCountMap::default, |mut lhs, rhs| {
            for (pair, count) in rhs {
                *lhs.entry(pair).or_default() += count;
            }
            lhs
        })
}
