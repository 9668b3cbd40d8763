//! # Pair Chunk Index
//!
//! Weighted pair counts plus a reverse index from pairs to the chunks
//! containing them.

use crate::stats::{PairCountMap, accumulate_pairs_weighted};
use crate::training::chunk_buffer::TokenChunkBuf;
use crate::types::{BMHashMap, BMHashSet, Pair, TokenType};

/// Pair occurrence counts and a pair to chunk reverse index.
///
/// `pair_counts` holds the occurrence count of each pair summed over all
/// chunks, weighted by chunk multiplicity. `pair_chunks` maps each pair to
/// the indices of chunks it has occurred in; entries are not pruned as
/// counts drop, so a chunk listed for a pair may no longer contain it and
/// readers must re-check.
#[derive(Debug, Clone, Default)]
pub struct PairChunkIndex<T: TokenType> {
    /// Weighted pair occurrence counts.
    pub pair_counts: PairCountMap<T>,

    /// Chunk indices where each pair has occurred.
    pub pair_chunks: BMHashMap<Pair<T>, BMHashSet<usize>>,
}

impl<T: TokenType> PairChunkIndex<T> {
    /// Build the index over a chunk table.
    ///
    /// ## Arguments
    /// * `chunks` - The token chunk buffers.
    /// * `counts` - The multiplicity of each chunk, parallel to `chunks`.
    pub fn from_chunks(
        chunks: &[TokenChunkBuf<T>],
        counts: &[u64],
    ) -> Self {
        let mut index = Self::default();
        for (chunk_idx, (chunk, &count)) in chunks.iter().zip(counts).enumerate() {
            accumulate_pairs_weighted(&mut index.pair_counts, chunk.as_slice(), count);
            for window in chunk.as_slice().windows(2) {
                index
                    .pair_chunks
                    .entry((window[0], window[1]))
                    .or_default()
                    .insert(chunk_idx);
            }
        }
        index
    }

    /// The current count for a pair, 0 when absent.
    pub fn count(
        &self,
        pair: &Pair<T>,
    ) -> u64 {
        self.pair_counts.get(pair).copied().unwrap_or(0)
    }
}
