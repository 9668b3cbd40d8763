//! # Scan-based Merge Policy

use crate::encoders::vocab_encoder::{ChunkPolicy, VocabEncoder};
use crate::types::TokenType;
use crate::vocab::TokenVocab;

/// A [`ChunkPolicy`] that re-scans for the best pair after every merge.
///
/// Each round scans all adjacent pairs and merges the one with the lowest
/// token id, leftmost first on duplicates. Simple and allocation-free, at
/// O(n) lookups per merge; see
/// [`MergeHeapPolicy`](crate::encoders::MergeHeapPolicy) for the
/// lookup-thriftier strategy.
#[derive(Debug, Clone, Default)]
pub struct MergeScanPolicy<T: TokenType> {
    marker: core::marker::PhantomData<fn() -> T>,
}

/// A [`VocabEncoder`] using the scan merge policy.
pub type MergeScanEncoder<T> = VocabEncoder<T, MergeScanPolicy<T>>;

impl<T: TokenType> ChunkPolicy<T> for MergeScanPolicy<T> {
    fn encode_chunk(
        &mut self,
        vocab: &TokenVocab<T>,
        chunk: &[u8],
        tokens: &mut Vec<T>,
    ) {
        // Work directly on the tail of the output buffer.
        let start = tokens.len();
        tokens.extend(chunk.iter().map(|&byte| T::from_u8(byte).unwrap()));

        while let Some((token, idx)) = tokens[start..]
            .windows(2)
            .enumerate()
            .filter_map(|(idx, window)| {
                vocab
                    .lookup_pair(&(window[0], window[1]))
                    .map(|token| (token, idx))
            })
            .min()
        {
            tokens[start + idx] = token;
            tokens.remove(start + idx + 1);
        }
    }
}
