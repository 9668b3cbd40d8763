//! # Token Chunk Buffer
//!
//! A mutable token sequence for one chunk, with in-place pair merging.

use crate::types::{Pair, TokenType};

/// Token sequence buffer for a single chunk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenChunkBuf<T: TokenType> {
    tokens: Vec<T>,
}

impl<T: TokenType> From<Vec<T>> for TokenChunkBuf<T> {
    fn from(tokens: Vec<T>) -> Self {
        Self { tokens }
    }
}

impl<T: TokenType> TokenChunkBuf<T> {
    /// A created pair, for merge callbacks.
    pub const INC: i32 = 1;

    /// A destroyed pair, for merge callbacks.
    pub const DEC: i32 = -1;

    /// Build a buffer of byte tokens from a byte slice.
    ///
    /// Every byte maps 1:1 to the token id of its value.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            tokens: bytes.iter().map(|&b| T::from_u8(b).unwrap()).collect(),
        }
    }

    /// Build a buffer of byte tokens from text.
    pub fn from_text<S: AsRef<str>>(text: S) -> Self {
        Self::from_bytes(text.as_ref().as_bytes())
    }

    /// The current token sequence.
    pub fn as_slice(&self) -> &[T] {
        &self.tokens
    }

    /// Unwrap into the token vector.
    pub fn into_tokens(self) -> Vec<T> {
        self.tokens
    }

    /// The number of tokens in the buffer.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Replace every non-overlapping occurrence of `pair` with `replacement`.
    ///
    /// One left-to-right pass; after a replacement the scan resumes after
    /// the written token, so `[5, 5, 5]` with pair `(5, 5)` becomes
    /// `[99, 5]`, not `[99, 99]`.
    ///
    /// ## Arguments
    /// * `pair` - The pair to replace.
    /// * `replacement` - The token to replace it with.
    pub fn merge_pair(
        &mut self,
        pair: Pair<T>,
        replacement: T,
    ) {
        self.merge_pair_cb(pair, replacement, &mut |_, _| {});
    }

    /// [`Self::merge_pair`], reporting pair count deltas to a callback.
    ///
    /// For each replacement, the callback observes the destroyed pairs
    /// (the merged pair itself, and its old left/right neighbor pairs) with
    /// [`Self::DEC`], and the created neighbor pairs with [`Self::INC`].
    /// Summing the deltas onto a count map keeps it exactly equal to a
    /// full recount of the rewritten sequence.
    ///
    /// ## Arguments
    /// * `pair` - The pair to replace.
    /// * `replacement` - The token to replace it with.
    /// * `on_change` - The delta callback, called as `(pair, delta)`.
    pub fn merge_pair_cb<F>(
        &mut self,
        pair: Pair<T>,
        replacement: T,
        on_change: &mut F,
    ) where
        F: FnMut(Pair<T>, i32),
    {
        let (a, b) = pair;
        let n = self.tokens.len();
        if n < 2 {
            return;
        }

        let mut new_tokens: Vec<T> = Vec::with_capacity(n);
        let mut i = 0;
        while i < n {
            let current = self.tokens[i];
            if i + 1 < n && pair == (current, self.tokens[i + 1]) {
                if let Some(&prev) = new_tokens.last() {
                    on_change((prev, a), Self::DEC);
                    on_change((prev, replacement), Self::INC);
                }
                on_change(pair, Self::DEC);
                if i + 2 < n {
                    let next = self.tokens[i + 2];
                    on_change((b, next), Self::DEC);
                    on_change((replacement, next), Self::INC);
                }
                new_tokens.push(replacement);
                i += 2;
            } else {
                new_tokens.push(current);
                i += 1;
            }
        }
        self.tokens = new_tokens;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{PairCountMap, count_pairs};

    #[test]
    fn test_from_bytes_is_identity() {
        type T = u32;

        let buf = TokenChunkBuf::<T>::from_text("abc");
        assert_eq!(buf.as_slice(), &['a' as u32, 'b' as u32, 'c' as u32]);
        assert_eq!(buf.len(), 3);

        let buf = TokenChunkBuf::<T>::from_bytes(&[0, 128, 255]);
        assert_eq!(buf.as_slice(), &[0, 128, 255]);
    }

    #[test]
    fn test_merge_pair_skips_overlaps() {
        type T = u32;

        let mut buf = TokenChunkBuf::<T>::from(vec![5, 5, 5]);
        buf.merge_pair((5, 5), 99);
        assert_eq!(buf.as_slice(), &[99, 5]);
    }

    #[test]
    fn test_merge_pair_edge_cases() {
        type T = u32;

        let mut buf = TokenChunkBuf::<T>::from(vec![]);
        buf.merge_pair((1, 2), 99);
        assert!(buf.as_slice().is_empty());

        let mut buf = TokenChunkBuf::<T>::from(vec![1]);
        buf.merge_pair((1, 2), 99);
        assert_eq!(buf.as_slice(), &[1]);

        let mut buf = TokenChunkBuf::<T>::from(vec![1, 3, 2]);
        buf.merge_pair((1, 2), 99);
        assert_eq!(buf.as_slice(), &[1, 3, 2]);
    }

    #[test]
    fn test_merge_pair_multiple_occurrences() {
        type T = u32;

        let mut buf = TokenChunkBuf::<T>::from(vec![1, 2, 7, 1, 2]);
        buf.merge_pair((1, 2), 300);
        assert_eq!(buf.as_slice(), &[300, 7, 300]);
    }

    /// Applying the callback deltas to the old counts must reproduce
    /// a fresh recount of the rewritten sequence.
    fn check_delta_exactness(tokens: Vec<u32>, pair: (u32, u32), replacement: u32) {
        let mut buf = TokenChunkBuf::from(tokens);
        let mut stats: PairCountMap<u32> = count_pairs(buf.as_slice());

        buf.merge_pair_cb(pair, replacement, &mut |changed, delta| {
            let entry = stats.entry(changed).or_default();
            if delta < 0 {
                *entry -= 1;
            } else {
                *entry += 1;
            }
        });

        stats.retain(|_, &mut count| count > 0);

        let mut expected = count_pairs(buf.as_slice());
        expected.retain(|_, &mut count| count > 0);
        assert_eq!(stats, expected);
    }

    #[test]
    fn test_merge_deltas_match_recount() {
        check_delta_exactness(vec![1, 2, 3, 1, 2], (1, 2), 300);
        check_delta_exactness(vec![1, 2, 1, 2], (1, 2), 300);
        check_delta_exactness(vec![5, 5, 5], (5, 5), 300);
        check_delta_exactness(vec![5, 5, 5, 5], (5, 5), 300);
        check_delta_exactness(vec![5, 5, 5, 5, 5], (5, 5), 300);
        check_delta_exactness(vec![9, 1, 2, 9], (1, 2), 300);
        check_delta_exactness(vec![1, 2], (1, 2), 300);
    }
}
