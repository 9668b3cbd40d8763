//! # Pair Merge ``{ (T, T) -> T }`` Vocabulary

use crate::errors::{BMResult, BytemillError};
use crate::splitter::SplitterMode;
use crate::types::{Pair, TokenType, hash_map_with_capacity};
use crate::vocab::validators::{U8_SIZE, try_vocab_size};
use crate::vocab::vocab_types::PairTokenMap;

/// The learned merge vocabulary; the immutable output of training.
///
/// Ids `[0, 255]` are the byte tokens. The i-th learned merge (0-based)
/// owns id `256 + i`, so the merge list order IS the merge priority order,
/// and lower ids always mean higher priority.
#[derive(Debug, Clone, Default)]
pub struct PairVocab<T: TokenType> {
    /// Learned merges in mint order; index `i` merged to token `256 + i`.
    merges: Vec<Pair<T>>,

    /// Map of `{ (T, T) -> T }` for rank lookup.
    pair_map: PairTokenMap<T>,

    /// The chunking mode the vocabulary was trained with.
    splitter_mode: SplitterMode,
}

impl<T: TokenType> PairVocab<T> {
    /// Build a vocabulary from a merge list in mint order.
    ///
    /// ## Arguments
    /// * `merges` - The learned merges; index `i` owns token `256 + i`.
    /// * `splitter_mode` - The chunking mode the merges were learned under.
    ///
    /// ## Returns
    /// A new `PairVocab`; or an error if the implied vocab size does not fit
    /// the token type, a merge references a token that did not exist yet,
    /// or the same pair appears twice.
    pub fn from_merges(
        merges: Vec<Pair<T>>,
        splitter_mode: SplitterMode,
    ) -> BMResult<Self> {
        try_vocab_size::<T>(U8_SIZE + merges.len())?;

        let mut pair_map: PairTokenMap<T> = hash_map_with_capacity(merges.len());
        for (index, &pair) in merges.iter().enumerate() {
            let token = T::from_usize(U8_SIZE + index).unwrap();
            for parent in [pair.0, pair.1] {
                if parent.to_usize().unwrap() >= U8_SIZE + index {
                    return Err(BytemillError::VocabConflict(format!(
                        "merge {pair:?} -> {token} references unminted token {parent}"
                    )));
                }
            }
            if pair_map.insert(pair, token).is_some() {
                return Err(BytemillError::VocabConflict(format!(
                    "pair {pair:?} merged twice"
                )));
            }
        }

        Ok(Self {
            merges,
            pair_map,
            splitter_mode,
        })
    }

    /// Get the learned merges in mint order.
    pub fn merges(&self) -> &[Pair<T>] {
        &self.merges
    }

    /// Get the map of pairs.
    ///
    /// ## Returns
    /// A reference to the internal `PairTokenMap`.
    pub fn pair_map(&self) -> &PairTokenMap<T> {
        &self.pair_map
    }

    /// Get the chunking mode the vocabulary was trained with.
    pub fn splitter_mode(&self) -> &SplitterMode {
        &self.splitter_mode
    }

    /// Looks up the merged token for a pair.
    ///
    /// ## Arguments
    /// * `pair` - The pair of tokens to look up.
    ///
    /// ## Returns
    /// An `Option` containing the token the pair merges to, if the pair
    /// was learned.
    pub fn lookup_pair(
        &self,
        pair: &Pair<T>,
    ) -> Option<T> {
        self.pair_map.get(pair).copied()
    }

    /// The number of learned merges.
    pub fn num_merges(&self) -> usize {
        self.merges.len()
    }

    /// The total vocabulary size (bytes + learned merges).
    pub fn vocab_size(&self) -> usize {
        U8_SIZE + self.merges.len()
    }

    /// The largest valid token id.
    pub fn max_token(&self) -> T {
        T::from_usize(self.vocab_size() - 1).unwrap()
    }

    /// Is this token id in the vocabulary?
    pub fn contains_token(
        &self,
        token: T,
    ) -> bool {
        token.to_usize().is_some_and(|t| t < self.vocab_size())
    }

    /// Iterate `(pair, token)` merge entries in mint order.
    pub fn merge_entries(&self) -> impl Iterator<Item = (Pair<T>, T)> + '_ {
        self.merges
            .iter()
            .enumerate()
            .map(|(index, &pair)| (pair, T::from_usize(U8_SIZE + index).unwrap()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_vocab() {
        type T = u32;

        let vocab: PairVocab<T> = Default::default();
        assert_eq!(vocab.num_merges(), 0);
        assert_eq!(vocab.vocab_size(), 256);
        assert_eq!(vocab.max_token(), 255);
        assert_eq!(vocab.lookup_pair(&(1, 2)), None);
        assert!(vocab.contains_token(255));
        assert!(!vocab.contains_token(256));
    }

    #[test]
    fn test_from_merges_mints_in_order() {
        type T = u32;

        let vocab =
            PairVocab::<T>::from_merges(vec![(5, 6), (256, 7), (256, 257)], SplitterMode::Raw)
                .unwrap();

        assert_eq!(vocab.num_merges(), 3);
        assert_eq!(vocab.vocab_size(), 259);
        assert_eq!(vocab.max_token(), 258);

        assert_eq!(
            vocab.merge_entries().collect::<Vec<_>>(),
            vec![((5, 6), 256), ((256, 7), 257), ((256, 257), 258)],
        );

        assert_eq!(vocab.lookup_pair(&(5, 6)), Some(256));
        assert_eq!(vocab.lookup_pair(&(256, 7)), Some(257));
        assert_eq!(vocab.lookup_pair(&(6, 5)), None);
    }

    #[test]
    fn test_from_merges_rejects_forward_references() {
        type T = u32;

        // Token 257 does not exist when merge 0 is minted.
        let result = PairVocab::<T>::from_merges(vec![(5, 257)], SplitterMode::Raw);
        assert!(matches!(result, Err(BytemillError::VocabConflict(_))));
    }

    #[test]
    fn test_from_merges_rejects_duplicates() {
        type T = u32;

        let result = PairVocab::<T>::from_merges(vec![(5, 6), (5, 6)], SplitterMode::Raw);
        assert!(matches!(result, Err(BytemillError::VocabConflict(_))));
    }

    #[test]
    fn test_from_merges_respects_token_capacity() {
        let result = PairVocab::<u8>::from_merges(vec![(5, 6)], SplitterMode::Raw);
        assert!(matches!(
            result,
            Err(BytemillError::VocabSizeOverflow { size: 257 })
        ));
    }
}
