//! # Unified Token Vocabulary
//!
//! The combined trained model: merge table plus expanded byte spans.

use crate::splitter::SplitterMode;
use crate::types::{Pair, TokenType};
use crate::vocab::{PairVocab, SpanVocab};

/// The trained tokenizer model.
///
/// Combines the merge table ([`PairVocab`], the encode direction) with the
/// expanded byte spans ([`SpanVocab`], the decode direction). Immutable
/// once built; encoders and decoders share it behind an
/// [`Arc`](std::sync::Arc).
#[derive(Debug, Clone, Default)]
pub struct TokenVocab<T: TokenType> {
    pair_vocab: PairVocab<T>,
    span_vocab: SpanVocab<T>,
}

impl<T: TokenType> From<PairVocab<T>> for TokenVocab<T> {
    fn from(pair_vocab: PairVocab<T>) -> Self {
        Self::from_pair_vocab(pair_vocab)
    }
}

impl<T: TokenType> TokenVocab<T> {
    /// Build the unified model from a merge table.
    ///
    /// Expands the merge table into byte spans; the expansion exists for
    /// every learned token because merge tables only reference already
    /// minted tokens.
    pub fn from_pair_vocab(pair_vocab: PairVocab<T>) -> Self {
        let span_vocab = SpanVocab::from_pair_vocab(&pair_vocab);
        Self {
            pair_vocab,
            span_vocab,
        }
    }

    /// Get the merge table vocabulary.
    pub fn pair_vocab(&self) -> &PairVocab<T> {
        &self.pair_vocab
    }

    /// Get the byte span vocabulary.
    pub fn span_vocab(&self) -> &SpanVocab<T> {
        &self.span_vocab
    }

    /// Get the chunking mode the model was trained with.
    pub fn splitter_mode(&self) -> &SplitterMode {
        self.pair_vocab.splitter_mode()
    }

    /// The learned merges, in mint order.
    pub fn merges(&self) -> &[Pair<T>] {
        self.pair_vocab.merges()
    }

    /// Looks up the merged token for a pair.
    pub fn lookup_pair(
        &self,
        pair: &Pair<T>,
    ) -> Option<T> {
        self.pair_vocab.lookup_pair(pair)
    }

    /// The byte span a token expands to, `None` outside the vocabulary.
    pub fn get_span(
        &self,
        token: T,
    ) -> Option<&[u8]> {
        self.span_vocab.get_span(token)
    }

    /// The number of learned merges.
    pub fn num_merges(&self) -> usize {
        self.pair_vocab.num_merges()
    }

    /// The total vocabulary size (bytes + learned merges).
    pub fn vocab_size(&self) -> usize {
        self.pair_vocab.vocab_size()
    }

    /// The largest valid token id.
    pub fn max_token(&self) -> T {
        self.pair_vocab.max_token()
    }

    /// Is this token id in the vocabulary?
    pub fn contains_token(
        &self,
        token: T,
    ) -> bool {
        self.pair_vocab.contains_token(token)
    }
}
