//! # Token Span ``{ T -> Vec<u8> }`` Expansion Table

use core::marker::PhantomData;

use crate::types::TokenType;
use crate::vocab::pair_vocab::PairVocab;

/// Dense ``{ token -> byte span }`` expansion table.
///
/// Token ids are contiguous (`0..vocab_size`), so the table is a plain
/// vector indexed by id: ids `[0, 255]` hold their single byte, and each
/// learned token holds the concatenation of its parents' spans.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanVocab<T: TokenType> {
    spans: Vec<Vec<u8>>,

    marker: PhantomData<fn() -> T>,
}

impl<T: TokenType> Default for SpanVocab<T> {
    fn default() -> Self {
        Self {
            spans: (0..=u8::MAX).map(|b| vec![b]).collect(),
            marker: PhantomData,
        }
    }
}

impl<T: TokenType> SpanVocab<T> {
    /// Expand a [`PairVocab`] into its span table.
    ///
    /// Merges expand in mint order, so parent spans always exist when a
    /// learned token's span is built.
    ///
    /// ## Arguments
    /// * `pair_vocab` - The merge vocabulary to expand.
    ///
    /// ## Returns
    /// A new `SpanVocab` covering every token of `pair_vocab`.
    pub fn from_pair_vocab(pair_vocab: &PairVocab<T>) -> Self {
        let mut vocab = Self::default();
        vocab.spans.reserve(pair_vocab.num_merges());

        for (pair, _token) in pair_vocab.merge_entries() {
            let (a, b) = pair;
            let mut span = vocab.spans[a.to_usize().unwrap()].clone();
            span.extend_from_slice(&vocab.spans[b.to_usize().unwrap()]);
            vocab.spans.push(span);
        }

        vocab
    }

    /// The number of tokens in the vocabulary.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Return the byte span for a token, if the token is in the vocabulary.
    ///
    /// ## Arguments
    /// * `token` - The token id to look up.
    ///
    /// ## Returns
    /// An `Option` containing the span slice.
    pub fn get_span(
        &self,
        token: T,
    ) -> Option<&[u8]> {
        token
            .to_usize()
            .and_then(|idx| self.spans.get(idx))
            .map(|span| span.as_slice())
    }

    /// Iterate over `(token, span)` entries in id order.
    pub fn span_entries(&self) -> impl Iterator<Item = (T, &[u8])> + '_ {
        self.spans
            .iter()
            .enumerate()
            .map(|(idx, span)| (T::from_usize(idx).unwrap(), span.as_slice()))
    }
}
