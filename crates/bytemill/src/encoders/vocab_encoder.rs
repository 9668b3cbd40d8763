//! # Vocab Encoder with Pluggable Merge Policies

use std::sync::Arc;

use crate::encoders::merge_heap_encoder::MergeHeapPolicy;
use crate::encoders::token_encoder::TokenEncoder;
use crate::errors::BMResult;
use crate::splitter::ChunkSplitter;
use crate::types::TokenType;
use crate::vocab::TokenVocab;

/// The per-chunk merge strategy for [`VocabEncoder`].
///
/// A fresh policy value is created per encode call, so implementations can
/// carry scratch buffers that amortize across the chunks of one text.
pub trait ChunkPolicy<T: TokenType>: Default {
    /// Encode a single chunk's bytes, appending tokens to a target buffer.
    ///
    /// Must apply merges strictly in priority order: of all adjacent pairs
    /// present in the merge table, the one with the lowest assigned token
    /// id merges first.
    ///
    /// ## Arguments
    /// * `vocab` - The reference vocabulary.
    /// * `chunk` - The byte chunk to encode.
    /// * `tokens` - The target token buffer to append to.
    fn encode_chunk(
        &mut self,
        vocab: &TokenVocab<T>,
        chunk: &[u8],
        tokens: &mut Vec<T>,
    );
}

/// A [`TokenEncoder`] with pluggable [`ChunkPolicy`]s.
///
/// ## Style Hints
///
/// When there is no local ambiguity with other encoders, instance names
/// for implementing types should prefer `encoder`.
pub struct VocabEncoder<T, P = MergeHeapPolicy<T>>
where
    T: TokenType,
    P: ChunkPolicy<T>,
{
    vocab: Arc<TokenVocab<T>>,
    splitter: ChunkSplitter,
    marker: core::marker::PhantomData<fn() -> P>,
}

impl<T, P> Clone for VocabEncoder<T, P>
where
    T: TokenType,
    P: ChunkPolicy<T>,
{
    fn clone(&self) -> Self {
        Self {
            vocab: self.vocab.clone(),
            splitter: self.splitter.clone(),
            marker: Default::default(),
        }
    }
}

impl<T, P> VocabEncoder<T, P>
where
    T: TokenType,
    P: ChunkPolicy<T>,
{
    /// Initialize an encoder over a trained model.
    ///
    /// Compiles the model's split pattern once, up front.
    ///
    /// ## Arguments
    /// * `vocab` - The model to encode with.
    ///
    /// ## Returns
    /// A new `VocabEncoder`, or an error when the model's split pattern
    /// does not compile.
    pub fn init<V>(vocab: V) -> BMResult<Self>
    where
        V: Into<Arc<TokenVocab<T>>>,
    {
        let vocab = vocab.into();
        let splitter = ChunkSplitter::from_mode(vocab.splitter_mode().clone())?;

        Ok(Self {
            vocab,
            splitter,
            marker: Default::default(),
        })
    }

    /// Get the reference vocabulary.
    pub fn vocab(&self) -> &Arc<TokenVocab<T>> {
        &self.vocab
    }
}

impl<T, P> TokenEncoder<T> for VocabEncoder<T, P>
where
    T: TokenType,
    P: ChunkPolicy<T>,
{
    fn splitter(&self) -> &ChunkSplitter {
        &self.splitter
    }

    fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) {
        let mut policy: P = Default::default();
        self.splitter.for_each_chunk(text, &mut |chunk| {
            policy.encode_chunk(&self.vocab, chunk.as_bytes(), tokens);
        });
    }
}
