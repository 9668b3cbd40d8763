//! # Parallel Encoder

use crate::encoders::TokenEncoder;
use crate::splitter::ChunkSplitter;
use crate::types::TokenType;
use std::marker::PhantomData;

/// Batch-level parallel encoder wrapper.
///
/// Fans [`TokenEncoder::encode_batch`] out over the ``rayon`` thread
/// pool. Single-text calls delegate to the wrapped encoder unchanged,
/// so parallel and sequential encodings are identical.
#[derive(Clone)]
pub struct ParallelRayonEncoder<T: TokenType, E: TokenEncoder<T>> {
    /// Inner encoder.
    pub inner: E,

    marker: PhantomData<T>,
}

impl<T, E> ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TokenEncoder<T>,
{
    /// Wrap an encoder.
    ///
    /// ## Arguments
    /// * `inner` - the encoder to parallelize.
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T, E> TokenEncoder<T> for ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TokenEncoder<T>,
{
    fn splitter(&self) -> &ChunkSplitter {
        self.inner.splitter()
    }

    fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) {
        self.inner.encode_append(text, tokens)
    }

    fn encode_batch(
        &self,
        batch: &[String],
    ) -> Vec<Vec<T>> {
        use rayon::prelude::*;

        batch.par_iter().map(|text| self.inner.encode(text)).collect()
    }
}
