//! # Parallel Decoder

use crate::decoders::TokenDecoder;
use crate::errors::BMResult;
use crate::types::TokenType;
use std::marker::PhantomData;

/// Batch-level parallel decoder wrapper.
///
/// Fans the batch decode entry points out over the ``rayon`` thread
/// pool. Any [`UnknownToken`](crate::errors::BytemillError::UnknownToken)
/// error in a batch member fails the whole batch, exactly as in the
/// sequential defaults.
#[derive(Clone)]
pub struct ParallelRayonDecoder<T: TokenType, D: TokenDecoder<T>> {
    /// Wrapped decoder.
    pub inner: D,

    marker: PhantomData<T>,
}

impl<T, D> ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    /// Wrap a decoder.
    ///
    /// ## Arguments
    /// * `inner` - the decoder to parallelize.
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T, D> TokenDecoder<T> for ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    fn try_decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> BMResult<Vec<u8>> {
        self.inner.try_decode_to_bytes(tokens)
    }

    fn try_decode_batch_to_bytes(
        &self,
        batch: &[&[T]],
    ) -> BMResult<Vec<Vec<u8>>> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|tokens| self.inner.try_decode_to_bytes(tokens))
            .collect()
    }

    fn try_decode_batch_to_strings(
        &self,
        batch: &[&[T]],
    ) -> BMResult<Vec<String>> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|tokens| self.inner.try_decode_to_string(tokens))
            .collect()
    }
}
