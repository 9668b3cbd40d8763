//! # Combined Tokenizer

use crate::decoders::{TokenDecoder, VocabDecoder};
use crate::encoders::{MergeHeapEncoder, TokenEncoder};
use crate::errors::BMResult;
use crate::splitter::ChunkSplitter;
use crate::types::TokenType;
use crate::vocab::TokenVocab;
use std::sync::Arc;

/// Combined tokenizer facade.
///
/// Combines:
///  * a shared [`TokenVocab`],
///  * a [`TokenEncoder`], and
///  * a [`TokenDecoder`].
///
/// The facade implements both traits by delegation, so it can be passed
/// anywhere either half is expected.
#[derive(Clone)]
pub struct Tokenizer<T: TokenType> {
    vocab: Arc<TokenVocab<T>>,
    encoder: Arc<dyn TokenEncoder<T>>,
    decoder: Arc<dyn TokenDecoder<T>>,
}

impl<T: TokenType> Tokenizer<T> {
    /// Create a new tokenizer from explicit parts.
    pub fn new(
        vocab: Arc<TokenVocab<T>>,
        encoder: Arc<dyn TokenEncoder<T>>,
        decoder: Arc<dyn TokenDecoder<T>>,
    ) -> Self {
        Self {
            vocab,
            encoder,
            decoder,
        }
    }

    /// Build a tokenizer from a vocabulary, with the default
    /// [`MergeHeapEncoder`] / [`VocabDecoder`] pairing.
    ///
    /// ## Arguments
    /// * `vocab` - the vocabulary; anything convertible to a shared ref.
    ///
    /// ## Returns
    /// A tokenizer, or an error if the vocab's split pattern fails to compile.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use bytemill::{TokenDecoder, TokenEncoder, TokenVocab, Tokenizer};
    ///
    /// let tokenizer = Tokenizer::from_vocab(TokenVocab::<u32>::default())?;
    /// let tokens = tokenizer.encode("bytes");
    /// assert_eq!(tokenizer.try_decode_to_string(&tokens)?, "bytes");
    /// # Ok::<(), bytemill::BytemillError>(())
    /// ```
    pub fn from_vocab<V>(vocab: V) -> BMResult<Self>
    where
        V: Into<Arc<TokenVocab<T>>>,
    {
        let vocab: Arc<TokenVocab<T>> = vocab.into();
        let encoder = MergeHeapEncoder::init(vocab.clone())?;
        let decoder = VocabDecoder::init(vocab.clone());
        Ok(Self::new(vocab, Arc::new(encoder), Arc::new(decoder)))
    }

    /// Get the underlying vocabulary.
    pub fn vocab(&self) -> &Arc<TokenVocab<T>> {
        &self.vocab
    }

    /// Get the underlying encoder.
    pub fn encoder(&self) -> &Arc<dyn TokenEncoder<T>> {
        &self.encoder
    }

    /// Get the underlying decoder.
    pub fn decoder(&self) -> &Arc<dyn TokenDecoder<T>> {
        &self.decoder
    }
}

impl<T: TokenType> TokenEncoder<T> for Tokenizer<T> {
    fn splitter(&self) -> &ChunkSplitter {
        self.encoder.splitter()
    }

    fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) {
        self.encoder.encode_append(text, tokens)
    }

    fn encode(
        &self,
        text: &str,
    ) -> Vec<T> {
        self.encoder.encode(text)
    }

    fn encode_batch(
        &self,
        batch: &[String],
    ) -> Vec<Vec<T>> {
        self.encoder.encode_batch(batch)
    }
}

impl<T: TokenType> TokenDecoder<T> for Tokenizer<T> {
    fn try_decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> BMResult<Vec<u8>> {
        self.decoder.try_decode_to_bytes(tokens)
    }

    fn try_decode_batch_to_bytes(
        &self,
        batch: &[&[T]],
    ) -> BMResult<Vec<Vec<u8>>> {
        self.decoder.try_decode_batch_to_bytes(batch)
    }

    fn try_decode_to_string(
        &self,
        tokens: &[T],
    ) -> BMResult<String> {
        self.decoder.try_decode_to_string(tokens)
    }

    fn try_decode_batch_to_strings(
        &self,
        batch: &[&[T]],
    ) -> BMResult<Vec<String>> {
        self.decoder.try_decode_batch_to_strings(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoders::test_utils::common_test_vocab;

    #[test]
    fn test_tokenizer_round_trip() {
        type T = u32;

        let tokenizer = Tokenizer::from_vocab(common_test_vocab::<T>()).unwrap();

        assert_eq!(tokenizer.encode("hello"), vec![259]);

        for sample in ["hello world", "oh hell", "entirely unrelated"] {
            let tokens = tokenizer.encode(sample);
            assert_eq!(tokenizer.try_decode_to_string(&tokens).unwrap(), sample);
        }
    }

    #[test]
    fn test_tokenizer_exposes_parts() {
        type T = u16;

        let vocab = common_test_vocab::<T>();
        let num_merges = vocab.num_merges();

        let tokenizer = Tokenizer::from_vocab(vocab).unwrap();

        assert_eq!(tokenizer.vocab().num_merges(), num_merges);
        assert_eq!(
            tokenizer.encoder().encode("hello"),
            tokenizer.encode("hello")
        );
        assert!(tokenizer.decoder().try_decode_to_bytes(&[9999]).is_err());
    }

    #[test]
    fn test_tokenizer_is_clone_and_shared() {
        type T = u32;

        let tokenizer = Tokenizer::from_vocab(common_test_vocab::<T>()).unwrap();
        let clone = tokenizer.clone();

        assert_eq!(clone.encode("hell"), tokenizer.encode("hell"));
        assert!(Arc::ptr_eq(tokenizer.vocab(), clone.vocab()));
    }
}
