//! # Token Encoder Trait

use crate::splitter::ChunkSplitter;
use crate::types::TokenType;
use crate::vocab::size_hints::EXPECTED_BYTES_PER_TOKEN;

/// A trait for token encoders.
///
/// Encoding never fails: a trained model covers every byte, so any text
/// (including text sharing nothing with the training corpus) encodes to
/// byte tokens at worst.
pub trait TokenEncoder<T: TokenType>: Send + Sync {
    /// Return the attached chunk splitter.
    fn splitter(&self) -> &ChunkSplitter;

    /// Encode text, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    /// * `tokens` - The target token buffer to append to.
    fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    );

    /// Encode text into tokens.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// A vector of tokens.
    fn encode(
        &self,
        text: &str,
    ) -> Vec<T> {
        let capacity = text.len() as f32 / (EXPECTED_BYTES_PER_TOKEN * 0.5);
        let mut tokens = Vec::with_capacity(capacity as usize);

        self.encode_append(text, &mut tokens);
        tokens
    }

    /// Encode a batch of texts into tokens.
    ///
    /// ## Arguments
    /// * `batch` - A slice of strings to encode.
    ///
    /// ## Returns
    /// A vector of token vectors, one per input.
    fn encode_batch(
        &self,
        batch: &[String],
    ) -> Vec<Vec<T>> {
        batch.iter().map(|text| self.encode(text)).collect()
    }
}
