//! # Token Decoder Trait

use crate::errors::BMResult;
use crate::types::TokenType;

/// Trait for token decoders.
///
/// Decoding fails only on token ids outside the vocabulary
/// ([`crate::errors::BytemillError::UnknownToken`]). Invalid UTF-8 in the
/// decoded bytes is never an error: the string paths substitute U+FFFD.
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// Decodes tokens into their raw bytes.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    ///
    /// ## Returns
    /// The concatenated byte spans of the tokens.
    fn try_decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> BMResult<Vec<u8>>;

    /// Decodes a batch of tokens into raw bytes.
    ///
    /// ## Arguments
    /// * `batch` - A batch of token slices.
    ///
    /// ## Returns
    /// One byte vector per input.
    fn try_decode_batch_to_bytes(
        &self,
        batch: &[&[T]],
    ) -> BMResult<Vec<Vec<u8>>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_bytes(tokens))
            .collect()
    }

    /// Decodes tokens into a string.
    ///
    /// UTF-8 lossy decoding is used to handle invalid UTF-8 sequences.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    ///
    /// ## Returns
    /// The decoded text.
    fn try_decode_to_string(
        &self,
        tokens: &[T],
    ) -> BMResult<String> {
        self.try_decode_to_bytes(tokens)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Decodes a batch of tokens into strings.
    ///
    /// UTF-8 lossy decoding is used to handle invalid UTF-8 sequences.
    ///
    /// ## Arguments
    /// * `batch` - A batch of token slices.
    ///
    /// ## Returns
    /// One string per input.
    fn try_decode_batch_to_strings(
        &self,
        batch: &[&[T]],
    ) -> BMResult<Vec<String>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_string(tokens))
            .collect()
    }
}
