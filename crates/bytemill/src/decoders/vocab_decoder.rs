//! # Vocab-backed Token Decoder

use std::sync::Arc;

use crate::decoders::token_decoder::TokenDecoder;
use crate::errors::{BMResult, BytemillError};
use crate::types::TokenType;
use crate::vocab::TokenVocab;
use crate::vocab::size_hints::EXPECTED_BYTES_PER_TOKEN;

/// A [`TokenDecoder`] over a trained model's span table.
///
/// ## Style Hints
///
/// When there is no local ambiguity, instance names should prefer
/// `decoder`.
#[derive(Debug, Clone)]
pub struct VocabDecoder<T: TokenType> {
    vocab: Arc<TokenVocab<T>>,
}

impl<T: TokenType> VocabDecoder<T> {
    /// Build a decoder over a trained model.
    ///
    /// ## Arguments
    /// * `vocab` - The model to decode with.
    pub fn init<V>(vocab: V) -> Self
    where
        V: Into<Arc<TokenVocab<T>>>,
    {
        Self {
            vocab: vocab.into(),
        }
    }

    /// Get the reference vocabulary.
    pub fn vocab(&self) -> &Arc<TokenVocab<T>> {
        &self.vocab
    }
}

impl<T: TokenType> TokenDecoder<T> for VocabDecoder<T> {
    fn try_decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> BMResult<Vec<u8>> {
        let capacity = (tokens.len() as f32 * EXPECTED_BYTES_PER_TOKEN) as usize;
        let mut bytes = Vec::with_capacity(capacity);

        for &token in tokens {
            match self.vocab.get_span(token) {
                Some(span) => bytes.extend_from_slice(span),
                None => {
                    return Err(BytemillError::UnknownToken {
                        token: token.to_u64().unwrap(),
                    });
                }
            }
        }
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitter::SplitterMode;
    use crate::vocab::PairVocab;

    fn test_vocab<T: TokenType>() -> TokenVocab<T> {
        let t = |byte: u8| T::from_u8(byte).unwrap();

        // 256 = "at", 257 = "ate"
        let merges = vec![
            (t(b'a'), t(b't')),
            (T::from_usize(256).unwrap(), t(b'e')),
        ];
        PairVocab::from_merges(merges, SplitterMode::Raw)
            .unwrap()
            .into()
    }

    #[test]
    fn test_decode_bytes_and_strings() {
        type T = u32;

        let decoder = VocabDecoder::init(test_vocab::<T>());

        assert_eq!(decoder.try_decode_to_string(&[]).unwrap(), "");
        assert_eq!(
            decoder.try_decode_to_string(&[104, 105]).unwrap(),
            "hi",
        );
        assert_eq!(
            decoder.try_decode_to_string(&[256, 101, 257]).unwrap(),
            "ateate",
        );
        assert_eq!(
            decoder.try_decode_to_bytes(&[257]).unwrap(),
            "ate".as_bytes(),
        );
    }

    #[test]
    fn test_unknown_token_is_an_error() {
        type T = u32;

        let decoder = VocabDecoder::init(test_vocab::<T>());

        assert!(matches!(
            decoder.try_decode_to_bytes(&[97, 999]),
            Err(BytemillError::UnknownToken { token: 999 })
        ));
    }

    #[test]
    fn test_invalid_utf8_decodes_lossily() {
        type T = u32;

        let decoder = VocabDecoder::init(test_vocab::<T>());

        // Bytes 0xFF 0xFE are never valid UTF-8.
        assert_eq!(
            decoder.try_decode_to_string(&[0xFF, 0xFE]).unwrap(),
            "\u{FFFD}\u{FFFD}",
        );

        // The raw byte path keeps them untouched.
        assert_eq!(
            decoder.try_decode_to_bytes(&[0xFF, 0xFE]).unwrap(),
            vec![0xFF, 0xFE],
        );
    }

    #[test]
    fn test_decode_batch() {
        type T = u16;

        let decoder = VocabDecoder::init(test_vocab::<T>());

        let batch: Vec<&[T]> = vec![&[256], &[257, 257]];
        assert_eq!(
            decoder.try_decode_batch_to_strings(&batch).unwrap(),
            vec!["at", "ateate"],
        );
    }
}
