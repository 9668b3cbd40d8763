//! # Encoder Test Utilities

use std::sync::Arc;

use crate::decoders::{TokenDecoder, VocabDecoder};
use crate::encoders::token_encoder::TokenEncoder;
use crate::encoders::vocab_encoder::{ChunkPolicy, VocabEncoder};
use crate::splitter::SplitterMode;
use crate::types::TokenType;
use crate::vocab::{PairVocab, TokenVocab};

fn static_is_send_sync_check<V: Send + Sync>(_: &V) {}

/// Build the common "hello" vocabulary for encoder tests.
pub fn common_test_vocab<T: TokenType>() -> TokenVocab<T> {
    let t = |byte: u8| T::from_u8(byte).unwrap();
    let m = |id: usize| T::from_usize(id).unwrap();

    let merges = vec![
        (t(b'l'), t(b'l')), // 256 "ll"
        (t(b'h'), t(b'e')), // 257 "he"
        (m(257), m(256)),   // 258 "hell"
        (m(258), t(b'o')),  // 259 "hello"
        (t(b' '), t(b'w')), // 260 " w"
    ];

    PairVocab::from_merges(merges, SplitterMode::Raw)
        .unwrap()
        .into()
}

/// Common [`TokenEncoder`] behavior, instantiated per merge policy.
pub fn common_encoder_tests<T: TokenType, P: ChunkPolicy<T>>() {
    let m = |id: usize| T::from_usize(id).unwrap();

    let vocab: Arc<TokenVocab<T>> = Arc::new(common_test_vocab());
    let encoder = VocabEncoder::<T, P>::init(vocab.clone()).unwrap();
    static_is_send_sync_check(&encoder);

    let decoder = VocabDecoder::init(vocab);
    static_is_send_sync_check(&decoder);

    // Byte passthrough and empties.
    assert!(encoder.encode("").is_empty());
    assert_eq!(encoder.encode("h"), vec![m(104)]);
    assert_eq!(encoder.encode("zq"), vec![m(122), m(113)]);

    // Merges apply transitively, in token id order.
    assert_eq!(encoder.encode("hello"), vec![m(259)]);
    assert_eq!(encoder.encode("hell"), vec![m(258)]);
    assert_eq!(
        encoder.encode("hello world"),
        vec![m(259), m(260), m(111), m(114), m(108), m(100)],
    );

    // Appending onto a dirty buffer leaves the prefix alone.
    let mut tokens = vec![m(1), m(2)];
    encoder.encode_append("hello", &mut tokens);
    assert_eq!(tokens, vec![m(1), m(2), m(259)]);

    // Round trips.
    let samples = ["hello world", "oh hell", "unrelated text entirely"];
    for sample in samples {
        let tokens = encoder.encode(sample);
        assert_eq!(decoder.try_decode_to_string(&tokens).unwrap(), sample);
    }

    // Batch interfaces.
    let batch: Vec<String> = samples.iter().map(|s| s.to_string()).collect();
    let token_batch = encoder.encode_batch(&batch);
    let slices: Vec<&[T]> = token_batch.iter().map(|v| v.as_slice()).collect();
    assert_eq!(decoder.try_decode_batch_to_strings(&slices).unwrap(), batch);

    priority_chain_tests::<T, P>();
}

/// Encoding must prefer the lowest minted id, not the longest span.
fn priority_chain_tests<T: TokenType, P: ChunkPolicy<T>>() {
    let t = |byte: u8| T::from_u8(byte).unwrap();
    let m = |id: usize| T::from_usize(id).unwrap();

    // (a, b) -> 256, then (256, c) -> 257.
    let merges = vec![(t(b'a'), t(b'b')), (m(256), t(b'c'))];
    let vocab: TokenVocab<T> = PairVocab::from_merges(merges, SplitterMode::Raw)
        .unwrap()
        .into();
    let encoder = VocabEncoder::<T, P>::init(vocab).unwrap();

    assert_eq!(encoder.encode("abc"), vec![m(257)]);
    assert_eq!(encoder.encode("abcabc"), vec![m(257), m(257)]);
    assert_eq!(encoder.encode("ab"), vec![m(256)]);
    assert_eq!(encoder.encode("bc"), vec![t(b'b'), t(b'c')]);
}
