#![allow(missing_docs)]
#![cfg(feature = "training")]

use bytemill::{
    BpeTrainerOptions,
    MergeHeapEncoder,
    MergeScanEncoder,
    SplitterMode,
    TokenDecoder,
    TokenEncoder,
    TokenType,
    TokenVocab,
    Tokenizer,
};

const TRAINING_TEXT: &str = "\
    The quick brown fox jumps over the lazy dog. \
    The mill grinds bytes into tokens, one merge at a time. \
    hello world, hello tokens, hello merges. \
    Counting one two three, counting three two one. \
    lower lowest newer newest wider widest.";

const SAMPLES: &[&str] = &[
    "",
    "a",
    " ",
    "hello world",
    "The mill grinds bytes into tokens, one merge at a time.",
    "It's 2024, and we're counting: 1, 22, 333!",
    "  leading and   interior   runs of spaces  ",
    "line one\nline two\r\nline three",
    "tabs\tbetween\twords",
    "caf\u{00e9} na\u{00ef}ve respons\u{00e9}",
    "\u{4f60}\u{597d}\u{4e16}\u{754c}",
    "emoji: \u{1f600} \u{1f986} \u{2728}",
    "$$$!!!...---",
    "mixed\u{00a0}width\u{2003}spaces",
];

fn train_vocab<T: TokenType>(
    vocab_size: usize,
    mode: SplitterMode,
) -> TokenVocab<T> {
    BpeTrainerOptions::new(vocab_size)
        .with_splitter_mode(mode)
        .init::<T>()
        .unwrap()
        .train(TRAINING_TEXT)
        .unwrap()
}

fn roundtrip_validation<T: TokenType>(mode: SplitterMode) {
    let vocab = train_vocab::<T>(320, mode);
    let tokenizer = Tokenizer::from_vocab(vocab).unwrap();

    for text in SAMPLES {
        let tokens = tokenizer.encode(text);
        let decoded = tokenizer.try_decode_to_string(&tokens).unwrap();
        assert_eq!(&decoded, text, "Roundtrip mismatch: {text:?}");
    }
}

#[test]
fn raw_roundtrip_u16() {
    roundtrip_validation::<u16>(SplitterMode::Raw);
}

#[test]
fn raw_roundtrip_u32() {
    roundtrip_validation::<u32>(SplitterMode::Raw);
}

#[test]
fn gpt2_roundtrip_u32() {
    roundtrip_validation::<u32>(SplitterMode::gpt2());
}

#[test]
fn gpt4_roundtrip_u32() {
    roundtrip_validation::<u32>(SplitterMode::gpt4());
}

#[test]
fn scan_and_heap_encoders_agree() {
    type T = u32;

    let vocab: TokenVocab<T> = train_vocab(320, SplitterMode::gpt4());

    let scan = MergeScanEncoder::init(vocab.clone()).unwrap();
    let heap = MergeHeapEncoder::init(vocab).unwrap();

    for text in SAMPLES {
        assert_eq!(
            scan.encode(text),
            heap.encode(text),
            "Encoder mismatch: {text:?}"
        );
    }
}

#[test]
fn training_is_deterministic() {
    type T = u32;

    let first: TokenVocab<T> = train_vocab(300, SplitterMode::gpt4());
    let second: TokenVocab<T> = train_vocab(300, SplitterMode::gpt4());

    assert_eq!(first.merges(), second.merges());
}

#[test]
fn merge_tables_agree_across_token_types() {
    fn merge_values<T: TokenType>(vocab: &TokenVocab<T>) -> Vec<(u64, u64)> {
        vocab
            .merges()
            .iter()
            .map(|&(a, b)| (a.to_u64().unwrap(), b.to_u64().unwrap()))
            .collect()
    }

    let m16 = merge_values(&train_vocab::<u16>(300, SplitterMode::gpt4()));
    let m32 = merge_values(&train_vocab::<u32>(300, SplitterMode::gpt4()));

    assert_eq!(m16, m32);
}

#[test]
fn minted_tokens_compose_from_parts() {
    type T = u32;

    let vocab: TokenVocab<T> = train_vocab(320, SplitterMode::gpt4());

    assert_eq!(vocab.vocab_size(), 256 + vocab.num_merges());
    assert!(vocab.vocab_size() <= 320);

    for (idx, &(left, right)) in vocab.merges().iter().enumerate() {
        let token = 256 + idx as T;
        assert!(left < token && right < token);

        let mut composed = vocab.get_span(left).unwrap().to_vec();
        composed.extend_from_slice(vocab.get_span(right).unwrap());
        assert_eq!(vocab.get_span(token).unwrap(), composed.as_slice());
    }
}

#[test]
fn trained_vocab_compresses_training_text() {
    type T = u32;

    let vocab: TokenVocab<T> = train_vocab(320, SplitterMode::gpt4());
    let tokenizer = Tokenizer::from_vocab(vocab).unwrap();

    let tokens = tokenizer.encode(TRAINING_TEXT);
    assert!(tokens.len() < TRAINING_TEXT.len());
}

// Worked example: 3 merges over "aaabdaaabac" mint "aa", "ab", then
// "aaab" from the two previous tokens, and encoding replays them.
#[test]
fn classic_overlap_example() {
    type T = u32;

    let text = "aaabdaaabac";

    let vocab = BpeTrainerOptions::new(259)
        .init::<T>()
        .unwrap()
        .train(text)
        .unwrap();

    assert_eq!(vocab.merges(), &[(97, 97), (97, 98), (256, 257)]);
    assert_eq!(vocab.get_span(256).unwrap(), b"aa");
    assert_eq!(vocab.get_span(257).unwrap(), b"ab");
    assert_eq!(vocab.get_span(258).unwrap(), b"aaab");

    let tokenizer = Tokenizer::from_vocab(vocab).unwrap();
    let tokens = tokenizer.encode(text);
    assert_eq!(tokens, vec![258, 100, 258, 97, 99]);
    assert_eq!(tokenizer.try_decode_to_string(&tokens).unwrap(), text);
}

#[cfg(feature = "rayon")]
#[test]
fn parallel_batch_encode_matches_sequential() {
    use bytemill::ParallelRayonEncoder;

    type T = u32;

    let vocab: TokenVocab<T> = train_vocab(320, SplitterMode::gpt4());
    let encoder = MergeHeapEncoder::init(vocab).unwrap();
    let parallel = ParallelRayonEncoder::new(encoder.clone());

    let batch: Vec<String> = SAMPLES.iter().map(|s| s.to_string()).collect();

    let sequential: Vec<Vec<T>> = batch.iter().map(|text| encoder.encode(text)).collect();
    assert_eq!(parallel.encode_batch(&batch), sequential);
}
