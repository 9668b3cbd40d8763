//! # `bytemill` Byte-Level BPE Tokenizer
//!
//! `bytemill` is a byte-level BPE tokenizer library with trainable
//! vocabularies.
//!
//! Vocabularies are learned from sample text by iteratively merging the
//! most frequent adjacent token pair; encoding replays those merges in
//! priority order, and decoding maps every token back to the exact bytes
//! it covers.
//!
//! See:
//! * [`encoders`] to encode text into tokens.
//! * [`decoders`] to decode tokens back into text.
//! * [`training`] to train a [`vocab::TokenVocab`] on sample text.
//! * [`vocab`] to manage merge tables and the byte spans they produce.
//! * [`tokenizer`] for a combined encoder/decoder facade.
//!
//! ## Training A Tokenizer
//!
//! ```rust
//! use bytemill::{BpeTrainerOptions, SplitterMode, TokenDecoder, TokenEncoder, Tokenizer};
//!
//! type T = u32;
//!
//! let text = "low lower lowest newer newest";
//!
//! let vocab = BpeTrainerOptions::new(280)
//!     .with_splitter_mode(SplitterMode::gpt4())
//!     .init::<T>()?
//!     .train(text)?;
//! assert!(vocab.num_merges() > 0);
//!
//! let tokenizer = Tokenizer::from_vocab(vocab)?;
//!
//! let tokens = tokenizer.encode(text);
//! assert!(tokens.len() < text.len());
//! assert_eq!(tokenizer.try_decode_to_string(&tokens)?, text);
//! # Ok::<(), bytemill::BytemillError>(())
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

#[cfg(feature = "training")]
pub mod training;

pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod regex;
pub mod splitter;
pub mod stats;
pub mod tokenizer;
pub mod types;
pub mod vocab;

pub use decoders::{TokenDecoder, VocabDecoder};
pub use encoders::{MergeHeapEncoder, MergeScanEncoder, TokenEncoder, VocabEncoder};
pub use errors::{BMResult, BytemillError};
pub use splitter::{ChunkSplitter, SplitterMode};
pub use tokenizer::Tokenizer;
pub use types::{Pair, TokenType};
pub use vocab::{PairVocab, SpanVocab, TokenVocab};

#[cfg(feature = "training")]
pub use training::{BpeTrainer, BpeTrainerOptions};

#[cfg(feature = "rayon")]
pub use crate::rayon::{ParallelRayonDecoder, ParallelRayonEncoder};
