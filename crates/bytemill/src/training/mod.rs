//! # Vocabulary Training
//!
//! Support for learning byte-pair merge vocabularies from text.
//!
//! Training splits the corpus into chunks (see [`crate::splitter`]),
//! deduplicates them, and repeatedly mints a token for the most frequent
//! adjacent pair. Merges never cross chunk boundaries.
//!
//! The trainer itself is sequential; the wins from parallelism live in
//! feeding it (sample IO) and in batch encoding, not in the merge loop.
//!
//! ## Example
//!
//! Accumulate samples incrementally, then train once:
//!
//! ```
//! use bytemill::{BpeTrainerOptions, SplitterMode, TokenVocab};
//!
//! type T = u32;
//!
//! let mut trainer = BpeTrainerOptions::new(280)
//!     .with_splitter_mode(SplitterMode::gpt4())
//!     .init::<T>()?;
//!
//! for doc in ["first document", "second document"] {
//!     trainer.update_from_text(doc);
//! }
//!
//! let vocab: TokenVocab<T> = trainer.train_counts()?;
//! assert!(vocab.num_merges() <= 280 - 256);
//! # Ok::<(), bytemill::BytemillError>(())
//! ```

pub mod chunk_buffer;
pub mod chunk_counter;
pub mod pair_index;

mod trainer;

#[doc(inline)]
pub use chunk_buffer::TokenChunkBuf;
#[doc(inline)]
pub use chunk_counter::ChunkCounter;
#[doc(inline)]
pub use pair_index::PairChunkIndex;
#[doc(inline)]
pub use trainer::{BpeTrainer, BpeTrainerOptions, MergeCandidate};
