//! # Token Encoders
//!
//! Encoders split text into chunks and reduce each chunk from byte tokens
//! by applying merges in token id order. Two interchangeable merge
//! policies ship; they produce identical output on every input.
//!
//! ## Example
//!
//! ```
//! use bytemill::{MergeHeapEncoder, TokenEncoder, TokenVocab};
//!
//! type T = u32;
//!
//! let vocab = TokenVocab::<T>::default();
//! let encoder = MergeHeapEncoder::init(vocab)?;
//!
//! // A byte-only model passes bytes through.
//! assert_eq!(encoder.encode("hi"), vec![104, 105]);
//! # Ok::<(), bytemill::BytemillError>(())
//! ```

mod merge_heap_encoder;
mod merge_scan_encoder;
#[cfg(test)]
pub(crate) mod test_utils;
mod token_encoder;
mod vocab_encoder;

#[doc(inline)]
pub use merge_heap_encoder::{MergeHeapEncoder, MergeHeapPolicy};
#[doc(inline)]
pub use merge_scan_encoder::{MergeScanEncoder, MergeScanPolicy};
#[doc(inline)]
pub use token_encoder::TokenEncoder;
#[doc(inline)]
pub use vocab_encoder::{ChunkPolicy, VocabEncoder};
