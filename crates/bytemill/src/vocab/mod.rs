//! # Token Vocabularies
//!
//! * [`PairVocab`] - the learned merge list; the immutable output of training.
//! * [`SpanVocab`] - the derived ``{ token -> byte span }`` expansion table.
//! * [`TokenVocab`] - both sides unified into one shareable model.

pub mod pair_vocab;
pub mod size_hints;
pub mod span_vocab;
pub mod token_vocab;
pub mod validators;
pub mod vocab_types;

#[doc(inline)]
pub use pair_vocab::PairVocab;
#[doc(inline)]
pub use span_vocab::SpanVocab;
#[doc(inline)]
pub use token_vocab::TokenVocab;
#[doc(inline)]
pub use validators::{U8_SIZE, try_vocab_size};
#[doc(inline)]
pub use vocab_types::PairTokenMap;
