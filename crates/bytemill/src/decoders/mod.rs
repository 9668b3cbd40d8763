//! # Token Decoders
//!
//! Decoders map token ids back to the byte spans they cover. Unknown ids
//! are a typed error; invalid UTF-8 is handled lossily, never fatally.

mod token_decoder;
mod vocab_decoder;

#[doc(inline)]
pub use token_decoder::TokenDecoder;
#[doc(inline)]
pub use vocab_decoder::VocabDecoder;
