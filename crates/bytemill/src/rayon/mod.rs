//! # Rayon Wrappers
//!
//! [`rayon`] powered wrappers which parallelize the batch entry points
//! of [`TokenEncoder`](crate::encoders::TokenEncoder) and
//! [`TokenDecoder`](crate::decoders::TokenDecoder) implementations.
//!
//! Per-text behavior is unchanged; the wrappers fan whole batches out
//! over the rayon thread pool, and batch results are position-stable.

mod rayon_decoder;
mod rayon_encoder;

#[doc(inline)]
pub use rayon_decoder::ParallelRayonDecoder;
#[doc(inline)]
pub use rayon_encoder::ParallelRayonEncoder;
