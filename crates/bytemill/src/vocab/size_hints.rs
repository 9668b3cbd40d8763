//! # Common Statistics

/// Expected bytes/token ratio for a trained vocabulary.
pub const EXPECTED_BYTES_PER_TOKEN: f32 = 4.0;
