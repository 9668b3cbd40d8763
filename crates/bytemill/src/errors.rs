//! # Error Types

/// Errors from bytemill operations.
#[derive(Debug, thiserror::Error)]
pub enum BytemillError {
    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Vocab size is below the minimum (256, the u8 space).
    #[error("vocab size ({size}) must be >= 256")]
    VocabSizeTooSmall {
        /// The vocab size that was too small.
        size: usize,
    },

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// Decoding saw a token id with no vocabulary entry.
    #[error("unknown token id: {token}")]
    UnknownToken {
        /// The offending token id.
        token: u64,
    },

    /// A chunk split pattern failed to compile.
    #[error("invalid split pattern: {0}")]
    Pattern(String),
}

/// Result type for bytemill operations.
pub type BMResult<T> = core::result::Result<T, BytemillError>;
