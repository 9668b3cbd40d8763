//! # Chunk Split Patterns
//!
//! GPT-style word split patterns, usable with [`crate::splitter::SplitterMode::Pattern`].

use crate::regex::ConstRegexPattern;

/// A macro to concatenate multiple string literals with a specified separator.
///
/// # Examples
///
/// ```rust
/// use bytemill::join_strs;
///
/// let result = join_strs!(",", ("Hello", "World", "Rust"));
/// assert_eq!(result, "Hello,World,Rust");
/// ```
///
/// # Parameters
///
/// - `$sep`: A string literal used as a separator between the provided string literals.
/// - `($first $(, $rest)*)`: A tuple of at least one string literal. The first string literal
///   is mandatory, and the rest are optional. A trailing comma is allowed but not required.
#[macro_export]
macro_rules! join_strs {
    ($sep:literal, ($first:literal $(, $rest:literal)* $(,)?)) => {
        concat!($first $(, $sep, $rest)*)
    };
}

/// An extension of [`join_strs!()`] which uses the "|" as the seperator.
#[macro_export]
macro_rules! join_patterns {
    ($($e:expr),* $(,)?) => { $crate::join_strs!("|", ($($e),*)) };
}

/// The GPT-2 style word split pattern.
///
/// Requires the fancy engine for the ``\s+(?!\S)`` lookahead.
pub const GPT2_SPLIT_PATTERN: ConstRegexPattern = ConstRegexPattern::Fancy(join_patterns!(
    r"'(?:[sdmt]|ll|ve|re)",
    r" ?\p{L}+",
    r" ?\p{N}+",
    r" ?[^\s\p{L}\p{N}]+",
    r"\s+(?!\S)",
    r"\s+",
));

/// The GPT-4 style word split pattern.
///
/// Requires the fancy engine for the lookahead and possessive quantifiers.
pub const GPT4_SPLIT_PATTERN: ConstRegexPattern = ConstRegexPattern::Fancy(join_patterns!(
    r"'(?i:[sdmt]|ll|ve|re)",
    r"[^\r\n\p{L}\p{N}]?+\p{L}+",
    r"\p{N}{1,3}",
    r" ?[^\s\p{L}\p{N}]++[\r\n]*",
    r"\s*[\r\n]",
    r"\s+(?!\S)",
    r"\s+",
));
