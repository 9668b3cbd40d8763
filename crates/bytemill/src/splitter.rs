//! # Chunk Splitter
//!
//! Splits input text into the chunks that training and encoding operate on.
//! Merges never cross chunk boundaries.

use core::ops::Range;

use crate::errors::BMResult;
use crate::regex::{ConstRegexPattern, RegexPattern, RegexWrapper};

/// How input text is split into chunks.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SplitterMode {
    /// The entire input is a single chunk.
    #[default]
    Raw,

    /// Chunks are the non-overlapping matches of a word split pattern,
    /// in input order. Bytes not covered by any match form their own
    /// chunks, so no input is ever dropped.
    Pattern(RegexPattern),
}

impl SplitterMode {
    /// Pattern mode with the GPT-4 style word split pattern.
    pub fn gpt4() -> Self {
        Self::Pattern(crate::regex::GPT4_SPLIT_PATTERN.to_pattern())
    }

    /// Pattern mode with the GPT-2 style word split pattern.
    pub fn gpt2() -> Self {
        Self::Pattern(crate::regex::GPT2_SPLIT_PATTERN.to_pattern())
    }
}

impl From<RegexPattern> for SplitterMode {
    fn from(pattern: RegexPattern) -> Self {
        Self::Pattern(pattern)
    }
}

impl From<ConstRegexPattern> for SplitterMode {
    fn from(pattern: ConstRegexPattern) -> Self {
        Self::Pattern(pattern.to_pattern())
    }
}

/// Text to chunk splitter for one [`SplitterMode`].
///
/// Pattern compilation happens once, at construction.
#[derive(Debug, Clone)]
pub struct ChunkSplitter {
    mode: SplitterMode,
    word_re: Option<RegexWrapper>,
}

impl ChunkSplitter {
    /// Build a splitter for the given mode.
    ///
    /// ## Arguments
    /// * `mode` - The splitter mode.
    ///
    /// ## Returns
    /// A new `ChunkSplitter`, or [`crate::errors::BytemillError::Pattern`]
    /// if the pattern does not compile.
    pub fn from_mode(mode: SplitterMode) -> BMResult<Self> {
        let word_re = match &mode {
            SplitterMode::Raw => None,
            SplitterMode::Pattern(pattern) => Some(pattern.compile()?),
        };

        Ok(Self { mode, word_re })
    }

    /// Get the splitter mode.
    pub fn mode(&self) -> &SplitterMode {
        &self.mode
    }

    /// Apply `f` to each chunk of `text`, in input order.
    ///
    /// The chunks concatenate back to `text`; empty input produces no chunks.
    ///
    /// ## Arguments
    /// * `text` - The text to split.
    /// * `f` - The function to apply to each chunk.
    pub fn for_each_chunk<'h, F>(
        &self,
        text: &'h str,
        f: &mut F,
    ) where
        F: FnMut(&'h str),
    {
        if text.is_empty() {
            return;
        }

        match &self.word_re {
            None => f(text),
            Some(re) => {
                let mut last = 0;
                for range in re.find_ranges(text) {
                    let Range { start, end } = range;
                    if last < start {
                        f(&text[last..start]);
                    }
                    if start < end {
                        f(&text[start..end]);
                    }
                    last = end;
                }
                if last < text.len() {
                    f(&text[last..]);
                }
            }
        }
    }

    /// Split text into chunks.
    ///
    /// ## Arguments
    /// * `text` - The text to split.
    ///
    /// ## Returns
    /// A vector of chunk slices, concatenating back to `text`.
    pub fn split_chunks<'h>(
        &self,
        text: &'h str,
    ) -> Vec<&'h str> {
        let mut chunks = Vec::new();
        self.for_each_chunk(text, &mut |chunk| chunks.push(chunk));
        chunks
    }
}
