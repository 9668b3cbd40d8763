//! # Chunk Counter
//!
//! Splits training text into chunks and counts distinct chunks.
//!
//! Training cost scales with the number of *distinct* chunks, not with the
//! corpus size; repeated chunks collapse to one entry with a multiplicity.

use compact_str::CompactString;

use crate::errors::BMResult;
use crate::splitter::{ChunkSplitter, SplitterMode};
use crate::types::BMHashMap;

/// Accumulates distinct chunk counts over training text.
#[derive(Debug, Clone)]
pub struct ChunkCounter {
    splitter: ChunkSplitter,
    chunk_counts: BMHashMap<CompactString, u64>,
}

impl ChunkCounter {
    /// Build a counter over the given splitter.
    pub fn new(splitter: ChunkSplitter) -> Self {
        Self {
            splitter,
            chunk_counts: BMHashMap::default(),
        }
    }

    /// Build a counter for the given splitter mode.
    ///
    /// ## Arguments
    /// * `mode` - The splitter mode.
    ///
    /// ## Returns
    /// A new `ChunkCounter`, or an error if the mode's pattern
    /// does not compile.
    pub fn from_mode(mode: SplitterMode) -> BMResult<Self> {
        Ok(Self::new(ChunkSplitter::from_mode(mode)?))
    }

    /// Get the splitter.
    pub fn splitter(&self) -> &ChunkSplitter {
        &self.splitter
    }

    /// The number of distinct chunks seen so far.
    pub fn len(&self) -> usize {
        self.chunk_counts.len()
    }

    /// Has the counter seen any chunks?
    pub fn is_empty(&self) -> bool {
        self.chunk_counts.is_empty()
    }

    /// The total number of chunk occurrences, weighted by multiplicity.
    pub fn total(&self) -> u64 {
        self.chunk_counts.values().sum()
    }

    /// Split `text` into chunks and count each occurrence.
    ///
    /// ## Arguments
    /// * `text` - The text to accumulate.
    pub fn update_from_text(
        &mut self,
        text: &str,
    ) {
        let chunk_counts = &mut self.chunk_counts;
        self.splitter.for_each_chunk(text, &mut |chunk| {
            *chunk_counts.entry(CompactString::new(chunk)).or_default() += 1;
        });
    }

    /// Accumulate a stream of text samples.
    ///
    /// Each sample is split independently; in raw splitter mode this
    /// makes every sample its own chunk.
    ///
    /// ## Arguments
    /// * `samples` - The text samples to accumulate.
    pub fn update_from_samples<I, S>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample.as_ref());
        }
    }

    /// Unwrap into the accumulated chunk counts.
    pub fn release(self) -> BMHashMap<CompactString, u64> {
        self.chunk_counts
    }
}
