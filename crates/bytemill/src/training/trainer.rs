//! # BPE Trainer
//!
//! Learns a merge vocabulary from text by repeatedly minting the most
//! frequent adjacent token pair.
//!
//! The trainer does not recount pairs from scratch each round. Chunks are
//! deduplicated to `(chunk, multiplicity)` entries; pair counts and a
//! pair to chunk index are built once; each merge then applies surgical
//! count deltas to the neighborhood of every replacement, weighted by
//! chunk multiplicity.
//!
//! Candidate selection runs through a max-heap with lazy refresh: a popped
//! candidate whose stored count is stale is re-pushed at its current count
//! instead of being trusted. Ties on count break toward the
//! lexicographically smallest pair, which keeps training independent of
//! hash-map iteration order.

use core::cmp::Ordering;
use core::marker::PhantomData;

use dary_heap::OctonaryHeap;

use crate::errors::BMResult;
use crate::splitter::SplitterMode;
use crate::training::chunk_buffer::TokenChunkBuf;
use crate::training::chunk_counter::ChunkCounter;
use crate::training::pair_index::PairChunkIndex;
use crate::types::{BMHashMap, Pair, TokenType};
use crate::vocab::{PairVocab, TokenVocab, U8_SIZE, try_vocab_size};

/// A candidate pair for the next merge.
///
/// Ordered by count, then smallest-pair-wins, so that a max-heap pops the
/// same pair a full scan with the deterministic tie-break would select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeCandidate<T: TokenType> {
    /// The occurrence count at push time; may be stale.
    pub count: u64,

    /// The candidate pair.
    pub pair: Pair<T>,
}

impl<T: TokenType> Ord for MergeCandidate<T> {
    fn cmp(
        &self,
        other: &Self,
    ) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.pair.cmp(&self.pair))
    }
}

impl<T: TokenType> PartialOrd for MergeCandidate<T> {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Options builder for [`BpeTrainer`].
#[derive(Debug, Clone)]
pub struct BpeTrainerOptions {
    /// The target vocabulary size (bytes + learned merges).
    pub vocab_size: usize,

    /// How training text is split into chunks.
    pub splitter_mode: SplitterMode,

    /// Log per-merge detail?
    pub verbose: bool,
}

impl BpeTrainerOptions {
    /// Create options for a target vocabulary size.
    ///
    /// ## Arguments
    /// * `vocab_size` - The target size; must be at least 256.
    pub fn new(vocab_size: usize) -> Self {
        Self {
            vocab_size,
            splitter_mode: SplitterMode::default(),
            verbose: false,
        }
    }

    /// Override the splitter mode.
    pub fn with_splitter_mode(
        mut self,
        splitter_mode: SplitterMode,
    ) -> Self {
        self.splitter_mode = splitter_mode;
        self
    }

    /// Override per-merge verbosity.
    pub fn with_verbose(
        mut self,
        verbose: bool,
    ) -> Self {
        self.verbose = verbose;
        self
    }

    /// Initialize a trainer from these options.
    ///
    /// ## Returns
    /// A new `BpeTrainer`, or an error when the vocab size is below 256,
    /// does not fit the token type, or the split pattern does not compile.
    pub fn init<T: TokenType>(self) -> BMResult<BpeTrainer<T>> {
        try_vocab_size::<T>(self.vocab_size)?;
        let counter = ChunkCounter::from_mode(self.splitter_mode.clone())?;

        Ok(BpeTrainer {
            options: self,
            counter,
            marker: PhantomData,
        })
    }
}

/// Incremental BPE vocabulary trainer.
///
/// Accumulate corpus text with [`Self::update_from_text`] /
/// [`Self::update_from_samples`], then consume the trainer with
/// [`Self::train_counts`]. [`Self::train`] is the one-shot convenience
/// over both.
///
/// ## Example
/// ```
/// use bytemill::{BpeTrainerOptions, SplitterMode};
///
/// type T = u32;
///
/// let vocab = BpeTrainerOptions::new(300)
///     .with_splitter_mode(SplitterMode::gpt4())
///     .init::<T>()?
///     .train("low lower lowest")?;
///
/// assert_eq!(vocab.vocab_size(), 256 + vocab.num_merges());
/// # Ok::<(), bytemill::BytemillError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BpeTrainer<T: TokenType> {
    options: BpeTrainerOptions,
    counter: ChunkCounter,
    marker: PhantomData<fn() -> T>,
}

impl<T: TokenType> BpeTrainer<T> {
    /// Get the trainer options.
    pub fn options(&self) -> &BpeTrainerOptions {
        &self.options
    }

    /// The number of distinct chunks accumulated so far.
    pub fn num_distinct_chunks(&self) -> usize {
        self.counter.len()
    }

    /// Accumulate one text into the chunk counts.
    ///
    /// ## Arguments
    /// * `text` - The training text.
    pub fn update_from_text(
        &mut self,
        text: &str,
    ) {
        self.counter.update_from_text(text);
    }

    /// Accumulate a stream of text samples into the chunk counts.
    ///
    /// ## Arguments
    /// * `samples` - The training samples.
    pub fn update_from_samples<I, S>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.counter.update_from_samples(samples);
    }

    /// One-shot train over a single text.
    ///
    /// ## Arguments
    /// * `text` - The training text.
    ///
    /// ## Returns
    /// The trained model.
    pub fn train(
        mut self,
        text: &str,
    ) -> BMResult<TokenVocab<T>> {
        self.update_from_text(text);
        self.train_counts()
    }

    /// Train over the accumulated chunk counts.
    ///
    /// Mints up to `vocab_size - 256` merge tokens, stopping early when no
    /// adjacent pair remains. Identical inputs and options produce an
    /// identical model regardless of hash-map iteration order.
    ///
    /// ## Returns
    /// The trained model.
    pub fn train_counts(self) -> BMResult<TokenVocab<T>> {
        let Self {
            options, counter, ..
        } = self;
        let num_merges = options.vocab_size - U8_SIZE;
        let splitter_mode = counter.splitter().mode().clone();

        // Materialize the deduplicated chunk table.
        let chunk_counts = counter.release();
        let mut chunks: Vec<TokenChunkBuf<T>> = Vec::with_capacity(chunk_counts.len());
        let mut counts: Vec<u64> = Vec::with_capacity(chunk_counts.len());
        for (chunk, count) in chunk_counts {
            chunks.push(TokenChunkBuf::from_text(&chunk));
            counts.push(count);
        }

        log::info!(
            "training up to {} merges over {} distinct chunks",
            num_merges,
            chunks.len(),
        );

        let mut index = PairChunkIndex::from_chunks(&chunks, &counts);

        let mut heap = OctonaryHeap::with_capacity(index.pair_counts.len());
        for (&pair, &count) in &index.pair_counts {
            heap.push(MergeCandidate { count, pair });
        }

        let mut merges: Vec<Pair<T>> = Vec::with_capacity(num_merges);
        let mut token_spans: Vec<Vec<u8>> = (0..=u8::MAX).map(|b| vec![b]).collect();
        let log_every = (num_merges / 100).max(1);

        while merges.len() < num_merges {
            let Some(MergeCandidate { count, pair }) = heap.pop() else {
                log::info!(
                    "no pairs left after {} merges; stopping early",
                    merges.len(),
                );
                break;
            };

            let current = index.count(&pair);
            if current != count {
                // Stale entry; re-queue at the corrected count.
                if current > 0 {
                    heap.push(MergeCandidate {
                        count: current,
                        pair,
                    });
                }
                continue;
            }

            // Mint the next token.
            let token = T::from_usize(U8_SIZE + merges.len()).unwrap();
            merges.push(pair);

            let span = {
                let (left, right) = pair;
                let mut span = token_spans[left.to_usize().unwrap()].clone();
                span.extend_from_slice(&token_spans[right.to_usize().unwrap()]);
                span
            };
            if options.verbose {
                log::debug!(
                    "merge {}/{}: {:?} -> {} ({:?}) had {} occurrences",
                    merges.len(),
                    num_merges,
                    pair,
                    token,
                    String::from_utf8_lossy(&span),
                    count,
                );
            }
            token_spans.push(span);

            // Rewrite every chunk that has ever held the pair, folding the
            // weighted count deltas of each replacement's neighborhood.
            let chunk_ids = index.pair_chunks.remove(&pair).unwrap_or_default();
            let mut deltas: BMHashMap<Pair<T>, i64> = BMHashMap::default();
            let pair_chunks = &mut index.pair_chunks;
            for chunk_idx in chunk_ids {
                let multiplicity = counts[chunk_idx] as i64;
                chunks[chunk_idx].merge_pair_cb(pair, token, &mut |changed, delta| {
                    *deltas.entry(changed).or_default() += i64::from(delta) * multiplicity;
                    if delta > 0 {
                        pair_chunks.entry(changed).or_default().insert(chunk_idx);
                    }
                });
            }

            // The minted pair's own deltas sum to exactly -count, clearing
            // its entry; created pairs re-enter the heap at their new totals.
            for (changed, delta) in deltas {
                match delta.cmp(&0) {
                    Ordering::Equal => {}
                    Ordering::Greater => {
                        let entry = index.pair_counts.entry(changed).or_default();
                        *entry += delta as u64;
                        heap.push(MergeCandidate {
                            count: *entry,
                            pair: changed,
                        });
                    }
                    Ordering::Less => {
                        let entry = index.pair_counts.entry(changed).or_default();
                        *entry -= delta.unsigned_abs();
                        if *entry == 0 {
                            index.pair_counts.remove(&changed);
                        }
                    }
                }
            }

            if merges.len() % log_every == 0 {
                log::info!("minted {} / {} merge tokens", merges.len(), num_merges);
            }
        }

        let pair_vocab = PairVocab::from_merges(merges, splitter_mode)?;
        Ok(TokenVocab::from_pair_vocab(pair_vocab))
    }
}
