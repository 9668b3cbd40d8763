//! # Vocabulary Types

use crate::types::{BMHashMap, Pair};

/// `{ Pair<T> -> T }` map.
///
/// ## Style Hints
/// Instance names should prefer `pair_map`, or `pair_token_map`.
pub type PairTokenMap<T> = BMHashMap<Pair<T>, T>;
