//! # Regex Utilities
//!
//! The GPT-style chunk split patterns require extended regex machinery
//! (lookahead, possessive quantifiers) provided by the [`fancy_regex`] crate;
//! but naturally, this has performance costs. We'd prefer to avoid using the
//! [`fancy_regex`] crate when possible, falling back on the standard
//! [`regex`] crate when patterns permit this.
//!
//! This recurses into two problems:
//!
//! * Labeling Patterns - [`RegexPattern`]
//!   * [`RegexPattern::Basic`] - a pattern which was written for [`regex`].
//!   * [`RegexPattern::Fancy`] - a pattern which was written for [`fancy_regex`].
//!   * [`RegexPattern::Adaptive`] - unknown target, try basic; then fall-up to fancy.
//! * Wrapping Compiled Regex - [`RegexWrapper`]
//!
//! The [`RegexWrapper`] type supports only one operation, ``find_ranges()``,
//! which yields the byte ranges of non-overlapping matches.

pub mod patterns;
pub mod regex_wrapper;

#[doc(inline)]
pub use patterns::{GPT2_SPLIT_PATTERN, GPT4_SPLIT_PATTERN};
#[doc(inline)]
pub use regex_wrapper::{ConstRegexPattern, RegexPattern, RegexWrapper};
