//! # Regex Wrapper
//! This module provides mechanisms to mix `regex` and `fancy_regex` types.

use core::ops::Range;

use crate::errors::{BMResult, BytemillError};

/// Const Regex Pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConstRegexPattern {
    /// This is a pattern for the `regex` crate.
    Basic(&'static str),

    /// This is a pattern for the `fancy_regex` crate.
    Fancy(&'static str),
}

impl ConstRegexPattern {
    /// Get the underlying regex pattern.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
        }
    }

    /// Convert to [`RegexPattern`]
    ///
    /// ## Returns
    /// A new `RegexPattern` instance.
    pub fn to_pattern(self) -> RegexPattern {
        self.into()
    }

    /// Compile the regex pattern into a `RegexWrapper`.
    ///
    /// ## Returns
    /// A `Result` containing the compiled `RegexWrapper`,
    /// or [`BytemillError::Pattern`].
    pub fn compile(&self) -> BMResult<RegexWrapper> {
        RegexPattern::from(*self).compile()
    }
}

impl From<ConstRegexPattern> for RegexPattern {
    fn from(pattern: ConstRegexPattern) -> Self {
        use ConstRegexPattern::*;
        match pattern {
            Basic(pattern) => RegexPattern::Basic(pattern.to_string()),
            Fancy(pattern) => RegexPattern::Fancy(pattern.to_string()),
        }
    }
}

/// Label for regex patterns.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RegexPattern {
    /// This is a pattern for the `regex` crate.
    Basic(String),

    /// This is a pattern for the `fancy_regex` crate.
    Fancy(String),

    /// This pattern will try the `regex` crate first,
    /// and fallback to `fancy_regex` if it fails.
    Adaptive(String),
}

impl<S: AsRef<str>> From<S> for RegexPattern {
    fn from(pattern: S) -> Self {
        Self::Adaptive(pattern.as_ref().to_string())
    }
}

impl RegexPattern {
    /// Get the underlying regex pattern.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
            Self::Adaptive(pattern) => pattern,
        }
    }

    /// Compile the regex pattern into a `RegexWrapper`.
    ///
    /// ## Returns
    /// A `Result` containing the compiled `RegexWrapper`,
    /// or [`BytemillError::Pattern`].
    pub fn compile(&self) -> BMResult<RegexWrapper> {
        match self {
            Self::Basic(pattern) => regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .map_err(|err| BytemillError::Pattern(err.to_string())),
            Self::Fancy(pattern) => fancy_regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .map_err(|err| BytemillError::Pattern(err.to_string())),
            Self::Adaptive(pattern) => regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .or_else(|_| {
                    fancy_regex::Regex::new(pattern)
                        .map(RegexWrapper::from)
                        .map_err(|err| BytemillError::Pattern(err.to_string()))
                }),
        }
    }
}

/// Wrapper for compiled regex patterns.
#[derive(Debug, Clone)]
pub enum RegexWrapper {
    /// Wrapper for `regex::Regex`.
    Basic(regex::Regex),

    /// Wrapper for `fancy_regex::Regex`.
    Fancy(fancy_regex::Regex),
}

impl From<regex::Regex> for RegexWrapper {
    fn from(regex: regex::Regex) -> Self {
        Self::Basic(regex)
    }
}

impl From<fancy_regex::Regex> for RegexWrapper {
    fn from(regex: fancy_regex::Regex) -> Self {
        Self::Fancy(regex)
    }
}

impl RegexWrapper {
    /// Is this `Basic`?
    ///
    /// ## Returns
    /// `true` if it wraps a `regex::Regex`, `false` otherwise.
    pub fn is_basic(&self) -> bool {
        match self {
            Self::Basic(_) => true,
            Self::Fancy(_) => false,
        }
    }

    /// Is this `Fancy`?
    ///
    /// ## Returns
    /// `true` if it wraps a `fancy_regex::Regex`, `false` otherwise.
    pub fn is_fancy(&self) -> bool {
        match self {
            Self::Basic(_) => false,
            Self::Fancy(_) => true,
        }
    }

    /// Get the underlying regex pattern.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(regex) => regex.as_str(),
            Self::Fancy(regex) => regex.as_str(),
        }
    }

    /// Iterate the byte ranges of non-overlapping matches in `haystack`.
    ///
    /// ## Arguments
    /// * `haystack` - The string to search in.
    ///
    /// ## Returns
    /// A `RangeMatches` iterator over the match ranges.
    pub fn find_ranges<'r, 'h>(
        &'r self,
        haystack: &'h str,
    ) -> RangeMatches<'r, 'h> {
        match self {
            Self::Basic(regex) => regex.find_iter(haystack).into(),
            Self::Fancy(regex) => regex.find_iter(haystack).into(),
        }
    }
}

/// Iterator over match byte ranges, unified across both regex engines.
pub enum RangeMatches<'r, 'h> {
    /// Matches from `regex::Regex`.
    Basic(regex::Matches<'r, 'h>),

    /// Matches from `fancy_regex::Regex`.
    Fancy(fancy_regex::Matches<'r, 'h>),
}

impl<'r, 'h> From<regex::Matches<'r, 'h>> for RangeMatches<'r, 'h> {
    fn from(matches: regex::Matches<'r, 'h>) -> Self {
        Self::Basic(matches)
    }
}

impl<'r, 'h> From<fancy_regex::Matches<'r, 'h>> for RangeMatches<'r, 'h> {
    fn from(matches: fancy_regex::Matches<'r, 'h>) -> Self {
        Self::Fancy(matches)
    }
}

impl Iterator for RangeMatches<'_, '_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Basic(matches) => matches.next().map(|m| m.range()),
            Self::Fancy(matches) => matches.next().map(|m| m.unwrap().range()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adaptive_compile_prefers_basic() {
        let wrapper = RegexPattern::from(r"\d+").compile().unwrap();
        assert!(wrapper.is_basic());
        assert_eq!(wrapper.as_str(), r"\d+");
    }

    #[test]
    fn test_adaptive_compile_falls_up_to_fancy() {
        // Lookahead is not supported by the basic engine.
        let wrapper = RegexPattern::from(r"\s+(?!\S)").compile().unwrap();
        assert!(wrapper.is_fancy());
    }

    #[test]
    fn test_bad_pattern_is_an_error() {
        assert!(RegexPattern::Basic(r"(".to_string()).compile().is_err());
        assert!(RegexPattern::from(r"(").compile().is_err());
    }

    #[test]
    fn test_find_ranges_agree_across_engines() {
        let text = "ab 12 cd";

        let basic = RegexPattern::Basic(r"\w+".to_string()).compile().unwrap();
        let fancy = RegexPattern::Fancy(r"\w+".to_string()).compile().unwrap();

        let expected = vec![0..2, 3..5, 6..8];
        assert_eq!(basic.find_ranges(text).collect::<Vec<_>>(), expected);
        assert_eq!(fancy.find_ranges(text).collect::<Vec<_>>(), expected);
    }
}
