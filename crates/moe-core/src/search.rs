//! Match finding.
//!
//! Search runs over a UTF-8 `&str` but reports **character offsets** (not byte offsets) for
//! all public inputs/outputs. It supports:
//!
//! - literal search (the pattern is escaped and compiled into a regex)
//! - regex search (the pattern is compiled verbatim)
//! - whole-word matching, applied to literal search only
//!
//! A pattern that fails to compile is not an error for the caller of [`find_all`]: it simply
//! produces no matches. Use [`check_pattern`] when the frontend wants to flag the pattern.

use crate::chars::CharIndex;
use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// Options that control how search is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    /// If `true`, performs a case-sensitive search.
    pub case_sensitive: bool,
    /// If `true`, wraps a literal pattern in word-boundary assertions.
    ///
    /// Ignored when [`SearchOptions::regex`] is set: a regex pattern is used as typed.
    pub whole_word: bool,
    /// If `true`, treats the pattern as a regex.
    pub regex: bool,
}

impl SearchOptions {
    /// Literal, case-insensitive search (the search panel's initial state).
    pub fn literal() -> Self {
        Self::default()
    }

    /// Builder-style toggle for case sensitivity.
    pub fn with_case_sensitive(mut self, on: bool) -> Self {
        self.case_sensitive = on;
        self
    }

    /// Builder-style toggle for whole-word matching.
    pub fn with_whole_word(mut self, on: bool) -> Self {
        self.whole_word = on;
        self
    }

    /// Builder-style toggle for regex mode.
    pub fn with_regex(mut self, on: bool) -> Self {
        self.regex = on;
        self
    }
}

/// A located occurrence of the search pattern, expressed as a half-open character range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchMatch {
    /// Inclusive start character offset.
    pub start: usize,
    /// Exclusive end character offset.
    pub end: usize,
}

impl SearchMatch {
    /// Create a match from a half-open character range.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of the match in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the match is empty.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The match as a char range.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// Search errors.
#[derive(Debug, Clone, Error)]
pub enum SearchError {
    /// The provided regex pattern failed to compile.
    #[error("invalid regex: {0}")]
    InvalidRegex(#[from] regex::Error),
}

/// Build the regex source for `query` under `options`.
///
/// Literal patterns are escaped; whole-word wraps only the escaped literal.
pub(crate) fn pattern_source(query: &str, options: SearchOptions) -> String {
    if options.regex {
        return query.to_string();
    }

    let escaped = regex::escape(query);
    if options.whole_word {
        format!(r"\b{escaped}\b")
    } else {
        escaped
    }
}

/// Compile `query` with `options`, or `Ok(None)` for an empty query.
pub(crate) fn compile_search_regex(
    query: &str,
    options: SearchOptions,
) -> Result<Option<Regex>, SearchError> {
    if query.is_empty() {
        return Ok(None);
    }

    RegexBuilder::new(&pattern_source(query, options))
        .case_insensitive(!options.case_sensitive)
        .build()
        .map(Some)
        .map_err(SearchError::from)
}

/// Validate `query` without searching.
///
/// An empty query is valid (it just matches nothing).
pub fn check_pattern(query: &str, options: SearchOptions) -> Result<(), SearchError> {
    compile_search_regex(query, options).map(|_| ())
}

/// Find all occurrences of `query` in `text`, left to right.
///
/// - Returns an empty list if `query` is empty or does not compile.
/// - Zero-width matches are skipped, so every returned match selects at least one character.
/// - Match ranges are character offsets and are half-open (`[start, end)`), non-overlapping
///   and strictly increasing.
pub fn find_all(text: &str, query: &str, options: SearchOptions) -> Vec<SearchMatch> {
    let re = match compile_search_regex(query, options) {
        Ok(Some(re)) => re,
        Ok(None) => return Vec::new(),
        Err(err) => {
            tracing::debug!(%err, query, "search pattern rejected, reporting no matches");
            return Vec::new();
        }
    };

    find_all_with(&re, text)
}

pub(crate) fn find_all_with(re: &Regex, text: &str) -> Vec<SearchMatch> {
    let index = CharIndex::new(text);
    re.find_iter(text)
        .filter(|m| !m.is_empty())
        .map(|m| SearchMatch {
            start: index.byte_to_char(m.start()),
            end: index.byte_to_char(m.end()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(case_sensitive: bool, whole_word: bool, regex: bool) -> SearchOptions {
        SearchOptions {
            case_sensitive,
            whole_word,
            regex,
        }
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        assert!(find_all("anything", "", opts(false, false, false)).is_empty());
        assert!(find_all("anything", "", opts(false, false, true)).is_empty());
    }

    #[test]
    fn test_literal_escapes_metacharacters() {
        let matches = find_all("a.b axb a.b", "a.b", opts(true, false, false));
        assert_eq!(matches, vec![SearchMatch::new(0, 3), SearchMatch::new(8, 11)]);
    }

    #[test]
    fn test_whole_word_literal() {
        let text = "The cat sat on the cat mat";
        let matches = find_all(text, "cat", opts(false, true, false));
        assert_eq!(matches, vec![SearchMatch::new(4, 7), SearchMatch::new(19, 22)]);

        let matches = find_all("concat cat cats", "cat", opts(false, true, false));
        assert_eq!(matches, vec![SearchMatch::new(7, 10)]);
    }

    #[test]
    fn test_whole_word_ignored_in_regex_mode() {
        let matches = find_all("concat cat", "cat", opts(false, true, true));
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn test_case_sensitivity() {
        let text = "Hello hello HELLO";
        assert_eq!(find_all(text, "hello", opts(true, false, false)).len(), 1);
        assert_eq!(find_all(text, "hello", opts(false, false, false)).len(), 3);
    }

    #[test]
    fn test_invalid_regex_is_silent() {
        assert!(find_all("(abc", "(", opts(false, false, true)).is_empty());
        assert!(check_pattern("(", opts(false, false, true)).is_err());
        assert!(check_pattern("(", opts(false, false, false)).is_ok());
    }

    #[test]
    fn test_zero_width_pattern_terminates() {
        assert!(find_all("abc", "x*", opts(false, false, true)).is_empty());
        let matches = find_all("aab", "a*", opts(false, false, true));
        assert_eq!(matches, vec![SearchMatch::new(0, 2)]);
    }

    #[test]
    fn test_char_offsets_for_multibyte_text() {
        let text = "你好，世界，你好";
        let matches = find_all(text, "你好", opts(true, false, false));
        assert_eq!(matches, vec![SearchMatch::new(0, 2), SearchMatch::new(6, 8)]);
        assert_eq!(crate::chars::char_slice(text, matches[1].range()), "你好");
    }
}
