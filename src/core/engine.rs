//! Regex engine selection and compilation
//!
//! Automatically chooses between `regex` (fast, linear time) and
//! `fancy-regex` (full features, backtracking) based on pattern analysis,
//! and exposes a single match-scanning interface over both.

use std::ops::Range;
use std::sync::LazyLock;

use thiserror::Error;

use crate::types::{Capture, Match, MatchOptions};

static BACKREFERENCE_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"\\[1-9]").expect("BUG: backreference detection pattern is invalid")
});

/// Errors that can occur during engine operations
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid regex pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("Fancy-regex error: {0}")]
    FancyRegex(#[from] Box<fancy_regex::Error>),
}

impl From<fancy_regex::Error> for EngineError {
    fn from(e: fancy_regex::Error) -> Self {
        EngineError::FancyRegex(Box::new(e))
    }
}

/// Detect whether a pattern uses features the standard `regex` crate does
/// not support (lookaround, backreferences, atomic groups).
///
/// Note: `regex`'s parser rejects these outright, so detection relies on
/// string scanning rather than an AST walk.
pub fn needs_fancy_engine(pattern: &str) -> bool {
    pattern.contains("(?=")
        || pattern.contains("(?!")
        || pattern.contains("(?<=")
        || pattern.contains("(?<!")
        || pattern.contains("(?>")
        || BACKREFERENCE_RE.is_match(pattern)
}

/// Prepend inline flags for the requested options.
fn apply_options(pattern: &str, options: MatchOptions) -> String {
    if options.case_insensitive {
        format!("(?i){}", pattern)
    } else {
        pattern.to_string()
    }
}

/// A compiled pattern that can use either engine.
pub enum CompiledRegex {
    Regex(regex::Regex),
    Fancy(fancy_regex::Regex),
}

impl CompiledRegex {
    /// Compile a pattern with automatic engine selection. Falls back to
    /// fancy-regex when the standard regex crate rejects the pattern.
    pub fn new(pattern: &str, options: MatchOptions) -> Result<Self, EngineError> {
        let pattern = apply_options(pattern, options);

        if needs_fancy_engine(&pattern) {
            let re = fancy_regex::Regex::new(&pattern).map_err(Box::new)?;
            return Ok(CompiledRegex::Fancy(re));
        }

        match regex::Regex::new(&pattern) {
            Ok(re) => Ok(CompiledRegex::Regex(re)),
            Err(_) => {
                let re = fancy_regex::Regex::new(&pattern).map_err(Box::new)?;
                Ok(CompiledRegex::Fancy(re))
            }
        }
    }

    /// Number of capture groups the pattern defines, excluding capture 0.
    pub fn group_count(&self) -> usize {
        match self {
            CompiledRegex::Regex(re) => re.captures_len() - 1,
            CompiledRegex::Fancy(re) => re.capture_names().count() - 1,
        }
    }

    /// Iterate over non-overlapping matches within `range` (`None` searches
    /// the whole text), left to right. Reported ranges are in full-text
    /// coordinates even when a sub-range was searched.
    ///
    /// Panics if `range` is out of bounds or not on char boundaries; that is
    /// a caller error, same as slicing.
    pub fn matches<'r, 't>(
        &'r self,
        text: &'t str,
        range: Option<Range<usize>>,
    ) -> Matches<'r, 't> {
        let range = range.unwrap_or(0..text.len());
        Matches {
            re: self,
            base: range.start,
            region: &text[range],
            pos: 0,
            done: false,
        }
    }

    /// First match within `range`, or `Ok(None)` if the pattern never
    /// matches there.
    pub fn first_match(
        &self,
        text: &str,
        range: Option<Range<usize>>,
    ) -> Result<Option<Match>, EngineError> {
        self.matches(text, range).next().transpose()
    }
}

/// Forward iterator over non-overlapping matches.
///
/// After each match the scan resumes at the end of capture 0; a zero-length
/// match advances to the next char boundary so the scan always terminates.
pub struct Matches<'r, 't> {
    re: &'r CompiledRegex,
    base: usize,
    region: &'t str,
    pos: usize,
    done: bool,
}

impl Iterator for Matches<'_, '_> {
    type Item = Result<Match, EngineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.pos > self.region.len() {
            return None;
        }

        let m = match self.re {
            CompiledRegex::Regex(re) => re
                .captures_at(self.region, self.pos)
                .map(|caps| collect_regex(&caps, self.base)),
            CompiledRegex::Fancy(re) => match re.captures_from_pos(self.region, self.pos) {
                Ok(caps) => caps.map(|caps| collect_fancy(&caps, self.base)),
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
            },
        };

        let Some(m) = m else {
            self.done = true;
            return None;
        };

        let full = m.full().range.clone();
        let end = full.end - self.base;
        self.pos = if full.is_empty() {
            next_char_boundary(self.region, end + 1)
        } else {
            end
        };

        Some(Ok(m))
    }
}

/// Smallest char boundary >= `at` (may be one past the end of `s`).
fn next_char_boundary(s: &str, mut at: usize) -> usize {
    while at < s.len() && !s.is_char_boundary(at) {
        at += 1;
    }
    at
}

fn collect_regex(caps: &regex::Captures<'_>, base: usize) -> Match {
    let captures = (0..caps.len())
        .map(|i| {
            caps.get(i).map(|c| Capture {
                range: base + c.start()..base + c.end(),
                text: c.as_str().to_string(),
            })
        })
        .collect();
    Match { captures }
}

fn collect_fancy(caps: &fancy_regex::Captures<'_>, base: usize) -> Match {
    let captures = (0..caps.len())
        .map(|i| {
            caps.get(i).map(|c| Capture {
                range: base + c.start()..base + c.end(),
                text: c.as_str().to_string(),
            })
        })
        .collect();
    Match { captures }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_pattern_uses_regex() {
        let re = CompiledRegex::new(r"\d+", MatchOptions::default()).unwrap();
        assert!(matches!(re, CompiledRegex::Regex(_)));
    }

    #[test]
    fn test_lookahead_uses_fancy() {
        assert!(needs_fancy_engine(r"foo(?=bar)"));
        let re = CompiledRegex::new(r"foo(?=bar)", MatchOptions::default()).unwrap();
        assert!(matches!(re, CompiledRegex::Fancy(_)));
    }

    #[test]
    fn test_backreference_uses_fancy() {
        assert!(needs_fancy_engine(r"(\w+)\s+\1"));
        assert!(!needs_fancy_engine(r"(\w+)\s+"));
    }

    #[test]
    fn test_caseless_option() {
        let re = CompiledRegex::new(r"hello", MatchOptions::caseless()).unwrap();
        assert!(re.first_match("say HELLO", None).unwrap().is_some());
    }

    #[test]
    fn test_group_count() {
        let re = CompiledRegex::new(r"(a)(b)?", MatchOptions::default()).unwrap();
        assert_eq!(re.group_count(), 2);

        let fancy = CompiledRegex::new(r"(a)\1", MatchOptions::default()).unwrap();
        assert_eq!(fancy.group_count(), 1);
    }

    #[test]
    fn test_nonoverlapping_scan() {
        let re = CompiledRegex::new(r"aa", MatchOptions::default()).unwrap();
        let matches: Vec<_> = re
            .matches("aaaa", None)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].full().range, 0..2);
        assert_eq!(matches[1].full().range, 2..4);
    }

    #[test]
    fn test_zero_length_matches_terminate() {
        let re = CompiledRegex::new(r"a*", MatchOptions::default()).unwrap();
        let matches: Vec<_> = re
            .matches("bbb", None)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        // Empty match at each of the four positions, one unit apart
        assert_eq!(matches.len(), 4);
        assert!(matches.iter().all(|m| m.full().text.is_empty()));
    }

    #[test]
    fn test_zero_length_advance_respects_char_boundaries() {
        let re = CompiledRegex::new(r"x*", MatchOptions::default()).unwrap();
        let matches: Vec<_> = re
            .matches("é", None)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        // "é" is two bytes; valid positions are 0 and 2 only
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn test_subrange_reports_full_text_offsets() {
        let re = CompiledRegex::new(r"\d+", MatchOptions::default()).unwrap();
        let m = re.first_match("ab 12 cd 34", Some(6..11)).unwrap().unwrap();
        assert_eq!(m.full().range, 9..11);
        assert_eq!(m.full().text, "34");
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        assert!(CompiledRegex::new(r"(", MatchOptions::default()).is_err());
    }

    #[test]
    fn test_fancy_scan_with_captures() {
        let re = CompiledRegex::new(r"(\w+)-\1", MatchOptions::default()).unwrap();
        let m = re.first_match("go ha-ha go", None).unwrap().unwrap();
        assert_eq!(m.full().text, "ha-ha");
        assert_eq!(m.get(1).unwrap().text, "ha");
    }
}
