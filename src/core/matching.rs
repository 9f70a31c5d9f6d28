//! Match tests
//!
//! "Does this pattern match anywhere?" with a lossy boolean surface and an
//! error-reporting one.

use std::ops::Range;

use super::engine::{CompiledRegex, EngineError};
use crate::types::MatchOptions;

/// Whether `pattern` matches anywhere in `text`.
///
/// Swallows pattern-compile errors as `false`; use [`try_is_matched`] when
/// a malformed pattern must be distinguishable from "no match".
pub fn is_matched(text: &str, pattern: &str) -> bool {
    try_is_matched(text, pattern, MatchOptions::default(), None).unwrap_or(false)
}

/// Whether `pattern` matches anywhere in `range` of `text` (`None` searches
/// the whole text). Compile failures come back as `Err`, never as `false`.
pub fn try_is_matched(
    text: &str,
    pattern: &str,
    options: MatchOptions,
    range: Option<Range<usize>>,
) -> Result<bool, EngineError> {
    let re = CompiledRegex::new(pattern, options)?;
    Ok(re.first_match(text, range)?.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_match() {
        assert!(is_matched("hello 123 world", r"\d+"));
        assert!(!is_matched("hello world", r"\d+"));
    }

    #[test]
    fn test_lossy_swallows_compile_errors() {
        assert!(!is_matched("anything", r"("));
    }

    #[test]
    fn test_try_surfaces_compile_errors() {
        assert!(try_is_matched("anything", r"(", MatchOptions::default(), None).is_err());
    }

    #[test]
    fn test_range_limits_the_search() {
        let text = "no digits here 42";
        assert!(!try_is_matched(text, r"\d+", MatchOptions::default(), Some(0..10)).unwrap());
        assert!(try_is_matched(text, r"\d+", MatchOptions::default(), Some(10..17)).unwrap());
    }

    #[test]
    fn test_caseless() {
        assert!(try_is_matched("HELLO", "hello", MatchOptions::caseless(), None).unwrap());
        assert!(!try_is_matched("HELLO", "hello", MatchOptions::default(), None).unwrap());
    }
}
