//! Capture extraction
//!
//! First-match substring and range lookup, and batch collection of one
//! capture group across every match.

use std::ops::Range;

use super::engine::{CompiledRegex, EngineError};
use crate::types::MatchOptions;

/// Assert the capture-index contract: `capture` must lie in
/// `[0, group_count]`. An out-of-range index is a programmer error, not a
/// data condition, and fails loudly instead of reading as "absent".
fn assert_capture_index(re: &CompiledRegex, capture: usize) {
    let groups = re.group_count();
    assert!(
        capture <= groups,
        "capture index {} out of range for a pattern with {} capture group(s)",
        capture,
        groups
    );
}

/// Substring of capture group `capture` in the first match of `pattern`.
///
/// `None` when the pattern does not match or the group did not participate.
/// Swallows compile errors as `None`; use [`try_matched_substring`] to tell
/// those apart. Panics if `capture` exceeds the pattern's group count.
pub fn matched_substring(text: &str, pattern: &str, capture: usize) -> Option<String> {
    try_matched_substring(text, pattern, MatchOptions::default(), None, capture).unwrap_or(None)
}

/// Substring of capture group `capture` in the first match of `pattern`
/// within `range` (`None` searches the whole text).
///
/// `Ok(None)` is a data condition (no match, or the group did not
/// participate); `Err` is a pattern-compile or engine failure. Panics if
/// `capture` exceeds the pattern's group count.
pub fn try_matched_substring(
    text: &str,
    pattern: &str,
    options: MatchOptions,
    range: Option<Range<usize>>,
    capture: usize,
) -> Result<Option<String>, EngineError> {
    let re = CompiledRegex::new(pattern, options)?;
    assert_capture_index(&re, capture);

    match re.first_match(text, range)? {
        Some(m) => Ok(m.get(capture).map(|c| c.text.clone())),
        None => Ok(None),
    }
}

/// Byte range of the first match of `pattern` in `text`, or `None` when the
/// pattern never matches (or fails to compile). Default options, whole text.
pub fn range_of_first_match(text: &str, pattern: &str) -> Option<Range<usize>> {
    let re = CompiledRegex::new(pattern, MatchOptions::default()).ok()?;
    let m = re.first_match(text, None).ok()??;
    Some(m.full().range.clone())
}

/// Substrings of capture group `capture` for every non-overlapping match of
/// `pattern` in `text`, in match order.
///
/// Matches where the group did not participate contribute nothing; they are
/// skipped, not represented by placeholders. Swallows compile errors as an
/// empty list; use [`try_all_matches`] to surface them. Panics if `capture`
/// exceeds the pattern's group count.
pub fn all_matches(text: &str, pattern: &str, capture: usize) -> Vec<String> {
    try_all_matches(text, pattern, MatchOptions::default(), None, capture).unwrap_or_default()
}

/// Like [`all_matches`], restricted to `range` (`None` searches the whole
/// text), with options and an explicit error channel.
pub fn try_all_matches(
    text: &str,
    pattern: &str,
    options: MatchOptions,
    range: Option<Range<usize>>,
    capture: usize,
) -> Result<Vec<String>, EngineError> {
    let re = CompiledRegex::new(pattern, options)?;
    assert_capture_index(&re, capture);

    let mut out = Vec::new();
    for m in re.matches(text, range) {
        let mut m = m?;
        if let Some(c) = m.captures.get_mut(capture).and_then(Option::take) {
            out.push(c.text);
        }
    }
    Ok(out)
}
