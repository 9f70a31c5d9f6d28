//! Replacement
//!
//! Replaces every non-overlapping match with a literal string, either into a
//! new `String` or in place. The replacement is never treated as a template:
//! `$1` and friends are copied through verbatim.

use std::ops::Range;

use super::engine::{CompiledRegex, EngineError};
use crate::types::MatchOptions;

/// New string with every match of `pattern` replaced by `replacement`.
///
/// Matches are located against the original text; replaced text is not
/// re-scanned. Returns an unchanged copy when nothing matches, or when the
/// pattern fails to compile; use [`try_replacing_all`] to surface the latter.
pub fn replacing_all(text: &str, pattern: &str, replacement: &str) -> String {
    try_replacing_all(text, pattern, MatchOptions::default(), replacement)
        .unwrap_or_else(|_| text.to_string())
}

/// Like [`replacing_all`], with options and an explicit error channel.
///
/// Splices the literal over the same match scan the in-place form uses, so
/// both forms (and both engines) see the identical match sequence.
pub fn try_replacing_all(
    text: &str,
    pattern: &str,
    options: MatchOptions,
    replacement: &str,
) -> Result<String, EngineError> {
    let re = CompiledRegex::new(pattern, options)?;

    let mut result = String::with_capacity(text.len());
    let mut last_end = 0;
    for m in re.matches(text, None) {
        let full = m?.full().range.clone();
        result.push_str(&text[last_end..full.start]);
        result.push_str(replacement);
        last_end = full.end;
    }
    result.push_str(&text[last_end..]);
    Ok(result)
}

/// Replace every match of `pattern` in `text` in place, returning the number
/// of replacements made.
///
/// No-op (returning 0) when nothing matches or the pattern fails to compile;
/// use [`try_replace_all_in_place`] to surface compile errors.
pub fn replace_all_in_place(text: &mut String, pattern: &str, replacement: &str) -> usize {
    try_replace_all_in_place(text, pattern, MatchOptions::default(), replacement).unwrap_or(0)
}

/// Like [`replace_all_in_place`], with options and an explicit error channel.
///
/// All match ranges are computed against the text before it is touched, then
/// applied from the highest start offset down, so earlier offsets stay valid
/// while later spans shrink or grow.
pub fn try_replace_all_in_place(
    text: &mut String,
    pattern: &str,
    options: MatchOptions,
    replacement: &str,
) -> Result<usize, EngineError> {
    let re = CompiledRegex::new(pattern, options)?;

    let mut ranges = Vec::new();
    for m in re.matches(text, None) {
        ranges.push(m?.full().range.clone());
    }

    apply_edits_descending(text, &ranges, replacement);
    Ok(ranges.len())
}

/// Apply `replacement` over each of `ranges`, back to front.
///
/// `ranges` must be non-overlapping and sorted ascending by start offset, as
/// produced by a left-to-right match scan.
fn apply_edits_descending(text: &mut String, ranges: &[Range<usize>], replacement: &str) {
    for range in ranges.iter().rev() {
        text.replace_range(range.clone(), replacement);
    }
}
