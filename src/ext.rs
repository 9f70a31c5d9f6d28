//! Extension traits for `str` and `String`
//!
//! Method-call sugar over the free functions in [`crate::core`], split the
//! same way as the operations themselves: read-only lookups on `str`,
//! in-place mutation on `String`.

use std::ops::Range;

use crate::core;

/// Read-only regex convenience methods on string slices.
pub trait StrRegexExt {
    /// See [`core::matching::is_matched`].
    fn is_matched_by(&self, pattern: &str) -> bool;

    /// See [`core::extract::matched_substring`].
    fn matched_substring(&self, pattern: &str, capture: usize) -> Option<String>;

    /// See [`core::extract::range_of_first_match`].
    fn range_of_first_match(&self, pattern: &str) -> Option<Range<usize>>;

    /// See [`core::extract::all_matches`].
    fn all_matches(&self, pattern: &str, capture: usize) -> Vec<String>;

    /// See [`core::replace::replacing_all`].
    fn replacing_all(&self, pattern: &str, replacement: &str) -> String;
}

impl StrRegexExt for str {
    fn is_matched_by(&self, pattern: &str) -> bool {
        core::is_matched(self, pattern)
    }

    fn matched_substring(&self, pattern: &str, capture: usize) -> Option<String> {
        core::matched_substring(self, pattern, capture)
    }

    fn range_of_first_match(&self, pattern: &str) -> Option<Range<usize>> {
        core::range_of_first_match(self, pattern)
    }

    fn all_matches(&self, pattern: &str, capture: usize) -> Vec<String> {
        core::all_matches(self, pattern, capture)
    }

    fn replacing_all(&self, pattern: &str, replacement: &str) -> String {
        core::replacing_all(self, pattern, replacement)
    }
}

/// In-place regex replacement on owned strings.
pub trait StringRegexExt {
    /// See [`core::replace::replace_all_in_place`].
    fn replace_all_matched(&mut self, pattern: &str, replacement: &str) -> usize;
}

impl StringRegexExt for String {
    fn replace_all_matched(&mut self, pattern: &str, replacement: &str) -> usize {
        core::replace_all_in_place(self, pattern, replacement)
    }
}
