//! Value types shared by all operations
//!
//! Matches and captures carry both byte ranges and the text they denote, so
//! callers never have to re-slice the input.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Options applied when compiling a pattern.
///
/// The default is case-sensitive matching. Extend with new flags rather than
/// exposing engine-specific bitmasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Match letters without regard to case (`(?i)`).
    pub case_insensitive: bool,
}

impl MatchOptions {
    /// Case-insensitive matching, everything else default.
    pub fn caseless() -> Self {
        Self {
            case_insensitive: true,
        }
    }
}

/// One capture group's contribution to a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// Byte range within the input text (full-text coordinates, even when a
    /// sub-range was searched).
    pub range: Range<usize>,
    /// The text the range denotes.
    pub text: String,
}

/// A single match: capture 0 is the whole matched span, indices >= 1 are the
/// parenthesized groups in left-to-right, outermost-first order. A `None`
/// slot is a group that did not participate in this match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub captures: Vec<Option<Capture>>,
}

impl Match {
    /// Capture 0, the full matched span. Present for every match.
    pub fn full(&self) -> &Capture {
        self.captures[0]
            .as_ref()
            .expect("BUG: engine produced a match without capture 0")
    }

    /// Capture at `index`, or `None` if the group did not participate.
    pub fn get(&self, index: usize) -> Option<&Capture> {
        self.captures.get(index).and_then(|c| c.as_ref())
    }

    /// Number of capture groups the pattern defines (excluding capture 0).
    pub fn group_count(&self) -> usize {
        self.captures.len() - 1
    }
}
