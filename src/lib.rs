//! rexkit - regex convenience operations for strings
//!
//! Match tests, capture extraction, and literal replacement, without
//! constructing pattern objects or walking match results by hand. Patterns
//! are compiled per call by a dual-engine layer: the `regex` crate for
//! everything it supports, `fancy-regex` for lookaround, backreferences, and
//! atomic groups.
//!
//! Every operation family comes in two forms:
//! - a simple form that treats a malformed pattern the same as "no match"
//!   (`false`, `None`, empty, unchanged), and
//! - a `try_` form with [`MatchOptions`], an optional search range, and an
//!   explicit [`EngineError`] channel.
//!
//! "Absent" and "error" are distinct everywhere: a group that did not
//! participate in a match is `None` inside an `Ok`, never an `Err`. Asking
//! for a capture index beyond the pattern's group count is a programmer
//! error and panics.
//!
//! ```
//! use rexkit::{all_matches, matched_substring, replacing_all};
//!
//! assert_eq!(matched_substring("key=value", r"(\w+)=(\w+)", 2), Some("value".to_string()));
//! assert_eq!(all_matches("1 and 2", r"\d+", 0), vec!["1", "2"]);
//! assert_eq!(replacing_all("a1b2", r"\d", "-"), "a-b-");
//! ```

pub mod core;
pub mod ext;
pub mod types;

pub use crate::core::{
    all_matches, is_matched, matched_substring, range_of_first_match, replace_all_in_place,
    replacing_all, try_all_matches, try_is_matched, try_matched_substring,
    try_replace_all_in_place, try_replacing_all, CompiledRegex, EngineError,
};
pub use crate::ext::{StrRegexExt, StringRegexExt};
pub use crate::types::{Capture, Match, MatchOptions};
