//! Core engine and operation implementations
//!
//! This module contains the engine collaborator and the business logic for
//! every operation family.

pub mod engine;
pub mod extract;
pub mod matching;
pub mod replace;

// Re-export commonly used items
pub use engine::{CompiledRegex, EngineError};
pub use extract::{
    all_matches, matched_substring, range_of_first_match, try_all_matches, try_matched_substring,
};
pub use matching::{is_matched, try_is_matched};
pub use replace::{
    replace_all_in_place, replacing_all, try_replace_all_in_place, try_replacing_all,
};
