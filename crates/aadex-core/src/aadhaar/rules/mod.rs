//! Rule-based field resolvers for Aadhaar card text.
//!
//! Each field resolves through a fixed-priority list of pattern
//! strategies. A strategy is a pure `&str -> Option<String>` function; the
//! resolver takes the first `Some` and never backtracks. Absence of a
//! match leaves the field empty, it is never an error.

pub mod address;
pub mod digits;
pub mod dob;
pub mod gender;
pub mod name;
pub mod patterns;

pub use address::AddressReconstructor;
pub use digits::{digit_runs, find_postal_code, resolve_id_number};
pub use dob::{parse_date, resolve_date_of_birth};
pub use gender::resolve_gender;
pub use name::resolve_name;

use regex::Regex;

/// A single resolution strategy over raw text.
pub type Strategy = fn(&str) -> Option<String>;

/// Fold a strategy list: first accepted candidate wins, empty otherwise.
pub(crate) fn first_match(strategies: &[Strategy], text: &str) -> String {
    strategies
        .iter()
        .find_map(|strategy| strategy(text))
        .unwrap_or_default()
}

/// Capture group 1 of `re`, trimmed; whitespace-only captures are rejected
/// so the next strategy gets its turn.
pub(crate) fn capture_trimmed(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}
