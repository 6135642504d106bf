//! Identifier classification.
//!
//! An identifier is clean when it is non-empty and every character is an
//! ASCII letter, digit, or underscore. Scene and choice ids are expected to
//! satisfy this so they can be referenced safely from code and tooling.

use regex::Regex;
use std::sync::OnceLock;

fn clean_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("clean id regex"))
}

fn disallowed_char_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_]").expect("disallowed char regex"))
}

/// Whether `s` is a clean identifier. Empty strings are not clean.
pub fn is_clean_id(s: &str) -> bool {
    clean_id_re().is_match(s)
}

/// Every character of `s` outside the identifier alphabet, in order,
/// duplicates retained.
pub fn offending_chars(s: &str) -> Vec<char> {
    disallowed_char_re()
        .find_iter(s)
        .filter_map(|m| m.as_str().chars().next())
        .collect()
}
