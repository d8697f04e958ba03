//! Substring and pattern classification.

use std::collections::HashSet;
use std::fmt;

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TextKitError};

static UUID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("uuid pattern should compile")
});
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern should compile")
});
static EMAIL_SCAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")
        .expect("email scan pattern should compile")
});
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{10,15}$").expect("phone pattern should compile"));

/// True if at least one (`require_all = false`) or every
/// (`require_all = true`) candidate occurs in `input` as a substring.
///
/// An empty candidate list is false for at-least-one and vacuously true for
/// all.
pub fn contains_any(input: &str, candidates: &[&str], require_all: bool) -> bool {
    if candidates.is_empty() {
        return require_all;
    }

    let automaton = AhoCorasick::new(candidates).expect("valid aho-corasick literals");
    let mut seen: HashSet<usize> = HashSet::new();
    for mat in automaton.find_overlapping_iter(input) {
        seen.insert(mat.pattern().as_usize());
        if !require_all {
            return true;
        }
        if seen.len() == candidates.len() {
            return true;
        }
    }
    require_all && seen.len() == candidates.len()
}

/// Whether `pattern` matches anywhere in `input`. A malformed pattern is a
/// [`TextKitError::InvalidPattern`] error, never a silent `false`.
pub fn matches_pattern(input: &str, pattern: &str) -> Result<bool> {
    let re = Regex::new(pattern).map_err(|e| {
        tracing::debug!(%pattern, "pattern failed to compile");
        TextKitError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        }
    })?;
    Ok(re.is_match(input))
}

/// Whether `input` is a canonical 8-4-4-4-12 hyphenated hex UUID, either hex
/// case. Version and variant nibbles are not checked.
pub fn is_valid_uuid(input: &str) -> bool {
    UUID_PATTERN.is_match(input)
}

/// What a user typed into a login field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginField {
    Email,
    PhoneNumber,
    Username,
}

impl fmt::Display for LoginField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LoginField::Email => "email",
            LoginField::PhoneNumber => "phone_number",
            LoginField::Username => "username",
        };
        f.write_str(s)
    }
}

/// Classify a login identifier. The priority is fixed: email syntax wins,
/// then a 10-15 digit string with optional leading `+`, then username.
/// Ambiguous inputs resolve to the earliest matching category.
pub fn identify_login_field(input: &str) -> LoginField {
    if EMAIL_PATTERN.is_match(input) {
        LoginField::Email
    } else if PHONE_PATTERN.is_match(input) {
        LoginField::PhoneNumber
    } else {
        LoginField::Username
    }
}

/// Every email-shaped substring of `input`, in order of appearance.
pub fn extract_emails(input: &str) -> Vec<String> {
    EMAIL_SCAN
        .find_iter(input)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_any_overlapping_candidates() {
        // "b" sits inside "abc"; both must be seen for require_all.
        assert!(contains_any("abc", &["abc", "b"], true));
        assert!(contains_any("abc", &["abc", "b"], false));
    }

    #[test]
    fn contains_any_empty_candidates() {
        assert!(!contains_any("anything", &[], false));
        assert!(contains_any("anything", &[], true));
    }

    #[test]
    fn malformed_pattern_is_an_error() {
        let err = matches_pattern("input", "(unclosed").unwrap_err();
        assert!(matches!(err, TextKitError::InvalidPattern { .. }));
    }

    #[test]
    fn login_field_display_matches_wire_strings() {
        assert_eq!(LoginField::Email.to_string(), "email");
        assert_eq!(LoginField::PhoneNumber.to_string(), "phone_number");
        assert_eq!(LoginField::Username.to_string(), "username");
    }

    #[test]
    fn extract_emails_in_order() {
        let input = "contact a@x.io or b@y.co, not c@nope";
        assert_eq!(extract_emails(input), vec!["a@x.io", "b@y.co"]);
    }
}
