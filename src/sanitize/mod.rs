//! Sanitizers that turn arbitrary input into safe identifiers.
//!
//! Every sanitizer runs the digit-script normalizer first, then a fixed
//! sequence of regex passes. Word character means ASCII `[A-Za-z0-9_]`
//! throughout; non-ASCII letters are stripped, not transliterated.

pub mod email;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;
use crate::normalize::digits_to_ascii;

pub use email::{DefaultEmailCleaner, EmailCleaner};

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern should compile"));
static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("non-word pattern should compile"));
static UNDERSCORE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_{2,}").expect("underscore-run pattern should compile"));
static LEADING_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+").expect("leading-digit pattern should compile"));
static NON_ALNUM_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("non-alnum pattern should compile"));
static HYPHEN_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-{2,}").expect("hyphen-run pattern should compile"));

/// Produce a safe username: whitespace runs become a single underscore,
/// everything outside `[A-Za-z0-9_]` is stripped, underscore runs collapse,
/// and leading/trailing underscores are trimmed.
///
/// An input with no word characters sanitizes to the empty string; that is
/// valid output, not an error.
pub fn sanitize_username(input: &str, lowercase: bool) -> String {
    let normalized = digits_to_ascii(input);
    let replaced = WHITESPACE_RUN.replace_all(&normalized, "_");
    let stripped = NON_WORD.replace_all(&replaced, "");
    let collapsed = UNDERSCORE_RUN.replace_all(&stripped, "_");
    let trimmed = collapsed.trim_matches('_');
    if lowercase {
        trimmed.to_lowercase()
    } else {
        trimmed.to_string()
    }
}

/// Produce a URL-safe slug: the leading digit run is dropped, every run of
/// non-alphanumeric characters becomes a single hyphen, hyphen runs collapse,
/// and leading/trailing hyphens are trimmed.
pub fn sanitize_slug(input: &str, lowercase: bool) -> String {
    let normalized = digits_to_ascii(input);
    let no_leading = LEADING_DIGITS.replace(&normalized, "");
    let replaced = NON_ALNUM_RUN.replace_all(&no_leading, "-");
    let collapsed = HYPHEN_RUN.replace_all(&replaced, "-");
    let trimmed = collapsed.trim_matches('-');
    if lowercase {
        trimmed.to_lowercase()
    } else {
        trimmed.to_string()
    }
}

/// Digit normalization plus lowercasing. This is input normalization only —
/// never a substitute for password hashing.
pub fn sanitize_password(input: &str) -> String {
    digits_to_ascii(input).to_lowercase()
}

/// Normalize digits, then hand the result to an [`EmailCleaner`]. Errors
/// from the cleaner propagate unchanged.
pub fn sanitize_email(input: &str, cleaner: &dyn EmailCleaner) -> Result<String> {
    cleaner.clean(&digits_to_ascii(input))
}

/// [`sanitize_email`] with the built-in [`DefaultEmailCleaner`].
pub fn sanitize_email_default(input: &str) -> Result<String> {
    sanitize_email(input, &DefaultEmailCleaner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_reference_vector() {
        assert_eq!(sanitize_username("Hello   World!!", true), "hello_world");
    }

    #[test]
    fn username_preserves_case_when_asked() {
        assert_eq!(sanitize_username("Hello   World!!", false), "Hello_World");
    }

    #[test]
    fn username_all_symbols_yields_empty() {
        assert_eq!(sanitize_username("!!!???", true), "");
    }

    #[test]
    fn slug_reference_vector() {
        assert_eq!(sanitize_slug("123 My Awesome Post!!", true), "my-awesome-post");
    }

    #[test]
    fn slug_drops_underscores() {
        // Underscores are separators in slugs, not word characters.
        assert_eq!(sanitize_slug("foo_bar baz", true), "foo-bar-baz");
    }

    #[test]
    fn password_normalizes_digits_and_case() {
        assert_eq!(sanitize_password("PaSs۱۲۳"), "pass123");
    }
}
