//! Character-class filters and small removal helpers.

/// Keep only ASCII letters (and spaces when `keep_spaces`), trimming the
/// result.
pub fn filter_alphabetic(input: &str, keep_spaces: bool) -> String {
    retain_trimmed(input, |c| c.is_ascii_alphabetic(), keep_spaces)
}

/// Keep only ASCII letters and digits (and spaces when `keep_spaces`),
/// trimming the result.
pub fn filter_alphanumeric(input: &str, keep_spaces: bool) -> String {
    retain_trimmed(input, |c| c.is_ascii_alphanumeric(), keep_spaces)
}

/// Keep only ASCII digits (and spaces when `keep_spaces`), trimming the
/// result.
pub fn filter_numeric(input: &str, keep_spaces: bool) -> String {
    retain_trimmed(input, |c| c.is_ascii_digit(), keep_spaces)
}

fn retain_trimmed(input: &str, keep: impl Fn(char) -> bool, keep_spaces: bool) -> String {
    let filtered: String = input
        .chars()
        .filter(|&c| keep(c) || (keep_spaces && c == ' '))
        .collect();
    filtered.trim().to_string()
}

/// Strip every occurrence of each character in `unwanted`.
pub fn remove_characters(input: &str, unwanted: &str) -> String {
    input.chars().filter(|&c| !unwanted.contains(c)).collect()
}

/// Strip ASCII spaces only; other whitespace is left alone.
pub fn remove_spaces(input: &str) -> String {
    input.chars().filter(|&c| c != ' ').collect()
}

/// Reverse by code point.
pub fn reverse(input: &str) -> String {
    input.chars().rev().collect()
}
