//! Case conversion.
//!
//! All four converters share the same skeleton: break the input into words
//! on whitespace and non-alphanumeric boundaries, then rejoin under the
//! target casing rule. Empty and single-character inputs round-trip without
//! error through every one of them.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALNUM_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("non-alnum pattern should compile"));

/// Uppercase the first character, leave the rest alone.
pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase the first letter of every whitespace-delimited word.
fn uppercase_words(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        if at_word_start && !c.is_whitespace() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    out
}

/// Lowercase the first character, leave the rest alone.
fn lowercase_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `"Some input-text"` → `"someInputText"`.
pub fn to_camel_case(input: &str) -> String {
    let lowered = input.to_lowercase();
    let spaced = NON_ALNUM_RUN.replace_all(&lowered, " ");
    let titled = uppercase_words(&spaced);
    let joined: String = titled.chars().filter(|c| !c.is_whitespace()).collect();
    lowercase_first(&joined)
}

/// Shared body of the snake and kebab converters: title-case word heads,
/// drop the whitespace, put `sep` before each remaining internal uppercase,
/// lowercase everything, trim stray separators off the ends.
fn to_delimited(input: &str, sep: char) -> String {
    let titled = uppercase_words(input);
    let mut out = String::with_capacity(input.len());
    let mut first = true;
    for c in titled.chars() {
        if c.is_whitespace() {
            continue;
        }
        if c.is_uppercase() && !first {
            out.push(sep);
        }
        out.extend(c.to_lowercase());
        first = false;
    }
    out.trim_matches(sep).to_string()
}

/// `"Some inputText"` → `"some_input_text"`.
pub fn to_snake_case(input: &str) -> String {
    to_delimited(input, '_')
}

/// `"Some inputText"` → `"some-input-text"`.
pub fn to_kebab_case(input: &str) -> String {
    to_delimited(input, '-')
}

/// Lowercase the input, then uppercase the first letter of every
/// whitespace-delimited word.
pub fn to_title_case(input: &str) -> String {
    uppercase_words(&input.to_lowercase())
}
