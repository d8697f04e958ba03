//! Bounded-length display transforms: truncation and masking.
//!
//! Everything here indexes by code point, not byte, so multi-byte input
//! never splits mid-character.

use crate::error::{Result, TextKitError};

/// Truncate `input` to at most `max_chars` code points, trimming trailing
/// whitespace from the cut and appending `ellipsis`.
///
/// `max_chars == 0` yields the empty string. Input already within the limit
/// is returned unchanged. The ellipsis is appended whole even when that
/// pushes the result past `max_chars`.
pub fn truncate(input: &str, max_chars: usize, ellipsis: &str) -> String {
    if max_chars == 0 {
        return String::new();
    }
    if input.chars().count() <= max_chars {
        return input.to_string();
    }

    let mut cut: String = input.chars().take(max_chars).collect();
    cut.truncate(cut.trim_end().len());
    cut.push_str(ellipsis);
    cut
}

/// Replace `length` characters of `input`, starting at character index
/// `start`, with repeated `mask_char`. `length = None` masks through to the
/// end; an explicit length overrunning the end is clamped.
///
/// `start` past the end of the string is [`TextKitError::InvalidArgument`].
/// Negative offsets from the end are not supported.
pub fn mask(input: &str, start: usize, length: Option<usize>, mask_char: char) -> Result<String> {
    let chars: Vec<char> = input.chars().collect();
    if start > chars.len() {
        return Err(TextKitError::InvalidArgument {
            reason: format!("mask start {start} is past input length {}", chars.len()),
        });
    }

    let available = chars.len() - start;
    let masked = length.unwrap_or(available).min(available);

    let mut out = String::with_capacity(input.len());
    out.extend(&chars[..start]);
    out.extend(std::iter::repeat(mask_char).take(masked));
    out.extend(&chars[start + masked..]);
    Ok(out)
}

/// Spell out the separators of an email address so scrapers can't lift it:
/// `@` becomes " at ", `.` becomes " dot ".
pub fn obfuscate_email(email: &str) -> String {
    email.replace('@', " at ").replace('.', " dot ")
}
