use crate::error::Result;

/// The collaborator that turns a raw string into a clean email address.
///
/// The library only defines the seam; callers with their own email rules
/// implement this and pass it to [`super::sanitize_email`]. Cleaner errors
/// propagate to the caller unchanged.
pub trait EmailCleaner: Send + Sync {
    /// Clean the input, returning a normalized email string.
    fn clean(&self, input: &str) -> Result<String>;

    /// Name of this cleaner (for logging/debugging).
    fn name(&self) -> &str;
}

/// Minimal RFC 5322 syntax normalizer: trims whitespace, strips characters
/// outside the atext set (plus `@` and `.`), and lowercases the domain part.
/// It never rejects — stripping is total.
pub struct DefaultEmailCleaner;

// RFC 5322 atext specials, the printable ASCII allowed in a local part
// besides alphanumerics.
const ATEXT_SPECIALS: &str = "!#$%&'*+-/=?^_`{|}~";

fn is_email_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '@' || c == '.' || ATEXT_SPECIALS.contains(c)
}

impl EmailCleaner for DefaultEmailCleaner {
    fn clean(&self, input: &str) -> Result<String> {
        let stripped: String = input.trim().chars().filter(|&c| is_email_char(c)).collect();

        // Lowercase everything after the last `@`; the local part is
        // case-sensitive per the RFC and stays untouched.
        let cleaned = match stripped.rfind('@') {
            Some(at) => {
                let (local, domain) = stripped.split_at(at);
                format!("{local}{}", domain.to_ascii_lowercase())
            }
            None => stripped,
        };
        Ok(cleaned)
    }

    fn name(&self) -> &str {
        "default"
    }
}
