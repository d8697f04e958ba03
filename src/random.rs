//! Random string and UUID generation: the only non-deterministic corner of
//! the crate.

use rand::Rng;

use crate::error::{Result, TextKitError};

const ALPHANUMERIC: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A random string sampled uniformly (with replacement) from the 62
/// alphanumeric characters.
///
/// Backed by the thread-local generator — fine for display-only identifiers,
/// not for secrets or tokens an adversary may guess.
pub fn random_alphanumeric(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| ALPHANUMERIC[rng.gen_range(0..ALPHANUMERIC.len())] as char)
        .collect()
}

/// A version-4 UUID in canonical lowercase hyphenated form.
///
/// The 16 bytes come straight from the operating system CSPRNG; the version
/// nibble is forced to `0100` and the variant bits to `10`. If the platform
/// has no secure entropy source this is [`TextKitError::RandomnessUnavailable`]
/// — there is no weak fallback.
pub fn uuid_v4() -> Result<String> {
    let mut bytes = [0u8; 16];
    getrandom::getrandom(&mut bytes).map_err(|e| {
        tracing::debug!("entropy source unavailable");
        TextKitError::RandomnessUnavailable {
            reason: e.to_string(),
        }
    })?;

    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    let mut out = String::with_capacity(36);
    for (i, b) in bytes.iter().enumerate() {
        if matches!(i, 4 | 6 | 8 | 10) {
            out.push('-');
        }
        out.push_str(&format!("{b:02x}"));
    }
    Ok(out)
}
