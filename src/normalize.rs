//! Digit-script normalization.

/// The ten Extended Arabic-Indic (Persian) digits, U+06F0 through U+06F9,
/// in value order.
const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Replace each Persian digit with its ASCII equivalent, position for
/// position. Every other character passes through unchanged.
pub fn digits_to_ascii(input: &str) -> String {
    input
        .chars()
        .map(|c| match PERSIAN_DIGITS.iter().position(|&d| d == c) {
            Some(value) => char::from(b'0' + value as u8),
            None => c,
        })
        .collect()
}
