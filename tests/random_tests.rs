//! Integration tests for random generation.

use std::collections::HashSet;

use textkit::matcher::is_valid_uuid;
use textkit::random::{random_alphanumeric, uuid_v4};

#[test]
fn random_string_has_requested_length() {
    for len in [0, 1, 10, 62, 256] {
        assert_eq!(random_alphanumeric(len).chars().count(), len);
    }
}

#[test]
fn random_string_stays_in_the_62_char_alphabet() {
    let s = random_alphanumeric(512);
    assert!(
        s.chars().all(|c| c.is_ascii_alphanumeric()),
        "non-alphanumeric in {s:?}"
    );
}

#[test]
fn random_strings_are_not_constant() {
    // 10^3 draws of length 16 colliding would mean a broken generator.
    let draws: HashSet<String> = (0..1000).map(|_| random_alphanumeric(16)).collect();
    assert!(draws.len() > 990, "only {} distinct draws", draws.len());
}

#[test]
fn generated_uuids_validate() {
    for _ in 0..100 {
        let uuid = uuid_v4().expect("entropy source available");
        assert!(is_valid_uuid(&uuid), "{uuid:?} failed validation");
    }
}

#[test]
fn generated_uuids_carry_version_and_variant() {
    let uuid = uuid_v4().expect("entropy source available");
    let bytes = uuid.as_bytes();
    assert_eq!(bytes[14], b'4');
    assert!(matches!(bytes[19], b'8' | b'9' | b'a' | b'b'));
}

#[test]
fn generated_uuids_are_unique() {
    let uuids: HashSet<String> = (0..100).map(|_| uuid_v4().unwrap()).collect();
    assert_eq!(uuids.len(), 100);
}
