use super::*;

// =============================================================================
// hash
// =============================================================================

#[test]
fn hash_has_salt_and_digest_parts() {
    let encoded = hash("hunter2");
    let (salt, digest) = encoded.split_once('$').unwrap();
    assert_eq!(salt.len(), 32);
    assert_eq!(digest.len(), 64);
    assert!(salt.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn hash_same_password_twice_differs() {
    // Fresh salt per call.
    assert_ne!(hash("hunter2"), hash("hunter2"));
}

// =============================================================================
// verify
// =============================================================================

#[test]
fn verify_round_trip() {
    let encoded = hash("correct horse battery staple");
    assert!(verify("correct horse battery staple", &encoded));
}

#[test]
fn verify_rejects_wrong_password() {
    let encoded = hash("hunter2");
    assert!(!verify("hunter3", &encoded));
}

#[test]
fn verify_rejects_empty_password_against_real_hash() {
    let encoded = hash("hunter2");
    assert!(!verify("", &encoded));
}

#[test]
fn verify_rejects_malformed_stored_value() {
    assert!(!verify("anything", "no-separator-here"));
    assert!(!verify("anything", ""));
}

#[test]
fn verify_is_salt_sensitive() {
    let encoded = hash("hunter2");
    let (_, digest) = encoded.split_once('$').unwrap();
    let tampered = format!("{}${digest}", "00".repeat(16));
    assert!(!verify("hunter2", &tampered));
}
