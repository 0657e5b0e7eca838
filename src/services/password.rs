//! Password hashing and verification.
//!
//! Encoded form is `"<salt-hex>$<digest-hex>"` where the digest is
//! SHA-256 over the salt hex, a separator, and the password bytes.
//! Verification recomputes the digest from the stored salt and compares.

use rand::Rng;
use sha2::{Digest, Sha256};

use super::session::bytes_to_hex;

const SALT_LEN: usize = 16;

fn digest_hex(salt_hex: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt_hex.as_bytes());
    hasher.update(b"$");
    hasher.update(password.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

/// Hash a password with a fresh random salt.
#[must_use]
pub fn hash(password: &str) -> String {
    let salt: [u8; SALT_LEN] = rand::rng().random();
    let salt_hex = bytes_to_hex(&salt);
    let digest = digest_hex(&salt_hex, password);
    format!("{salt_hex}${digest}")
}

/// Check a password against a stored `"<salt>$<digest>"` value.
///
/// Malformed stored values verify as false rather than erroring; a user
/// row with a corrupt hash simply cannot log in.
#[must_use]
pub fn verify(password: &str, encoded: &str) -> bool {
    let Some((salt_hex, digest)) = encoded.split_once('$') else {
        return false;
    };
    digest_hex(salt_hex, password) == digest
}

#[cfg(test)]
#[path = "password_test.rs"]
mod tests;
