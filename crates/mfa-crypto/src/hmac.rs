//! Keyed HMAC functions.
//!
//! Each function computes a full-length HMAC digest of `data` under
//! `key`. Digest lengths are 20 (SHA-1), 32 (SHA-256), and 64
//! (SHA-512) bytes.

use aws_lc_rs::hmac;

/// Computes HMAC-SHA1 of the input data.
///
/// SHA-1 remains mandatory-to-implement for RFC 4226 one-time
/// passwords; it is not used for any other purpose in this workspace.
#[must_use]
pub fn hmac_sha1(key: &[u8], data: &[u8]) -> Vec<u8> {
    sign(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, key, data)
}

/// Computes HMAC-SHA256 of the input data.
#[must_use]
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    sign(hmac::HMAC_SHA256, key, data)
}

/// Computes HMAC-SHA512 of the input data.
#[must_use]
pub fn hmac_sha512(key: &[u8], data: &[u8]) -> Vec<u8> {
    sign(hmac::HMAC_SHA512, key, data)
}

fn sign(algorithm: hmac::Algorithm, key: &[u8], data: &[u8]) -> Vec<u8> {
    let key = hmac::Key::new(algorithm, key);
    hmac::sign(&key, data).as_ref().to_vec()
}
