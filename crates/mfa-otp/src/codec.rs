//! One-time-password code generation.
//!
//! Implements the HOTP value computation of RFC 4226 §5.3 (HMAC over
//! the big-endian counter, dynamic truncation, decimal reduction) and
//! the RFC 6238 time-step derivation. Pure functions: no state, no
//! I/O, deterministic for equal inputs.

use mfa_crypto::{hmac_sha1, hmac_sha256, hmac_sha512, OtpAlgorithm};

/// Generates a one-time code for a counter value.
///
/// The result is a decimal string of exactly `digits` characters,
/// left-padded with zeros. Total for any non-empty seed and `digits`
/// in `1..=9`; leading zeros are significant.
#[must_use]
pub fn generate_code(seed: &[u8], counter: u64, digits: u8, algorithm: OtpAlgorithm) -> String {
    let digest = compute_hmac(seed, counter, algorithm);
    let code = truncate(&digest, digits);
    format!("{:0width$}", code, width = digits as usize)
}

/// Derives the time-step counter for a wall-clock time.
///
/// `counter = floor(unix_secs / step_secs)` with epoch 0, per
/// RFC 6238. `step_secs` must be non-zero (enforced by
/// [`OtpConfig::validate`](crate::OtpConfig::validate)).
#[must_use]
pub const fn counter_at(unix_secs: u64, step_secs: u64) -> u64 {
    unix_secs / step_secs
}

fn compute_hmac(seed: &[u8], counter: u64, algorithm: OtpAlgorithm) -> Vec<u8> {
    let counter_bytes = counter.to_be_bytes();

    match algorithm {
        OtpAlgorithm::Sha1 => hmac_sha1(seed, &counter_bytes),
        OtpAlgorithm::Sha256 => hmac_sha256(seed, &counter_bytes),
        OtpAlgorithm::Sha512 => hmac_sha512(seed, &counter_bytes),
    }
}

// RFC 4226 §5.3 dynamic truncation: the low nibble of the last digest
// byte selects a 4-byte window, whose top bit is masked off to yield a
// non-negative 31-bit value. 10^9 < 2^32, so u32 covers digits up to 9.
fn truncate(digest: &[u8], digits: u8) -> u32 {
    let offset = (digest.last().copied().unwrap_or(0) & 0x0f) as usize;
    let binary = u32::from_be_bytes([
        digest.get(offset).copied().unwrap_or(0) & 0x7f,
        digest.get(offset + 1).copied().unwrap_or(0),
        digest.get(offset + 2).copied().unwrap_or(0),
        digest.get(offset + 3).copied().unwrap_or(0),
    ]);
    binary % 10_u32.pow(u32::from(digits))
}

/// Constant-time comparison of two byte slices.
///
/// Used for token comparison so response timing does not leak how many
/// leading characters matched.
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
