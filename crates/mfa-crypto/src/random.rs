//! Cryptographically secure random number generation.
//!
//! Shared OTP secrets must come from a cryptographically secure source
//! (RFC 4226 §7.5). The thread-local generator used here is
//! cryptographically secure by default and safe to call from
//! concurrent request handlers.

use rand::{Rng, SeedableRng};

/// Generates a cryptographically secure random byte array.
///
/// # Arguments
///
/// * `len` - Number of random bytes to generate
#[must_use]
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut rng = rand::rng();
    let mut bytes = vec![0u8; len];
    rng.fill(&mut bytes[..]);
    bytes
}

/// Generates a deterministic byte array from a seed (for testing only).
///
/// # Warning
///
/// This function is NOT cryptographically secure and should only be
/// used for testing purposes. Production code must use [`random_bytes`].
#[must_use]
pub fn seeded_random(seed: [u8; 32], len: usize) -> Vec<u8> {
    let mut rng = rand::rngs::StdRng::from_seed(seed);
    let mut bytes = vec![0u8; len];
    rng.fill(&mut bytes[..]);
    bytes
}
