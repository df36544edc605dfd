//! Key schedule: password-derived initial key and its per-round evolution.
//!
//! The key is an ordered sequence of bytes, one per password character. It
//! never changes length across rounds, only its values. Each key is owned
//! by a single pipeline invocation; nothing is persisted or shared.

use crate::consts::{KEY_EVOLVE_ADD, KEY_EVOLVE_MUL};
use crate::error::CipherError;

/// Derives the initial key from a password: each character's code point
/// reduced mod 256, order preserved.
pub(crate) fn derive_key(password: &str) -> Result<Vec<u8>, CipherError> {
    if password.is_empty() {
        return Err(CipherError::InvalidInput("password must not be empty"));
    }
    Ok(password.chars().map(|c| (c as u32 % 256) as u8).collect())
}

/// One key-evolution step: `v -> v * 7 + 3 (mod 256)` per byte.
///
/// Pure function; the same input always yields the same output.
pub(crate) fn evolve_key(key: &[u8]) -> Vec<u8> {
    key.iter()
        .map(|&v| v.wrapping_mul(KEY_EVOLVE_MUL).wrapping_add(KEY_EVOLVE_ADD))
        .collect()
}

/// Builds the forward key sequence `[k0, k1, .., k(rounds-1)]` where
/// `k0 = derive_key(password)` and `k(i+1) = evolve_key(k_i)`.
pub(crate) fn key_sequence(password: &str, rounds: u32) -> Result<Vec<Vec<u8>>, CipherError> {
    let mut key = derive_key(password)?;
    let mut keys = Vec::with_capacity(rounds as usize);
    for _ in 1..rounds {
        let next = evolve_key(&key);
        keys.push(key);
        key = next;
    }
    keys.push(key);
    Ok(keys)
}
